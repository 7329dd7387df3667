//! # veritree
//!
//! Declarative, recursive validation for nested data: describe the shape of
//! what you expect with a [`RuleTree`], hand the engine any
//! [`serde_json::Value`], and get back an [`ErrorTree`] mirroring the rule
//! tree's shape and containing only the fields that failed — or nothing at
//! all when the value is valid.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use veritree::prelude::*;
//!
//! let rules = RuleTree::new()
//!     .field("name", rules![required(), min_length(2)])
//!     .field(
//!         "address",
//!         RuleTree::new().field("city", rules![required()]),
//!     )
//!     .field(
//!         "items",
//!         ArrayRules::new()
//!             .collection(rules![array_min_len(1)])
//!             .element(rules![required()]),
//!     );
//!
//! let value = json!({
//!     "name": "A",
//!     "address": {"city": ""},
//!     "items": ["ok", null],
//! });
//!
//! let errors = validate(&value, &value, &rules).unwrap().unwrap();
//! let paths: Vec<_> = errors.flatten().into_iter().map(|flat| flat.path).collect();
//! assert_eq!(paths, ["name", "address.city", "items[1]"]);
//! ```
//!
//! ## How it works
//!
//! The engine walks the value and the rule tree in lock-step, driven by the
//! rule tree's fields. Each field's node is one of four kinds — a rule list,
//! a nested tree, an array node, or a dynamic node computed from the current
//! value — and each kind dispatches to its own validation strategy,
//! recursing through nested objects and array elements. Every rule in a list
//! runs (no short-circuiting), so the caller sees every broken constraint.
//!
//! Validation failures are data, never errors: an `Err` from the engine
//! means the rule tree itself is misused (see [`RuleError`]).
//!
//! ## Sync and async
//!
//! [`validate`] is fully synchronous. [`validate_async`] accepts the same
//! trees — plus [`AsyncRule`] entries for checks that need I/O — and runs
//! independent fields, rules, and array elements concurrently while
//! producing the exact same error tree.
//!
//! ## Defining rules
//!
//! Built-in rules live in [`rules`](mod@crate::rules); one-off checks can
//! use [`rule_fn`](rule::rule_fn), and the [`rule!`](macro@crate::rule)
//! macro declares a full rule type with factory and message override.

pub mod engine;
pub mod error;
pub mod error_tree;
mod macros;
pub mod prelude;
pub mod report;
pub mod rule;
pub mod rules;
pub mod tree;
pub mod violation;

pub use engine::{validate, validate_async};
pub use error::RuleError;
pub use error_tree::{
    ArrayErrors, ElementErrors, ElementFailure, ErrorTree, FieldErrors, FlatViolation,
};
pub use report::{Messages, Report, Validator};
pub use rule::{AsyncRule, FieldRule, Rule};
pub use tree::{ArrayRules, RuleNode, RuleTree};
pub use violation::{Violation, ViolationList};
