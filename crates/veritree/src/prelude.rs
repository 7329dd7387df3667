//! Prelude module for convenient imports.
//!
//! A single `use veritree::prelude::*;` brings in the traits, tree and
//! error types, both engine entry points, and every built-in rule.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use veritree::prelude::*;
//!
//! let rules = RuleTree::new()
//!     .field("name", rules![required(), min_length(2)])
//!     .field("age", rules![min_number(18.0)]);
//!
//! let value = json!({"name": "Ada", "age": 30});
//! assert!(validate(&value, &value, &rules).unwrap().is_none());
//! ```

pub use crate::engine::{validate, validate_async};
pub use crate::error::RuleError;
pub use crate::error_tree::{
    ArrayErrors, ElementErrors, ElementFailure, ErrorTree, FieldErrors, FlatViolation,
};
pub use crate::report::{Messages, Report, Validator};
pub use crate::rule::{
    AsyncRule, FieldRule, Rule, async_rule, async_rule_fn, rule_fn,
};
pub use crate::rules::*;
pub use crate::tree::{ArrayRules, DynamicFn, RuleNode, RuleTree};
pub use crate::violation::{Violation, ViolationList};

pub use crate::rules;
