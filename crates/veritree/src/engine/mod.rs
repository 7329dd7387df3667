//! The synchronous and asynchronous validation engines.
//!
//! Both engines walk the value and its rule tree in lock-step: iteration is
//! driven by the rule tree's fields, each node is resolved through the
//! single classification point ([`RuleNode::resolve`](crate::RuleNode::resolve)),
//! and violations bubble up keyed by field name into an
//! [`ErrorTree`](crate::ErrorTree) mirroring the rule tree's shape.
//!
//! The engines are behaviorally identical: for any tree expressible with
//! only synchronous rules, [`validate`] and an awaited [`validate_async`]
//! produce the same error tree. The async engine differs only in that it
//! runs independent fields, independent rules of one list, and independent
//! array elements concurrently, bounding latency by the slowest rule rather
//! than the sum.

mod async_impl;
mod sync;

pub use async_impl::validate_async;
pub use sync::validate;

use serde_json::Value;

static NULL: Value = Value::Null;

/// Field lookup driven by the rule tree.
///
/// A field missing from `value` — or a `value` that is not an object at all
/// — is presented to rules as null, which is what lets presence rules flag
/// missing fields instead of the engine failing outright.
pub(crate) fn field_value<'a>(value: &'a Value, name: &str) -> &'a Value {
    value.get(name).unwrap_or(&NULL)
}
