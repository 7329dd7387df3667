//! Contract errors: caller misuse surfaced as `Err`, never as violations.

use std::borrow::Cow;

// ============================================================================
// RULE ERROR
// ============================================================================

/// Programmer/contract errors raised by the engine or by typed rules.
///
/// Expected, data-driven validation failures are never represented here —
/// they travel as [`Violation`](crate::Violation)s inside the error tree.
/// An `Err` from a validation call means the rule tree itself is wrong, and
/// retrying with the same inputs will fail the same way.
///
/// Two misuse states from dynamically typed renditions of this engine — a
/// null rule tree and a non-function rule entry — are unrepresentable here:
/// the rule tree is a sum type and rule lists hold trait objects. The
/// variants below cover the misuses the type system cannot rule out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// A typed rule was applied to a non-null value of the wrong primitive
    /// type. This indicates a rule-tree/value schema mismatch, not a data
    /// failure: e.g. a numeric-comparison rule on a string field.
    #[error("rule `{rule}` expects a {expected} value, got {actual}")]
    TypeMismatch {
        /// Name of the rule that rejected the value's type.
        rule: Cow<'static, str>,
        /// The primitive type the rule requires.
        expected: &'static str,
        /// The JSON type that was actually supplied.
        actual: &'static str,
    },

    /// An async rule was placed in a rule list handed to the synchronous
    /// engine. Use [`validate_async`](crate::validate_async) for trees
    /// containing async rules.
    #[error("rule `{rule}` is asynchronous; validate this tree with `validate_async`")]
    AsyncRuleInSyncPass {
        /// Name of the offending async rule.
        rule: String,
    },

    /// A chain of dynamic rule nodes kept producing further dynamic nodes
    /// and never resolved to a static node.
    #[error("dynamic rule node did not resolve after {depth} expansions")]
    DynamicDepthExceeded {
        /// Number of expansions attempted before giving up.
        depth: usize,
    },

    /// An array element rule resolved to another array rule node. Element
    /// rules must resolve to a rule list or a nested rule tree; arrays of
    /// arrays are expressed by nesting an object level.
    #[error("array element rule must resolve to a rule list or a nested rule tree")]
    ArrayElementRule,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_message_names_the_rule_and_types() {
        let error = RuleError::TypeMismatch {
            rule: "min_number".into(),
            expected: "number",
            actual: "string",
        };
        assert_eq!(
            error.to_string(),
            "rule `min_number` expects a number value, got string"
        );
    }

    #[test]
    fn async_in_sync_message_points_at_the_async_entry_point() {
        let error = RuleError::AsyncRuleInSyncPass {
            rule: "unique_email".to_string(),
        };
        assert!(error.to_string().contains("validate_async"));
    }
}
