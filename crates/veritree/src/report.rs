//! Pass/fail façade over the validation engines.
//!
//! [`Validator`] is a thin convenience wrapper for callers who want a
//! boolean verdict and a configured message instead of working with the
//! error tree directly. The tree is still attached to the [`Report`] for
//! anything beyond a yes/no answer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{validate, validate_async};
use crate::error::RuleError;
use crate::error_tree::ErrorTree;
use crate::tree::RuleTree;

// ============================================================================
// MESSAGES
// ============================================================================

/// Messages attached to a [`Report`], defaulted if omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    /// Message used when validation passes.
    pub success_message: String,
    /// Message used when validation fails.
    pub error_message: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success_message: "Validation passed.".to_string(),
            error_message: "Validation failed.".to_string(),
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Outcome of a façade validation: a boolean verdict, the configured
/// message, and the error tree when validation failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// True when no field failed.
    pub is_valid: bool,
    /// The configured success or error message.
    pub message: String,
    /// The error tree; `None` exactly when `is_valid` is true.
    pub errors: Option<ErrorTree>,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Convenience wrapper turning an error tree into a pass/fail report.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veritree::rules::required;
/// use veritree::{rules, RuleTree, Validator};
///
/// let rules = RuleTree::new().field("name", rules![required()]);
/// let validator = Validator::new();
///
/// let report = validator.check(&json!({"name": ""}), &rules).unwrap();
/// assert!(!report.is_valid);
/// assert_eq!(report.message, "Validation failed.");
///
/// let report = validator.check(&json!({"name": "ok"}), &rules).unwrap();
/// assert!(report.is_valid);
/// assert!(report.errors.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    messages: Messages,
}

impl Validator {
    /// Creates a validator with default messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given messages.
    #[must_use]
    pub fn with_messages(messages: Messages) -> Self {
        Self { messages }
    }

    /// Validates `value` against `rules`, using `value` as its own root.
    pub fn check(&self, value: &Value, rules: &RuleTree) -> Result<Report, RuleError> {
        Ok(self.report(validate(value, value, rules)?))
    }

    /// Asynchronous counterpart of [`check`](Self::check).
    pub async fn check_async(&self, value: &Value, rules: &RuleTree) -> Result<Report, RuleError> {
        Ok(self.report(validate_async(value, value, rules).await?))
    }

    fn report(&self, errors: Option<ErrorTree>) -> Report {
        match errors {
            None => Report {
                is_valid: true,
                message: self.messages.success_message.clone(),
                errors: None,
            },
            Some(tree) => Report {
                is_valid: false,
                message: self.messages.error_message.clone(),
                errors: Some(tree),
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
