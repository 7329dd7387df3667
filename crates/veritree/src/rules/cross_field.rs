//! Cross-field rules: checks against sibling fields through the root value.
//!
//! The engine threads the original top-level value into every rule
//! invocation precisely so these rules can exist; nothing here is special
//! to the engine.

use std::borrow::Cow;

use serde_json::Value;
use tracing::warn;

use crate::error::RuleError;
use crate::rule::Rule;
use crate::rules::as_number;
use crate::violation::Violation;

// ============================================================================
// SAME AS
// ============================================================================

/// Requires the field to equal another top-level field of the root object,
/// e.g. a password confirmation.
///
/// The comparison is plain value equality, including null: a missing field
/// matches a missing counterpart.
#[derive(Debug, Clone)]
pub struct SameAs {
    /// Name of the root field to compare against.
    pub other: String,
    message: Option<Cow<'static, str>>,
}

impl SameAs {
    /// Creates the rule for the given root field.
    #[must_use]
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            message: None,
        }
    }

    /// Replaces the rule's default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for SameAs {
    fn name(&self) -> &str {
        "same_as"
    }

    fn apply(&self, value: &Value, root: &Value) -> Result<Option<Violation>, RuleError> {
        let expected = root.get(&self.other).unwrap_or(&Value::Null);
        if expected == value {
            Ok(None)
        } else {
            let message = self.message.clone().unwrap_or_else(|| {
                format!("This field must match `{}`.", self.other).into()
            });
            Ok(Some(Violation::new("same_as", value, message)))
        }
    }
}

/// Creates a [`SameAs`] rule.
#[must_use]
pub fn same_as(other: impl Into<String>) -> SameAs {
    SameAs::new(other)
}

// ============================================================================
// SUM OF FIELDS
// ============================================================================

/// Requires a numeric field to equal the sum of the named root fields.
///
/// Root fields that are missing or not numeric are skipped with a diagnostic
/// warning — their presence and type are the rule-tree author's concern, not
/// this rule's.
#[derive(Debug, Clone)]
pub struct SumOfFields {
    /// Names of the root fields to sum.
    pub fields: Vec<String>,
    message: Option<Cow<'static, str>>,
}

impl SumOfFields {
    /// Creates the rule over the given root fields.
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    /// Replaces the rule's default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for SumOfFields {
    fn name(&self) -> &str {
        "sum_of_fields"
    }

    fn apply(&self, value: &Value, root: &Value) -> Result<Option<Violation>, RuleError> {
        let Some(actual) = as_number("sum_of_fields", value)? else {
            return Ok(None);
        };

        let mut sum = 0.0;
        for field in &self.fields {
            match root.get(field).and_then(Value::as_f64) {
                Some(number) => sum += number,
                None => warn!(field = field.as_str(), "sum_of_fields: skipping non-numeric field"),
            }
        }

        #[allow(clippy::float_cmp)]
        let matches_total = actual == sum;
        if matches_total {
            Ok(None)
        } else {
            let message = self.message.clone().unwrap_or_else(|| {
                format!("This field must equal the sum of {}.", self.fields.join(", ")).into()
            });
            Ok(Some(Violation::new("sum_of_fields", value, message)))
        }
    }
}

/// Creates a [`SumOfFields`] rule.
#[must_use]
pub fn sum_of_fields(fields: impl IntoIterator<Item = impl Into<String>>) -> SumOfFields {
    SumOfFields::new(fields)
}

// ============================================================================
// TESTS
// ============================================================================
