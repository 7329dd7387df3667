//! Built-in leaf rules.
//!
//! Rules are the engine's external collaborators: simple predicate/message
//! pairs consumed through the [`Rule`](crate::Rule) contract. Each rule
//! exposes a unique name (used as the violation's rule identifier), a
//! default message template, and a `with_message` override.
//!
//! # Categories
//!
//! - **Presence**: [`Required`], [`IsTrue`]
//! - **Length**: [`MinLength`], [`MaxLength`], [`LengthRange`]
//! - **Numeric**: [`MinNumber`], [`MaxNumber`], [`NumberRange`]
//! - **Content**: [`EmailAddress`], [`Pattern`]
//! - **Collection**: [`ArrayMinLen`], [`ArrayMaxLen`]
//! - **Cross-field**: [`SameAs`], [`SumOfFields`]
//!
//! # Type policy
//!
//! Typed rules (numeric, length, content) pass on null — presence is
//! [`required`]'s concern, so `rules![required(), min_number(10.0)]` reports
//! a single presence violation for a missing field instead of erroring. A
//! *non-null* value of the wrong primitive type is a rule-tree/value schema
//! mismatch and aborts the pass with
//! [`RuleError::TypeMismatch`](crate::RuleError::TypeMismatch).
//! Collection rules are the exception: they treat null and non-array values
//! as ordinary violations, since they are the only rules that can flag a
//! wrong-type array field.

use serde_json::Value;

use crate::error::RuleError;

pub mod collection;
pub mod content;
pub mod cross_field;
pub mod length;
pub mod numeric;
pub mod presence;

pub use collection::{ArrayMaxLen, ArrayMinLen, array_max_len, array_min_len};
pub use content::{EmailAddress, Pattern, email_address, pattern};
pub use cross_field::{SameAs, SumOfFields, same_as, sum_of_fields};
pub use length::{LengthRange, MaxLength, MinLength, length_range, max_length, min_length};
pub use numeric::{MaxNumber, MinNumber, NumberRange, max_number, min_number, number_range};
pub use presence::{IsTrue, Required, is_true, required};

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// JSON type name for diagnostics.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extracts a number for a typed rule: null passes through as `None`, any
/// other non-number type is a schema mismatch.
pub(crate) fn as_number(rule: &'static str, value: &Value) -> Result<Option<f64>, RuleError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => Ok(number.as_f64()),
        other => Err(RuleError::TypeMismatch {
            rule: rule.into(),
            expected: "number",
            actual: type_name(other),
        }),
    }
}

/// Extracts a string for a typed rule: null passes through as `None`, any
/// other non-string type is a schema mismatch.
pub(crate) fn as_str<'v>(rule: &'static str, value: &'v Value) -> Result<Option<&'v str>, RuleError> {
    match value {
        Value::Null => Ok(None),
        Value::String(string) => Ok(Some(string)),
        other => Err(RuleError::TypeMismatch {
            rule: rule.into(),
            expected: "string",
            actual: type_name(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_passes_through_typed_extractors() {
        assert_eq!(as_number("r", &json!(null)).unwrap(), None);
        assert_eq!(as_str("r", &json!(null)).unwrap(), None);
    }

    #[test]
    fn wrong_types_are_schema_mismatches() {
        let error = as_number("min_number", &json!("ten")).unwrap_err();
        assert_eq!(
            error,
            RuleError::TypeMismatch {
                rule: "min_number".into(),
                expected: "number",
                actual: "string",
            }
        );
        assert!(as_str("pattern", &json!(5)).is_err());
    }
}
