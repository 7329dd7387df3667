//! Presence rules.

use serde_json::Value;

// ============================================================================
// REQUIRED
// ============================================================================

crate::rule! {
    /// Requires a present, non-empty value.
    ///
    /// Rejects null (which is also what a missing field reads as), empty and
    /// whitespace-only strings, and empty arrays and objects. `0` and
    /// `false` are present values and pass.
    pub Required;
    name: "required";
    check(value, _root) {
        Ok(match value {
            Value::Null => false,
            Value::String(text) => !text.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(fields) => !fields.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
        })
    }
    message(_value) { "This field is required.".into() }
    fn required();
}

// ============================================================================
// IS TRUE
// ============================================================================

crate::rule! {
    /// Requires a boolean `true`, e.g. an accepted-terms checkbox.
    pub IsTrue;
    name: "is_true";
    check(value, _root) { Ok(matches!(value, Value::Bool(true))) }
    message(_value) { "This field must be checked.".into() }
    fn is_true();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null))]
    #[case(json!(""))]
    #[case(json!("   "))]
    #[case(json!([]))]
    #[case(json!({}))]
    fn required_rejects_absent_values(#[case] value: Value) {
        let violation = required().apply(&value, &json!({})).unwrap().unwrap();
        assert_eq!(violation.rule, "required");
        assert_eq!(violation.message, "This field is required.");
        assert_eq!(violation.attempted, value);
    }

    #[rstest]
    #[case(json!(0))]
    #[case(json!(false))]
    #[case(json!("x"))]
    #[case(json!([0]))]
    #[case(json!({"a": null}))]
    fn required_accepts_present_values(#[case] value: Value) {
        assert!(required().apply(&value, &json!({})).unwrap().is_none());
    }

    #[test]
    fn is_true_accepts_only_true() {
        assert!(is_true().apply(&json!(true), &json!({})).unwrap().is_none());
        assert!(is_true().apply(&json!(false), &json!({})).unwrap().is_some());
        assert!(is_true().apply(&json!(null), &json!({})).unwrap().is_some());
        assert!(is_true().apply(&json!(1), &json!({})).unwrap().is_some());
    }

    #[test]
    fn required_message_can_be_overridden() {
        let rule = required().with_message("Please fill this in.");
        let violation = rule.apply(&json!(null), &json!({})).unwrap().unwrap();
        assert_eq!(violation.message, "Please fill this in.");
    }
}
