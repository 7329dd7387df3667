//! Property-based tests: idempotence, absence-on-success, and sync/async
//! equivalence over generated values.

use proptest::prelude::*;
use serde_json::{Value, json};
use veritree::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// A string-ish field: null, or a short lowercase string (possibly empty).
fn string_field() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

/// A number-ish field: null, or a small integer.
fn number_field() -> impl Strategy<Value = Value> {
    prop_oneof![Just(Value::Null), (0i64..40).prop_map(|n| json!(n))]
}

/// Values shaped like the fixed rule tree below, with both valid and
/// invalid field states reachable.
fn shaped_value() -> impl Strategy<Value = Value> {
    (
        string_field(),
        number_field(),
        string_field(),
        proptest::collection::vec(string_field(), 0..5),
    )
        .prop_map(|(name, age, city, tags)| {
            json!({
                "name": name,
                "age": age,
                "address": {"city": city},
                "tags": tags,
            })
        })
}

fn fixed_rules() -> RuleTree {
    RuleTree::new()
        .field("name", rules![required(), min_length(3)])
        .field("age", rules![min_number(18.0)])
        .field("address", RuleTree::new().field("city", rules![required()]))
        .field(
            "tags",
            ArrayRules::new()
                .collection(rules![array_min_len(1)])
                .element(rules![min_length(2)]),
        )
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn validation_is_idempotent(value in shaped_value()) {
        let rules = fixed_rules();
        let first = validate(&value, &value, &rules).unwrap();
        let second = validate(&value, &value, &rules).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn success_is_absence_never_an_empty_tree(value in shaped_value()) {
        let rules = fixed_rules();
        if let Some(tree) = validate(&value, &value, &rules).unwrap() {
            prop_assert!(!tree.is_empty());
            prop_assert!(tree.total_violations() > 0);
        }
    }

    #[test]
    fn sync_and_async_engines_agree(value in shaped_value()) {
        let rules = fixed_rules();
        let sync_result = validate(&value, &value, &rules).unwrap();
        let async_result = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(validate_async(&value, &value, &rules))
            .unwrap();
        prop_assert_eq!(sync_result, async_result);
    }

    #[test]
    fn field_results_do_not_depend_on_siblings(
        name in string_field(),
        age in number_field(),
    ) {
        let rules = fixed_rules();

        let full = json!({
            "name": name, "age": age,
            "address": {"city": "x"}, "tags": ["ok"],
        });
        let errors_full = validate(&full, &full, &rules).unwrap();

        let name_errors_full = errors_full.as_ref().and_then(|tree| tree.get("name").cloned());

        // Same name, sibling fields forced invalid.
        let siblings_invalid = json!({
            "name": full["name"], "age": json!(0),
            "address": {"city": ""}, "tags": [],
        });
        let errors_invalid = validate(&siblings_invalid, &siblings_invalid, &rules).unwrap();
        let name_errors_invalid = errors_invalid.as_ref().and_then(|tree| tree.get("name").cloned());

        prop_assert_eq!(name_errors_full, name_errors_invalid);
    }
}
