//! Integration tests for the asynchronous engine and its equivalence with
//! the synchronous one.

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::sync::Barrier;
use veritree::prelude::*;

// ============================================================================
// TEST RULES
// ============================================================================

/// Async stand-in for a remote uniqueness check.
struct UsernameFree {
    taken: Vec<&'static str>,
}

#[async_trait]
impl AsyncRule for UsernameFree {
    fn name(&self) -> &str {
        "username_free"
    }

    async fn apply(&self, value: &Value, _root: &Value) -> Result<Option<Violation>, RuleError> {
        tokio::task::yield_now().await;
        Ok(value
            .as_str()
            .is_some_and(|name| self.taken.iter().any(|taken| *taken == name))
            .then(|| Violation::new("username_free", value, "This username is already taken.")))
    }
}

/// Deadlocks unless all participants run concurrently.
struct Rendezvous {
    barrier: Arc<Barrier>,
}

#[async_trait]
impl AsyncRule for Rendezvous {
    fn name(&self) -> &str {
        "rendezvous"
    }

    async fn apply(&self, _value: &Value, _root: &Value) -> Result<Option<Violation>, RuleError> {
        self.barrier.wait().await;
        Ok(None)
    }
}

// ============================================================================
// SYNC/ASYNC EQUIVALENCE
// ============================================================================

fn sync_only_rules() -> RuleTree {
    RuleTree::new()
        .field("name", rules![required(), min_length(3)])
        .field("age", rules![min_number(18.0)])
        .field(
            "address",
            RuleTree::new()
                .field("city", rules![required()])
                .field("zip", rules![length_range(4, 10)]),
        )
        .field(
            "items",
            ArrayRules::new()
                .collection(rules![array_min_len(1)])
                .element(RuleTree::new().field("qty", rules![min_number(1.0)])),
        )
        .field(
            "code",
            RuleNode::dynamic(|value, _root| {
                if value.is_string() {
                    RuleNode::Rules(rules![min_length(4)])
                } else {
                    RuleNode::Rules(Vec::new())
                }
            }),
        )
}

#[tokio::test]
async fn sync_and_async_engines_produce_identical_trees() {
    let rules = sync_only_rules();
    let values = [
        json!({}),
        json!(null),
        json!({"name": "ok", "age": 30, "address": {"city": "Berlin", "zip": "10115"},
               "items": [{"qty": 1}], "code": "ABCD"}),
        json!({"name": "", "age": 10, "address": {"city": ""},
               "items": [{"qty": 0}, {"qty": 2}, {"qty": -1}], "code": "x"}),
        json!({"name": "x", "items": "not an array"}),
    ];

    for value in values {
        let sync_result = validate(&value, &value, &rules).unwrap();
        let async_result = validate_async(&value, &value, &rules).await.unwrap();
        assert_eq!(sync_result, async_result, "diverged on {value}");
    }
}

// ============================================================================
// ASYNC-SPECIFIC BEHAVIOR
// ============================================================================

#[tokio::test]
async fn mixed_sync_and_async_rule_lists_report_in_rule_order() {
    let rules = RuleTree::new().field(
        "username",
        rules![
            required(),
            async_rule(UsernameFree { taken: vec!["admin"] }),
            min_length(8),
        ],
    );
    let value = json!({"username": "admin"});

    let errors = validate_async(&value, &value, &rules).await.unwrap().unwrap();
    let Some(FieldErrors::Violations(violations)) = errors.get("username") else {
        panic!("expected violations for `username`");
    };
    let names: Vec<_> = violations.iter().map(|v| v.rule.as_ref()).collect();
    assert_eq!(names, ["username_free", "min_length"]);
}

#[tokio::test]
async fn async_nested_fields_descend_into_the_child_value() {
    // The parent's own `name` is valid; only the child's is blank. A walk
    // that checked the nested rules against the parent object would report
    // nothing here.
    let rules = RuleTree::new()
        .field("name", rules![required()])
        .field("child", RuleTree::new().field("name", rules![required()]));
    let value = json!({"name": "parent", "child": {"name": ""}});

    let errors = validate_async(&value, &value, &rules).await.unwrap().unwrap();
    let paths: Vec<_> = errors.flatten().into_iter().map(|flat| flat.path).collect();
    assert_eq!(paths, ["child.name"]);
}

#[tokio::test]
async fn async_rules_run_against_array_elements() {
    let rules = RuleTree::new().field(
        "usernames",
        ArrayRules::new().element(rules![async_rule(UsernameFree {
            taken: vec!["admin", "root"]
        })]),
    );
    let value = json!({"usernames": ["alice", "admin", "bob", "root"]});

    let errors = validate_async(&value, &value, &rules).await.unwrap().unwrap();
    let Some(FieldErrors::Array(array)) = errors.get("usernames") else {
        panic!("expected array errors for `usernames`");
    };
    let indices: Vec<_> = array.elements.iter().map(|e| e.index).collect();
    assert_eq!(indices, [1, 3]);
    assert_eq!(array.elements[0].validated_value, json!("admin"));
}

#[tokio::test]
async fn independent_fields_validate_concurrently() {
    let barrier = Arc::new(Barrier::new(3));
    let rendezvous = |barrier: &Arc<Barrier>| {
        rules![async_rule(Rendezvous {
            barrier: Arc::clone(barrier)
        })]
    };
    let rules = RuleTree::new()
        .field("a", rendezvous(&barrier))
        .field("b", rendezvous(&barrier))
        .field("c", rendezvous(&barrier));
    let value = json!({"a": 1, "b": 2, "c": 3});

    // Sequential field validation would park on the barrier forever.
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        validate_async(&value, &value, &rules),
    )
    .await
    .expect("fields did not run concurrently");
    assert_eq!(result.unwrap(), None);
}

#[tokio::test]
async fn async_contract_errors_surface_as_err() {
    let rules = RuleTree::new().field("age", rules![min_number(18.0)]);
    let value = json!({"age": "twenty"});

    let error = validate_async(&value, &value, &rules).await.unwrap_err();
    assert!(matches!(error, RuleError::TypeMismatch { .. }));
}

#[tokio::test]
async fn sync_engine_rejects_async_rules() {
    let rules = RuleTree::new().field(
        "username",
        rules![async_rule(UsernameFree { taken: vec![] })],
    );
    let value = json!({"username": "x"});

    let error = validate(&value, &value, &rules).unwrap_err();
    assert_eq!(
        error,
        RuleError::AsyncRuleInSyncPass {
            rule: "username_free".to_string()
        }
    );
}
