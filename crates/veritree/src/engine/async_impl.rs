//! The asynchronous engine: a structural mirror of the synchronous walk
//! whose independent steps run concurrently.
//!
//! Concurrency never changes the resulting tree's content, only its
//! wall-clock latency: results are merged in rule-tree field order and
//! ascending element index order, so the output is identical to the
//! synchronous engine's for the same inputs.

use futures::future::{BoxFuture, join_all};
use serde_json::Value;

use crate::engine::field_value;
use crate::error::RuleError;
use crate::error_tree::{ArrayErrors, ElementErrors, ElementFailure, ErrorTree, FieldErrors};
use crate::rule::{AsyncRule, FieldRule, Rule};
use crate::tree::{ArrayRules, RuleNode, RuleTree};
use crate::violation::ViolationList;

// ============================================================================
// OBJECT RECURSION
// ============================================================================

/// Asynchronous counterpart of [`validate`](crate::validate).
///
/// Accepts the same inputs and produces the same error tree; rule lists may
/// additionally contain [`AsyncRule`](crate::AsyncRule) entries, and every
/// rule result is awaited uniformly — a sync rule is treated as already
/// resolved. Contract errors surface as an `Err` from the returned future;
/// the first one aborts the call with no partial tree delivered.
///
/// Independent fields, rules, and array elements are started concurrently
/// and joined, so one call's latency is bounded by its slowest rule.
pub async fn validate_async(
    value: &Value,
    root: &Value,
    rules: &RuleTree,
) -> Result<Option<ErrorTree>, RuleError> {
    validate_boxed(value, root, rules).await
}

/// Boxed recursion point: async recursion needs an explicitly boxed future.
fn validate_boxed<'a>(
    value: &'a Value,
    root: &'a Value,
    rules: &'a RuleTree,
) -> BoxFuture<'a, Result<Option<ErrorTree>, RuleError>> {
    Box::pin(async move {
        // Fields are independent by contract: start them all, then merge in
        // rule-tree order so the output is deterministic.
        let field_results = join_all(rules.iter().map(|(name, node)| async move {
            let current = field_value(value, name);
            let failure = validate_field(node, current, root).await?;
            Ok::<_, RuleError>((name, failure))
        }))
        .await;

        let mut failed = ErrorTree::new();
        for result in field_results {
            let (name, failure) = result?;
            if let Some(failure) = failure {
                failed.insert(name, failure);
            }
        }
        Ok((!failed.is_empty()).then_some(failed))
    })
}

/// Validates one field's value against its resolved rule node.
///
/// Nested object fields recurse into the field's own value with the nested
/// subtree — never into the parent object.
async fn validate_field(
    node: &RuleNode,
    current: &Value,
    root: &Value,
) -> Result<Option<FieldErrors>, RuleError> {
    let resolved = node.resolve(current, root)?;
    match &*resolved {
        RuleNode::Rules(list) => {
            let violations = apply_rules_async(list, current, root).await?;
            Ok((!violations.is_empty()).then_some(FieldErrors::Violations(violations)))
        }
        RuleNode::Nested(subtree) => Ok(validate_boxed(current, root, subtree)
            .await?
            .map(FieldErrors::Nested)),
        RuleNode::Array(array_rules) => {
            let errors = validate_array_async(current, root, array_rules).await?;
            Ok((!errors.is_empty()).then_some(FieldErrors::Array(errors)))
        }
        RuleNode::Dynamic(_) => unreachable!("resolve() never yields a dynamic node"),
    }
}

// ============================================================================
// PRIMITIVE FIELD VALIDATION
// ============================================================================

/// Async counterpart of the ordered rule-list walk.
///
/// All rule invocations are kicked off before any is awaited — rules are
/// side-effect-free with respect to each other by contract — and the joined
/// results keep rule order, preserving the violation-order guarantee of the
/// synchronous engine.
pub(crate) async fn apply_rules_async(
    rules: &[FieldRule],
    value: &Value,
    root: &Value,
) -> Result<ViolationList, RuleError> {
    let results = join_all(rules.iter().map(|entry| async move {
        match entry {
            FieldRule::Sync(rule) => rule.apply(value, root),
            FieldRule::Async(rule) => rule.apply(value, root).await,
        }
    }))
    .await;

    let mut violations = ViolationList::new();
    for result in results {
        if let Some(violation) = result? {
            violations.push(violation);
        }
    }
    Ok(violations)
}

// ============================================================================
// ARRAY FIELD VALIDATION
// ============================================================================

/// Async counterpart of the array field walk; elements validate
/// concurrently and merge in ascending index order.
pub(crate) async fn validate_array_async(
    value: &Value,
    root: &Value,
    rules: &ArrayRules,
) -> Result<ArrayErrors, RuleError> {
    let mut errors = ArrayErrors::new();
    errors.collection = apply_rules_async(&rules.collection, value, root).await?;

    if let (Some(element_node), Some(items)) = (rules.element.as_deref(), value.as_array()) {
        let element_results = join_all(items.iter().enumerate().map(|(index, element)| {
            async move {
                let failure = validate_element(element_node, element, root).await?;
                Ok::<_, RuleError>(failure.map(|errors| ElementErrors {
                    index,
                    errors,
                    validated_value: element.clone(),
                }))
            }
        }))
        .await;

        for result in element_results {
            if let Some(element_errors) = result? {
                errors.elements.push(element_errors);
            }
        }
    }

    Ok(errors)
}

/// Validates one array element against its resolved rule node.
async fn validate_element(
    node: &RuleNode,
    element: &Value,
    root: &Value,
) -> Result<Option<ElementFailure>, RuleError> {
    let resolved = node.resolve(element, root)?;
    match &*resolved {
        RuleNode::Rules(list) => {
            let violations = apply_rules_async(list, element, root).await?;
            Ok((!violations.is_empty()).then_some(ElementFailure::Violations(violations)))
        }
        RuleNode::Nested(subtree) => Ok(validate_boxed(element, root, subtree)
            .await?
            .map(ElementFailure::Nested)),
        RuleNode::Array(_) => Err(RuleError::ArrayElementRule),
        RuleNode::Dynamic(_) => unreachable!("resolve() never yields a dynamic node"),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{AsyncRule, async_rule};
    use crate::rules::required;
    use crate::violation::Violation;
    use async_trait::async_trait;
    use serde_json::json;

    struct RejectNull;

    #[async_trait]
    impl AsyncRule for RejectNull {
        fn name(&self) -> &str {
            "reject_null"
        }

        async fn apply(
            &self,
            value: &Value,
            _root: &Value,
        ) -> Result<Option<Violation>, RuleError> {
            tokio::task::yield_now().await;
            Ok(value
                .is_null()
                .then(|| Violation::new("reject_null", value, "null rejected")))
        }
    }

    #[tokio::test]
    async fn mixed_rule_lists_keep_rule_order() {
        let rules = vec![required().into(), async_rule(RejectNull)];
        let violations = apply_rules_async(&rules, &json!(null), &json!({})).await.unwrap();
        let names: Vec<_> = violations.iter().map(|v| v.rule.as_ref()).collect();
        assert_eq!(names, ["required", "reject_null"]);
    }

    #[tokio::test]
    async fn elements_merge_in_ascending_index_order() {
        let rules = ArrayRules::new().element(vec![async_rule(RejectNull)]);
        let value = json!([null, "ok", null]);
        let errors = validate_array_async(&value, &json!({}), &rules).await.unwrap();
        let indices: Vec<_> = errors.elements.iter().map(|e| e.index).collect();
        assert_eq!(indices, [0, 2]);
    }

    #[tokio::test]
    async fn contract_errors_surface_as_rejections() {
        let rules = ArrayRules::new().element(ArrayRules::new());
        let error = validate_array_async(&json!([1]), &json!({}), &rules)
            .await
            .unwrap_err();
        assert_eq!(error, RuleError::ArrayElementRule);
    }
}
