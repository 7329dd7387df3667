//! The synchronous engine: fully synchronous, non-suspending, safe to call
//! without an async runtime.

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

/// Validates `value` against `rules`, threading `root` into every rule
/// invocation for cross-field checks.
///
/// Returns `Ok(None)` when every field passes and `Ok(Some(tree))` carrying
/// only the failing fields otherwise. `Err` is reserved for caller misuse
/// (see [`RuleError`]); rule-raised contract errors propagate unwrapped and
/// abort the whole call.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veritree::rules::required;
/// use veritree::{rules, validate, RuleTree};
///
/// let tree = RuleTree::new().field("name", rules![required()]);
///
/// let value = json!({"name": ""});
/// let errors = validate(&value, &value, &tree).unwrap().unwrap();
/// assert_eq!(errors.flatten()[0].path, "name");
///
/// let value = json!({"name": "ok"});
/// assert!(validate(&value, &value, &tree).unwrap().is_none());
/// ```
pub fn validate(
    value: &Value,
    root: &Value,
    rules: &RuleTree,
) -> Result<Option<ErrorTree>, RuleError> {
    let mut failed = ErrorTree::new();

    for (name, node) in rules.iter() {
        let current = field_value(value, name);
        let resolved = node.resolve(current, root)?;
        match &*resolved {
            RuleNode::Rules(list) => {
                let violations = apply_rules(list, current, root)?;
                if !violations.is_empty() {
                    failed.insert(name, FieldErrors::Violations(violations));
                }
            }
            RuleNode::Nested(subtree) => {
                if let Some(sub_errors) = validate(current, root, subtree)? {
                    failed.insert(name, FieldErrors::Nested(sub_errors));
                }
            }
            RuleNode::Array(array_rules) => {
                let errors = validate_array(current, root, array_rules)?;
                if !errors.is_empty() {
                    failed.insert(name, FieldErrors::Array(errors));
                }
            }
            RuleNode::Dynamic(_) => unreachable!("resolve() never yields a dynamic node"),
        }
    }

    Ok((!failed.is_empty()).then_some(failed))
}

// ============================================================================
// PRIMITIVE FIELD VALIDATION
// ============================================================================

/// Runs an ordered rule list against one value, collecting every violation.
///
/// No short-circuit: every rule runs even after an earlier one fails, so the
/// caller sees every broken constraint. Violation order equals rule order —
/// a contract consumers may rely on for deterministic display.
pub(crate) fn apply_rules(
    rules: &[FieldRule],
    value: &Value,
    root: &Value,
) -> Result<ViolationList, RuleError> {
    let mut violations = ViolationList::new();
    for entry in rules {
        match entry {
            FieldRule::Sync(rule) => {
                if let Some(violation) = rule.apply(value, root)? {
                    violations.push(violation);
                }
            }
            FieldRule::Async(rule) => {
                return Err(RuleError::AsyncRuleInSyncPass {
                    rule: rule.name().to_string(),
                });
            }
        }
    }
    Ok(violations)
}

// ============================================================================
// ARRAY FIELD VALIDATION
// ============================================================================

/// Applies collection rules to the whole value and the element rule to every
/// array entry.
///
/// Collection rules see the value as-is — rejecting null or non-array values
/// is their responsibility. Element validation is silently skipped when the
/// value is not an array; only collection rules can flag a wrong-type array
/// field.
pub(crate) fn validate_array(
    value: &Value,
    root: &Value,
    rules: &ArrayRules,
) -> Result<ArrayErrors, RuleError> {
    let mut errors = ArrayErrors::new();
    errors.collection = apply_rules(&rules.collection, value, root)?;

    if let (Some(element_node), Some(items)) = (rules.element.as_deref(), value.as_array()) {
        for (index, element) in items.iter().enumerate() {
            if let Some(failure) = validate_element(element_node, element, root)? {
                errors.elements.push(ElementErrors {
                    index,
                    errors: failure,
                    validated_value: element.clone(),
                });
            }
        }
    }

    Ok(errors)
}

/// Validates one array element against its resolved rule node.
fn validate_element(
    node: &RuleNode,
    element: &Value,
    root: &Value,
) -> Result<Option<ElementFailure>, RuleError> {
    let resolved = node.resolve(element, root)?;
    match &*resolved {
        RuleNode::Rules(list) => {
            let violations = apply_rules(list, element, root)?;
            Ok((!violations.is_empty()).then_some(ElementFailure::Violations(violations)))
        }
        RuleNode::Nested(subtree) => {
            Ok(validate(element, root, subtree)?.map(ElementFailure::Nested))
        }
        RuleNode::Array(_) => Err(RuleError::ArrayElementRule),
        RuleNode::Dynamic(_) => unreachable!("resolve() never yields a dynamic node"),
    }
}

// ============================================================================
// TESTS
// ============================================================================
