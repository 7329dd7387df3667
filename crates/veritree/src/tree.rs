//! Rule trees: the caller-authored description of what to validate.
//!
//! A [`RuleTree`] maps field names to [`RuleNode`]s and mirrors the shape of
//! the values it validates. Trees are static, cheap to traverse (leaf rules
//! sit behind [`Arc`]s, so cloning is shallow), and reusable across any
//! number of validation calls — the engine keeps no state between calls.
//!
//! Fields absent from the tree are not validated. An empty nested tree or an
//! empty array node means "no validation for this field" and never produces
//! errors.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::RuleError;
use crate::rule::FieldRule;

/// Upper bound on dynamic-node expansion. A dynamic node may legally return
/// another dynamic node; a chain longer than this is a misbehaving producer
/// and resolves to [`RuleError::DynamicDepthExceeded`] instead of hanging.
pub(crate) const MAX_DYNAMIC_DEPTH: usize = 32;

/// A function computing a rule node from the current field value and root,
/// resolved lazily at validation time.
pub type DynamicFn = dyn Fn(&Value, &Value) -> RuleNode + Send + Sync;

// ============================================================================
// RULE NODE
// ============================================================================

/// How a single field is validated — one of the four node kinds.
#[derive(Clone)]
pub enum RuleNode {
    /// An ordered list of field-level rules, applied to the field's value.
    Rules(Vec<FieldRule>),

    /// A rule tree for a nested object field; the engine recurses into the
    /// field's value with this subtree.
    Nested(RuleTree),

    /// Collection-level and per-element rules for an array field.
    Array(ArrayRules),

    /// A node computed at validation time from `(field_value, root)`. The
    /// produced node is resolved with the same classification as a static
    /// node, so a dynamic node may itself produce a dynamic node.
    Dynamic(Arc<DynamicFn>),
}

impl RuleNode {
    /// Wraps a function as a dynamic node.
    pub fn dynamic<F>(produce: F) -> Self
    where
        F: Fn(&Value, &Value) -> RuleNode + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(produce))
    }

    /// Resolves this node for one field value, expanding dynamic nodes.
    ///
    /// This is the single classification point: the top-level field walk,
    /// nested recursion, and array element dispatch all go through it, so a
    /// dynamic node is valid anywhere a static node is. Static nodes resolve
    /// to themselves without allocation.
    pub fn resolve(&self, value: &Value, root: &Value) -> Result<Cow<'_, RuleNode>, RuleError> {
        let RuleNode::Dynamic(produce) = self else {
            return Ok(Cow::Borrowed(self));
        };

        let mut node = produce(value, root);
        for _ in 1..MAX_DYNAMIC_DEPTH {
            match node {
                RuleNode::Dynamic(produce) => node = produce(value, root),
                resolved => return Ok(Cow::Owned(resolved)),
            }
        }
        Err(RuleError::DynamicDepthExceeded {
            depth: MAX_DYNAMIC_DEPTH,
        })
    }
}

impl fmt::Debug for RuleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rules(rules) => f.debug_tuple("Rules").field(rules).finish(),
            Self::Nested(tree) => f.debug_tuple("Nested").field(tree).finish(),
            Self::Array(rules) => f.debug_tuple("Array").field(rules).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<Vec<FieldRule>> for RuleNode {
    fn from(rules: Vec<FieldRule>) -> Self {
        Self::Rules(rules)
    }
}

impl From<RuleTree> for RuleNode {
    fn from(tree: RuleTree) -> Self {
        Self::Nested(tree)
    }
}

impl From<ArrayRules> for RuleNode {
    fn from(rules: ArrayRules) -> Self {
        Self::Array(rules)
    }
}

// ============================================================================
// ARRAY RULES
// ============================================================================

/// Rules for an array field.
///
/// Collection rules run against the field's value as a whole — including
/// null or non-array values, which collection rules are responsible for
/// rejecting themselves. The element rule, if present, is applied to every
/// array entry independently and may be a rule list, a nested tree, or a
/// dynamic node computed per element.
///
/// # Examples
///
/// ```
/// use veritree::rules::{array_min_len, required};
/// use veritree::{ArrayRules, rules};
///
/// let order_items = ArrayRules::new()
///     .collection(rules![array_min_len(1)])
///     .element(rules![required()]);
/// assert!(!order_items.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArrayRules {
    /// Rules applied to the array value as a whole, e.g. minimum length.
    pub collection: Vec<FieldRule>,
    /// Rule applied to every element; `None` skips element validation.
    pub element: Option<Box<RuleNode>>,
}

impl ArrayRules {
    /// Creates an empty array node (no validation).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collection-level rules.
    #[must_use]
    pub fn collection(mut self, rules: Vec<FieldRule>) -> Self {
        self.collection = rules;
        self
    }

    /// Sets the per-element rule.
    #[must_use]
    pub fn element(mut self, node: impl Into<RuleNode>) -> Self {
        self.element = Some(Box::new(node.into()));
        self
    }

    /// True when the node carries no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty() && self.element.is_none()
    }
}

// ============================================================================
// RULE TREE
// ============================================================================

/// Ordered mapping from field names to rule nodes.
///
/// Iteration order is insertion order, which also fixes the field order of
/// the resulting error tree.
///
/// # Examples
///
/// ```
/// use veritree::rules::{min_length, required};
/// use veritree::{RuleTree, rules};
///
/// let rules = RuleTree::new()
///     .field("name", rules![required(), min_length(2)])
///     .field("address", RuleTree::new().field("city", rules![required()]));
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleTree {
    fields: IndexMap<String, RuleNode>,
}

impl RuleTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, node: impl Into<RuleNode>) -> Self {
        self.insert(name, node);
        self
    }

    /// Adds a field, replacing any existing node under the same name.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<RuleNode>) {
        self.fields.insert(name.into(), node.into());
    }

    /// The node for `name`, if the field is validated.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleNode> {
        self.fields.get(name)
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleNode)> {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Number of validated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are validated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
