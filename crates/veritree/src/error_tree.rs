//! Error trees: the structurally mirrored output of a validation pass.
//!
//! An [`ErrorTree`] mirrors the rule tree's shape, restricted to the fields
//! that actually failed. Branches with no failures are omitted entirely, and
//! the engine returns `None` instead of an empty tree — `Some(tree)` always
//! carries at least one failing field.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::violation::{Violation, ViolationList};

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// Failures recorded for one field of an error tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldErrors {
    /// A primitive field's failed rules, in rule order.
    Violations(ViolationList),

    /// A nested object field's own error tree.
    Nested(ErrorTree),

    /// An array field's collection- and element-level failures.
    Array(ArrayErrors),
}

// ============================================================================
// ARRAY ERRORS
// ============================================================================

/// Collection- and element-level failures for one array field.
///
/// At least one of the two parts is non-empty whenever this appears in an
/// error tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ArrayErrors {
    /// Violations from rules applied to the array value as a whole.
    #[serde(skip_serializing_if = "ViolationList::is_empty")]
    pub collection: ViolationList,

    /// Per-element failures, in ascending original index order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ElementErrors>,
}

impl ArrayErrors {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither collection nor element failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty() && self.elements.is_empty()
    }
}

/// Failures for a single array element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementErrors {
    /// Index of the element in the original array. Indices of failing
    /// elements are not compacted: valid elements simply have no entry.
    pub index: usize,

    /// How the element failed.
    pub errors: ElementFailure,

    /// The element exactly as it was validated.
    pub validated_value: Value,
}

/// How a single array element failed: against a rule list or against a
/// nested rule tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementFailure {
    /// The element failed a rule list.
    Violations(ViolationList),
    /// The element failed a nested rule tree.
    Nested(ErrorTree),
}

// ============================================================================
// ERROR TREE
// ============================================================================

/// Mirror of the rule tree restricted to failing fields, in rule-tree field
/// order.
///
/// Error trees are freshly allocated per validation call and owned by the
/// caller; the engine retains nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ErrorTree {
    #[serde(flatten)]
    fields: IndexMap<String, FieldErrors>,
}

impl ErrorTree {
    /// Creates an empty tree. The engine never returns one — an all-valid
    /// value produces `None` — but an empty tree is a useful accumulator and
    /// test fixture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records failures for a field.
    pub fn insert(&mut self, name: impl Into<String>, errors: FieldErrors) {
        self.fields.insert(name.into(), errors);
    }

    /// The failures for `name`, if that field failed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldErrors> {
        self.fields.get(name)
    }

    /// Iterates failing fields in rule-tree order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldErrors)> {
        self.fields
            .iter()
            .map(|(name, errors)| (name.as_str(), errors))
    }

    /// Number of failing fields at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flattens the tree into `(path, violation)` pairs, depth-first in
    /// field order.
    ///
    /// Paths use dotted segments for nested fields and `[index]` segments
    /// for array elements: `address.city`, `items[0].name`. Collection-level
    /// violations carry the array field's own path.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatViolation<'_>> {
        let mut flat = Vec::new();
        self.collect_flat("", &mut flat);
        flat
    }

    /// Total number of violations in the tree, including nested and
    /// per-element ones.
    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.flatten().len()
    }

    fn collect_flat<'a>(&'a self, prefix: &str, flat: &mut Vec<FlatViolation<'a>>) {
        for (name, errors) in &self.fields {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match errors {
                FieldErrors::Violations(violations) => {
                    flat.extend(violations.iter().map(|violation| FlatViolation {
                        path: path.clone(),
                        violation,
                    }));
                }
                FieldErrors::Nested(tree) => tree.collect_flat(&path, flat),
                FieldErrors::Array(array) => {
                    flat.extend(array.collection.iter().map(|violation| FlatViolation {
                        path: path.clone(),
                        violation,
                    }));
                    for element in &array.elements {
                        let element_path = format!("{path}[{}]", element.index);
                        match &element.errors {
                            ElementFailure::Violations(violations) => {
                                flat.extend(violations.iter().map(|violation| FlatViolation {
                                    path: element_path.clone(),
                                    violation,
                                }));
                            }
                            ElementFailure::Nested(tree) => {
                                tree.collect_flat(&element_path, flat);
                            }
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flat) in self.flatten().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] {}", flat.path, flat.violation)?;
        }
        Ok(())
    }
}

// ============================================================================
// FLATTENED VIEW
// ============================================================================

/// One violation paired with the path of the field that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatViolation<'a> {
    /// Dotted path of the failing field, e.g. `items[0].name`.
    pub path: String,
    /// The recorded failure.
    pub violation: &'a Violation,
}

// ============================================================================
// TESTS
// ============================================================================
