//! The violation record produced by a failed rule check.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

// ============================================================================
// VIOLATION
// ============================================================================

/// Violations collected for one field, in rule order.
///
/// Most fields fail zero, one, or two rules, so up to two violations are
/// stored inline.
pub type ViolationList = SmallVec<[Violation; 2]>;

/// One recorded rule failure.
///
/// Violations are created fresh per failed check and never merged with other
/// violations except by list concatenation. They carry everything a consumer
/// needs to render the failure: the rule's identifier, the value the rule
/// saw, and a human-readable message.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veritree::Violation;
///
/// let violation = Violation::new("required", &json!(""), "This field is required.");
/// assert_eq!(violation.rule, "required");
/// assert_eq!(violation.attempted, json!(""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Identifier of the rule that failed, e.g. `"required"`.
    pub rule: Cow<'static, str>,

    /// The value the rule was applied to.
    pub attempted: Value,

    /// Human-readable message: the rule's default template or a caller
    /// override.
    pub message: Cow<'static, str>,
}

impl Violation {
    /// Creates a violation for `rule` against `attempted`.
    ///
    /// The attempted value is cloned so the violation owns its snapshot;
    /// the value under validation is never retained by reference.
    pub fn new(
        rule: impl Into<Cow<'static, str>>,
        attempted: &Value,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            rule: rule.into(),
            attempted: attempted.clone(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
