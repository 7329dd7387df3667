//! The rule contract: the single interface between the engine and leaf rules.
//!
//! A rule receives the current field value and the root value (for
//! cross-field checks) and reports one of three outcomes:
//!
//! * `Ok(None)` — the value is valid;
//! * `Ok(Some(violation))` — an expected, data-driven failure, recorded in
//!   the error tree;
//! * `Err(rule_error)` — caller misuse (e.g. a numeric rule on a string
//!   field), which aborts the whole validation call.
//!
//! Rules must be pure with respect to their inputs; they may emit `tracing`
//! diagnostics but must not fail for expected bad data.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::RuleError;
use crate::violation::Violation;

// ============================================================================
// RULE TRAITS
// ============================================================================

/// A synchronous field-level rule.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use veritree::{Rule, RuleError, Violation};
///
/// struct NonZero;
///
/// impl Rule for NonZero {
///     fn name(&self) -> &str {
///         "non_zero"
///     }
///
///     fn apply(&self, value: &Value, _root: &Value) -> Result<Option<Violation>, RuleError> {
///         if value.as_f64() == Some(0.0) {
///             Ok(Some(Violation::new("non_zero", value, "This field must not be zero.")))
///         } else {
///             Ok(None)
///         }
///     }
/// }
///
/// let rule = NonZero;
/// assert!(rule.apply(&json!(1), &json!({})).unwrap().is_none());
/// assert!(rule.apply(&json!(0), &json!({})).unwrap().is_some());
/// ```
pub trait Rule: Send + Sync {
    /// Unique rule identifier, used as the violation's rule name.
    fn name(&self) -> &str;

    /// Checks `value`. `root` is the top-level value of the current
    /// validation pass, so rules can inspect sibling and ancestor fields.
    fn apply(&self, value: &Value, root: &Value) -> Result<Option<Violation>, RuleError>;
}

/// An asynchronous field-level rule, for checks that need I/O — database
/// uniqueness lookups, remote policy calls, and the like.
///
/// The contract is identical to [`Rule`]; only the invocation suspends.
#[async_trait]
pub trait AsyncRule: Send + Sync {
    /// Unique rule identifier, used as the violation's rule name.
    fn name(&self) -> &str;

    /// Checks `value`, possibly suspending. `root` is the top-level value of
    /// the current validation pass.
    async fn apply(&self, value: &Value, root: &Value) -> Result<Option<Violation>, RuleError>;
}

// ============================================================================
// FIELD RULE
// ============================================================================

/// One entry of a field's rule list.
///
/// A list may mix sync and async entries. The async engine awaits both kinds
/// uniformly — a sync entry is treated as already resolved — while the
/// synchronous engine refuses `Async` entries with
/// [`RuleError::AsyncRuleInSyncPass`].
#[derive(Clone)]
pub enum FieldRule {
    /// A synchronous rule.
    Sync(Arc<dyn Rule>),
    /// An asynchronous rule.
    Async(Arc<dyn AsyncRule>),
}

impl FieldRule {
    /// The wrapped rule's identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Sync(rule) => rule.name(),
            Self::Async(rule) => rule.name(),
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(rule) => f.debug_tuple("Sync").field(&rule.name()).finish(),
            Self::Async(rule) => f.debug_tuple("Async").field(&rule.name()).finish(),
        }
    }
}

impl<R: Rule + 'static> From<R> for FieldRule {
    fn from(rule: R) -> Self {
        Self::Sync(Arc::new(rule))
    }
}

/// Wraps an async rule as a rule-list entry.
///
/// Sync rules convert into [`FieldRule`] implicitly; async rules are wrapped
/// explicitly so a reader can tell at the call site which entries suspend.
pub fn async_rule<R: AsyncRule + 'static>(rule: R) -> FieldRule {
    FieldRule::Async(Arc::new(rule))
}

// ============================================================================
// CLOSURE ADAPTERS
// ============================================================================

/// A rule built from a plain function, for one-off checks that don't warrant
/// a named rule type.
pub struct FnRule<F> {
    name: Cow<'static, str>,
    check: F,
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&Value, &Value) -> Result<Option<Violation>, RuleError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, value: &Value, root: &Value) -> Result<Option<Violation>, RuleError> {
        (self.check)(value, root)
    }
}

/// Lifts a plain function into the [`Rule`] contract.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veritree::rule::{Rule, rule_fn};
/// use veritree::Violation;
///
/// let even = rule_fn("even", |value, _root| {
///     Ok(match value.as_i64() {
///         Some(n) if n % 2 != 0 => {
///             Some(Violation::new("even", value, "This field must be even."))
///         }
///         _ => None,
///     })
/// });
///
/// assert!(even.apply(&json!(2), &json!({})).unwrap().is_none());
/// assert!(even.apply(&json!(3), &json!({})).unwrap().is_some());
/// ```
pub fn rule_fn<F>(name: impl Into<Cow<'static, str>>, check: F) -> FnRule<F>
where
    F: Fn(&Value, &Value) -> Result<Option<Violation>, RuleError> + Send + Sync,
{
    FnRule {
        name: name.into(),
        check,
    }
}

/// An async rule built from a future-returning function.
pub struct AsyncFnRule<F> {
    name: Cow<'static, str>,
    check: F,
}

impl<F> fmt::Debug for AsyncFnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFnRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> AsyncRule for AsyncFnRule<F>
where
    F: for<'a> Fn(&'a Value, &'a Value) -> BoxFuture<'a, Result<Option<Violation>, RuleError>>
        + Send
        + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn apply(&self, value: &Value, root: &Value) -> Result<Option<Violation>, RuleError> {
        (self.check)(value, root).await
    }
}

/// Lifts a boxed-future function into the [`AsyncRule`] contract.
///
/// A `fn` item returning [`BoxFuture`] satisfies the bound directly:
///
/// ```
/// use futures::future::BoxFuture;
/// use serde_json::Value;
/// use veritree::rule::async_rule_fn;
/// use veritree::{RuleError, Violation};
///
/// fn taken<'a>(
///     value: &'a Value,
///     _root: &'a Value,
/// ) -> BoxFuture<'a, Result<Option<Violation>, RuleError>> {
///     Box::pin(async move {
///         Ok(match value.as_str() {
///             Some("admin") => Some(Violation::new(
///                 "username_free",
///                 value,
///                 "This username is already taken.",
///             )),
///             _ => None,
///         })
///     })
/// }
///
/// let rule = async_rule_fn("username_free", taken);
/// assert_eq!(veritree::AsyncRule::name(&rule), "username_free");
/// ```
pub fn async_rule_fn<F>(name: impl Into<Cow<'static, str>>, check: F) -> AsyncFnRule<F>
where
    F: for<'a> Fn(&'a Value, &'a Value) -> BoxFuture<'a, Result<Option<Violation>, RuleError>>
        + Send
        + Sync,
{
    AsyncFnRule {
        name: name.into(),
        check,
    }
}

// ============================================================================
// TESTS
// ============================================================================
