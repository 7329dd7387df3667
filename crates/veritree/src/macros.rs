//! Macros for declaring leaf rules and building rule lists.
//!
//! # Available Macros
//!
//! - [`rule!`](macro@crate::rule) — declare a complete leaf rule (struct +
//!   `Rule` impl + message override + factory fn)
//! - [`rules!`](macro@crate::rules) — build a field's rule list
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde_json::Value;
//!
//! // Unit rule (no configuration fields)
//! crate::rule! {
//!     pub NotBlank;
//!     name: "not_blank";
//!     check(value, _root) { Ok(value.as_str().is_none_or(|s| !s.trim().is_empty())) }
//!     message(_value) { "This field must not be blank.".into() }
//!     fn not_blank();
//! }
//!
//! // Rule with configuration fields
//! crate::rule! {
//!     pub MinWords { min: usize };
//!     name: "min_words";
//!     check(self, value, _root) {
//!         Ok(value.as_str().is_none_or(|s| s.split_whitespace().count() >= self.min))
//!     }
//!     message(self, _value) { format!("This field needs {} words.", self.min).into() }
//!     fn min_words(min: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a complete leaf rule: struct definition, [`Rule`](crate::Rule)
/// implementation, `with_message` override, constructor, and factory
/// function.
///
/// The `check` block returns `Result<bool, RuleError>` — `Ok(false)` records
/// a violation, `Err` aborts the pass (reserved for rule-tree/value schema
/// mismatches). The `message` block builds the rule's default message; a
/// caller override via `with_message` takes precedence and the block is not
/// evaluated.
#[macro_export]
macro_rules! rule {
    // ── Unit rule (no configuration fields) ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        name: $rule_name:literal;
        check($value:ident, $root:ident) $check:block
        message($msg_value:ident) $message:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            message: ::core::option::Option<::std::borrow::Cow<'static, str>>,
        }

        impl $name {
            #[must_use]
            $vis fn new() -> Self {
                Self { message: ::core::option::Option::None }
            }

            /// Replaces the rule's default message.
            #[must_use]
            $vis fn with_message(
                mut self,
                message: impl ::core::convert::Into<::std::borrow::Cow<'static, str>>,
            ) -> Self {
                self.message = ::core::option::Option::Some(message.into());
                self
            }
        }

        impl $crate::rule::Rule for $name {
            fn name(&self) -> &str {
                $rule_name
            }

            #[allow(unused_variables)]
            fn apply(
                &self,
                $value: &::serde_json::Value,
                $root: &::serde_json::Value,
            ) -> ::core::result::Result<
                ::core::option::Option<$crate::violation::Violation>,
                $crate::error::RuleError,
            > {
                let passed: bool = ($check)?;
                if passed {
                    ::core::result::Result::Ok(::core::option::Option::None)
                } else {
                    let message = match &self.message {
                        ::core::option::Option::Some(message) => message.clone(),
                        ::core::option::Option::None => {
                            let $msg_value = $value;
                            $message
                        }
                    };
                    ::core::result::Result::Ok(::core::option::Option::Some(
                        $crate::violation::Violation::new($rule_name, $value, message),
                    ))
                }
            }
        }

        #[must_use]
        $vis fn $factory() -> $name {
            $name::new()
        }
    };

    // ── Rule with configuration fields ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        name: $rule_name:literal;
        check($self_:ident, $value:ident, $root:ident) $check:block
        message($self2:ident, $msg_value:ident) $message:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
            message: ::core::option::Option<::std::borrow::Cow<'static, str>>,
        }

        impl $name {
            #[must_use]
            $vis fn new($($field: $fty),+) -> Self {
                Self {
                    $($field,)+
                    message: ::core::option::Option::None,
                }
            }

            /// Replaces the rule's default message.
            #[must_use]
            $vis fn with_message(
                mut self,
                message: impl ::core::convert::Into<::std::borrow::Cow<'static, str>>,
            ) -> Self {
                self.message = ::core::option::Option::Some(message.into());
                self
            }
        }

        impl $crate::rule::Rule for $name {
            fn name(&self) -> &str {
                $rule_name
            }

            #[allow(unused_variables)]
            fn apply(
                &$self_,
                $value: &::serde_json::Value,
                $root: &::serde_json::Value,
            ) -> ::core::result::Result<
                ::core::option::Option<$crate::violation::Violation>,
                $crate::error::RuleError,
            > {
                let passed: bool = ($check)?;
                if passed {
                    ::core::result::Result::Ok(::core::option::Option::None)
                } else {
                    let message = match &$self2.message {
                        ::core::option::Option::Some(message) => message.clone(),
                        ::core::option::Option::None => {
                            let $msg_value = $value;
                            $message
                        }
                    };
                    ::core::result::Result::Ok(::core::option::Option::Some(
                        $crate::violation::Violation::new($rule_name, $value, message),
                    ))
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds a field's rule list.
///
/// Sync rules convert implicitly; wrap async rules with
/// [`async_rule`](crate::rule::async_rule).
///
/// ```
/// use veritree::rules::{min_length, required};
/// use veritree::rules;
///
/// let name_rules = rules![required(), min_length(2)];
/// assert_eq!(name_rules.len(), 2);
/// ```
#[macro_export]
macro_rules! rules {
    ($($rule:expr),* $(,)?) => {
        ::std::vec![$($crate::rule::FieldRule::from($rule)),*]
    };
}

// ============================================================================
// TESTS
// ============================================================================
