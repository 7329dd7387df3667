//! Content rules for string fields.

use std::sync::LazyLock;

use crate::rules::as_str;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// EMAIL ADDRESS
// ============================================================================

crate::rule! {
    /// Rejects strings that are not plausible email addresses.
    ///
    /// Uses a simple but effective regex pattern.
    pub EmailAddress;
    name: "email_address";
    check(value, _root) {
        Ok(as_str("email_address", value)?.is_none_or(|text| EMAIL_REGEX.is_match(text)))
    }
    message(_value) { "This field must be a valid email address.".into() }
    fn email_address();
}

// ============================================================================
// PATTERN
// ============================================================================

crate::rule! {
    /// Rejects strings not matching `pattern`.
    pub Pattern { pattern: regex::Regex };
    name: "pattern";
    check(self, value, _root) {
        Ok(as_str("pattern", value)?.is_none_or(|text| self.pattern.is_match(text)))
    }
    message(self, _value) {
        format!("This field must match the pattern `{}`.", self.pattern).into()
    }
    fn pattern(pattern: regex::Regex);
}

// ============================================================================
// TESTS
// ============================================================================
