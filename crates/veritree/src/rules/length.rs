//! String length rules. Lengths count Unicode scalar values.

use crate::rules::as_str;

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Rejects strings shorter than `min` characters.
    pub MinLength { min: usize };
    name: "min_length";
    check(self, value, _root) {
        Ok(as_str("min_length", value)?.is_none_or(|text| text.chars().count() >= self.min))
    }
    message(self, _value) {
        format!("This field must be at least {} characters long.", self.min).into()
    }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Rejects strings longer than `max` characters.
    pub MaxLength { max: usize };
    name: "max_length";
    check(self, value, _root) {
        Ok(as_str("max_length", value)?.is_none_or(|text| text.chars().count() <= self.max))
    }
    message(self, _value) {
        format!("This field must be at most {} characters long.", self.max).into()
    }
    fn max_length(max: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

crate::rule! {
    /// Rejects strings whose length falls outside `min..=max` characters.
    ///
    /// `min` must be less than or equal to `max`.
    pub LengthRange { min: usize, max: usize };
    name: "length_range";
    check(self, value, _root) {
        Ok(as_str("length_range", value)?.is_none_or(|text| {
            let length = text.chars().count();
            length >= self.min && length <= self.max
        }))
    }
    message(self, _value) {
        format!(
            "This field must be between {} and {} characters long.",
            self.min, self.max
        )
        .into()
    }
    fn length_range(min: usize, max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
