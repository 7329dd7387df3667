//! Numeric comparison rules.

use crate::rules::as_number;

// ============================================================================
// MIN NUMBER
// ============================================================================

crate::rule! {
    /// Rejects numbers below `min`.
    pub MinNumber { min: f64 };
    name: "min_number";
    check(self, value, _root) {
        Ok(as_number("min_number", value)?.is_none_or(|number| number >= self.min))
    }
    message(self, _value) {
        format!("The minimum value for this field is {}.", self.min).into()
    }
    fn min_number(min: f64);
}

// ============================================================================
// MAX NUMBER
// ============================================================================

crate::rule! {
    /// Rejects numbers above `max`.
    pub MaxNumber { max: f64 };
    name: "max_number";
    check(self, value, _root) {
        Ok(as_number("max_number", value)?.is_none_or(|number| number <= self.max))
    }
    message(self, _value) {
        format!("The maximum value for this field is {}.", self.max).into()
    }
    fn max_number(max: f64);
}

// ============================================================================
// NUMBER RANGE
// ============================================================================

crate::rule! {
    /// Rejects numbers outside `min..=max`.
    ///
    /// `min` must be less than or equal to `max`.
    pub NumberRange { min: f64, max: f64 };
    name: "number_range";
    check(self, value, _root) {
        Ok(as_number("number_range", value)?
            .is_none_or(|number| number >= self.min && number <= self.max))
    }
    message(self, _value) {
        format!("This field must be between {} and {}.", self.min, self.max).into()
    }
    fn number_range(min: f64, max: f64);
}

// ============================================================================
// TESTS
// ============================================================================
