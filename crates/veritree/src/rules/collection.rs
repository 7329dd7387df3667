//! Collection rules, applied to an array field as a whole.
//!
//! Unlike the typed rules, collection rules see the field's value as-is:
//! element rules are skipped for non-arrays, so a collection rule is the
//! only place a wrong-type or missing array field can be flagged.

// ============================================================================
// ARRAY MIN LEN
// ============================================================================

crate::rule! {
    /// Rejects arrays with fewer than `min` elements. Null and non-array
    /// values count as having no elements and are rejected for `min > 0`.
    pub ArrayMinLen { min: usize };
    name: "array_min_len";
    check(self, value, _root) {
        Ok(value.as_array().map_or(0, Vec::len) >= self.min)
    }
    message(self, _value) {
        format!("This field must contain at least {} items.", self.min).into()
    }
    fn array_min_len(min: usize);
}

// ============================================================================
// ARRAY MAX LEN
// ============================================================================

crate::rule! {
    /// Rejects arrays with more than `max` elements. Null and non-array
    /// values have nothing to exceed the bound and pass.
    pub ArrayMaxLen { max: usize };
    name: "array_max_len";
    check(self, value, _root) {
        Ok(value.as_array().is_none_or(|items| items.len() <= self.max))
    }
    message(self, _value) {
        format!("This field must contain at most {} items.", self.max).into()
    }
    fn array_max_len(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
