use super::Pattern;

/// Why a field is (or is not) valid. Recomputed from scratch on every call;
/// nothing here remembers a previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    /// An error message was supplied from outside.
    pub custom_error: bool,
    /// The field is required and its value is empty.
    pub value_missing: bool,
    /// The value does not match the field's pattern.
    pub pattern_mismatch: bool,
}

impl ValidityState {
    /// Derive validity from a value and its constraints.
    ///
    /// An empty `error` string counts as no error.
    pub fn compute(
        value: &str,
        required: bool,
        pattern: Option<&Pattern>,
        error: Option<&str>,
    ) -> Self {
        Self {
            custom_error: error.is_some_and(|e| !e.is_empty()),
            value_missing: required && value.is_empty(),
            pattern_mismatch: pattern.is_some_and(|p| !p.matches(value)),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    pub fn is_invalid(&self) -> bool {
        self.custom_error || self.value_missing || self.pattern_mismatch
    }
}

impl std::fmt::Display for ValidityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        let reasons: Vec<&str> = [
            (self.custom_error, "custom error"),
            (self.value_missing, "value missing"),
            (self.pattern_mismatch, "pattern mismatch"),
        ]
        .into_iter()
        .filter_map(|(set, reason)| set.then_some(reason))
        .collect();
        write!(f, "invalid ({})", reasons.join(", "))
    }
}
