use fancy_regex::Regex;
use thiserror::Error;

/// A rule the whole input value must match.
///
/// Accepts the lookaround and backreference forms an HTML `pattern`
/// attribute allows, such as `(?=.*\d).+` or `(a)\1`.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

#[derive(Debug, Error)]
#[error("invalid pattern {source_text:?}: {error}")]
pub struct PatternError {
    pub source_text: String,
    #[source]
    pub error: fancy_regex::Error,
}

impl Pattern {
    /// Compile a rule. Like an HTML `pattern` attribute it is anchored at both
    /// ends, so `[0-9]+` rejects `"12a"`.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|error| PatternError {
            source_text: source.to_string(),
            error,
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The rule as written, without the anchoring.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `value` matches the whole rule. A match that gives up (the
    /// backtracking limit is hit) counts as a mismatch.
    pub fn matches(&self, value: &str) -> bool {
        match self.regex.is_match(value) {
            Ok(matched) => matched,
            Err(e) => {
                log::warn!("Pattern {:?} could not be evaluated: {e}", self.source);
                false
            }
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
