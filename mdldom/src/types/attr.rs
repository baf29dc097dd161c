/// Attribute value on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    Text(String),
    /// Boolean attribute, present without a value (`disabled`, `required`).
    Flag,
}

impl Attr {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl From<String> for Attr {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Attr {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
