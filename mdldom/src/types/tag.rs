#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Label,
    Input,
    Textarea,
    Span,
    /// Icon glyph holder (`<i>`).
    I,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Label => "label",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Span => "span",
            Self::I => "i",
        }
    }

    /// Parse a tag from its HTML name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "div" => Some(Self::Div),
            "label" => Some(Self::Label),
            "input" => Some(Self::Input),
            "textarea" => Some(Self::Textarea),
            "span" => Some(Self::Span),
            "i" => Some(Self::I),
            _ => None,
        }
    }

    /// Void elements have no content and no closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, Self::Input)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
