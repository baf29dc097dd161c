use serde::Deserialize;

use super::lenient;
use crate::Result;
use crate::validation::Pattern;

/// Configuration for one textfield render.
///
/// Deserializes from the camelCase keys used by the markup-side API
/// (`floatingLabel`, `maxRows`, `className`, ...). Every key is optional;
/// missing keys fall back to a valid, single-line, non-expandable field, and
/// a key holding the wrong kind of value is logged and treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextfieldProps {
    #[serde(deserialize_with = "lenient::label")]
    pub label: String,
    #[serde(deserialize_with = "lenient::text")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub rows: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub max_rows: Option<u32>,
    #[serde(deserialize_with = "lenient::flag")]
    pub floating_label: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub error: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub expandable: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub expandable_icon: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub disabled: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub required: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub pattern: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub class_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub input_class_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub style: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub input_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub placeholder: Option<String>,
}

impl TextfieldProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Current value; absent means empty.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Id shared by the input and every label pointing at it.
    ///
    /// Defaults to `textfield-` followed by the ASCII letters and digits of
    /// the label.
    pub fn input_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => {
                let slug: String = self
                    .label
                    .chars()
                    .filter(char::is_ascii_alphanumeric)
                    .collect();
                format!("textfield-{slug}")
            }
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.rows.is_some() || self.max_rows.is_some()
    }

    /// The error message, if one is set and non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Compile the configured pattern.
    ///
    /// Rendering treats a malformed pattern as absent; this is the strict
    /// form for callers that want to report it.
    pub fn compile_pattern(&self) -> Result<Option<Pattern>> {
        match self.pattern.as_deref() {
            Some(source) => Ok(Some(Pattern::new(source)?)),
            None => Ok(None),
        }
    }
}
