use super::Element;
use crate::types::Tag;

/// A single compound selector: optional tag, optional `#id`, any number of
/// `.class` parts. Combinators are not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<Tag>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return None;
        }

        let mut selector = Self::default();
        let mut rest = input;

        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            selector.tag = Some(Tag::from_name(&rest[..tag_end])?);
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            rest = &rest[1..];
            let end = rest.find(['.', '#']).unwrap_or(rest.len());
            let name = &rest[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                '.' => selector.classes.push(name.to_string()),
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                _ => return None,
            }
            rest = &rest[end..];
        }

        Some(selector)
    }

    pub fn matches(&self, element: &Element) -> bool {
        if self.tag.is_some_and(|tag| tag != element.tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}
