use std::collections::BTreeMap;

use super::Content;
use crate::types::{Attr, ClassList, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,

    // Identity
    pub id: Option<String>,

    // Styling
    pub classes: ClassList,

    // Everything else that ends up as an HTML attribute (`for`, `type`,
    // `value`, `disabled`, ...). Sorted so serialization is stable.
    pub attrs: BTreeMap<String, Attr>,

    pub content: Content,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: ClassList::new(),
            attrs: BTreeMap::new(),
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn label() -> Self {
        Self::new(Tag::Label)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    /// Create an icon holder (`<i>`) showing the named glyph.
    pub fn icon(name: impl Into<String>) -> Self {
        Self::new(Tag::I).text(name)
    }

    /// Create a single-line input carrying `value`.
    pub fn input(value: impl Into<String>) -> Self {
        Self::new(Tag::Input).attr("value", value.into())
    }

    /// Create a multi-line input. Its value lives in the text content.
    pub fn textarea(value: impl Into<String>) -> Self {
        Self::new(Tag::Textarea).text(value)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Styling
    /// Add every class in a whitespace-separated string.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.extend_str(classes);
        self
    }

    /// Add a class only when `on` is true.
    pub fn class_if(mut self, name: &str, on: bool) -> Self {
        self.classes.toggle(name, on);
        self
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Attr>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present.
    pub fn attr_opt<V: Into<Attr>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set or clear a boolean attribute.
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        if on {
            self.attrs.insert(name, Attr::Flag);
        } else {
            self.attrs.remove(&name);
        }
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Accessors
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn get_attr(&self, name: &str) -> Option<&Attr> {
        self.attrs.get(name)
    }

    /// Text value of an attribute. Boolean attributes have none.
    pub fn attr_text(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(Attr::as_text)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs.get(name).is_some_and(Attr::is_flag)
    }

    /// Direct children; empty for text or empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Current value of a form control, the way a DOM reads it back:
    /// the `value` attribute of an input, the text of a textarea.
    pub fn value(&self) -> Option<&str> {
        match self.tag {
            Tag::Input => self.attr_text("value"),
            Tag::Textarea => Some(self.text_content().unwrap_or("")),
            _ => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.has_flag("disabled")
    }

    pub fn is_required(&self) -> bool {
        self.has_flag("required")
    }
}
