//! Textfield component - a material text input with label, validity styling
//! and an optional error message.
//!
//! Rendering is a pure function of [`TextfieldProps`]: every call derives the
//! validity and class list again, so re-rendering with new props is all a host
//! needs to do to reflect a change.
//!
//! # Example
//!
//! ```
//! use mdl::components::Textfield;
//!
//! let el = Textfield::new("Age").value("17").pattern("[0-9]+").required(true).build();
//! assert!(el.has_class("mdl-textfield"));
//! assert!(!el.has_class("is-invalid"));
//! ```

mod lenient;
mod props;
mod render;
mod state;

pub use props::TextfieldProps;
pub use render::render;
pub use state::TextfieldState;

use mdldom::Element;

/// Textfield builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Textfield {
    props: TextfieldProps,
}

impl From<TextfieldProps> for Textfield {
    fn from(props: TextfieldProps) -> Self {
        Self { props }
    }
}

impl Textfield {
    /// Create a single-line textfield with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            props: TextfieldProps::new(label),
        }
    }

    pub fn props(&self) -> &TextfieldProps {
        &self.props
    }

    pub fn into_props(self) -> TextfieldProps {
        self.props
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.props.value = Some(value.into());
        self
    }

    /// Render as a textarea with the given visible row count.
    pub fn rows(mut self, rows: u32) -> Self {
        self.props.rows = Some(rows);
        self
    }

    /// Render as a textarea that grows up to `max_rows` lines.
    pub fn max_rows(mut self, max_rows: u32) -> Self {
        self.props.max_rows = Some(max_rows);
        self
    }

    pub fn floating_label(mut self, floating: bool) -> Self {
        self.props.floating_label = floating;
        self
    }

    /// Show an error message and force the invalid state.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.props.error = Some(message.into());
        self
    }

    /// Collapse the field behind an icon button showing `icon`.
    pub fn expandable(mut self, icon: impl Into<String>) -> Self {
        self.props.expandable = true;
        self.props.expandable_icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.props.required = required;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.props.pattern = Some(pattern.into());
        self
    }

    /// Extra classes for the root container.
    pub fn class_name(mut self, classes: impl Into<String>) -> Self {
        self.props.class_name = Some(classes.into());
        self
    }

    /// Extra classes for the input element.
    pub fn input_class_name(mut self, classes: impl Into<String>) -> Self {
        self.props.input_class_name = Some(classes.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.props.style = Some(style.into());
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.props.input_type = Some(input_type.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.props.name = Some(name.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.props.placeholder = Some(placeholder.into());
        self
    }

    /// Render a props snapshot directly.
    pub fn render(props: &TextfieldProps) -> Element {
        render::render(props)
    }

    /// Derived display state for the current props.
    pub fn state(&self) -> TextfieldState {
        TextfieldState::from_props(&self.props)
    }

    /// Build the element tree.
    pub fn build(&self) -> Element {
        render(&self.props)
    }
}
