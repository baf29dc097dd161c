use mdldom::ClassList;

use super::TextfieldProps;
use crate::classes;
use crate::validation::{Pattern, ValidityState};

/// Display state derived from a [`TextfieldProps`] snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextfieldState {
    pub validity: ValidityState,
    pub multiline: bool,
    /// The field holds a non-empty value.
    pub dirty: bool,
    pub disabled: bool,
    pub floating_label: bool,
    pub expandable: bool,
    /// Compiled pattern. `None` when absent or malformed.
    pub pattern: Option<Pattern>,
}

impl TextfieldState {
    pub fn from_props(props: &TextfieldProps) -> Self {
        let pattern = props.compile_pattern().unwrap_or_else(|e| {
            log::warn!("Ignoring textfield pattern: {e}");
            None
        });
        let value = props.value();

        Self {
            validity: ValidityState::compute(
                value,
                props.required,
                pattern.as_ref(),
                props.error.as_deref(),
            ),
            multiline: props.is_multiline(),
            dirty: !value.is_empty(),
            disabled: props.disabled,
            floating_label: props.floating_label,
            expandable: props.expandable,
            pattern,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.validity.is_invalid()
    }

    /// Classes for the root container: base block, modifiers, state, then
    /// any caller-supplied classes.
    pub fn root_classes(&self, extra: Option<&str>) -> ClassList {
        let mut list = ClassList::new();
        list.add(classes::TEXTFIELD);
        list.add(classes::JS_TEXTFIELD);
        list.toggle(classes::TEXTFIELD_FLOATING_LABEL, self.floating_label);
        list.toggle(classes::TEXTFIELD_EXPANDABLE, self.expandable);
        list.toggle(classes::IS_INVALID, self.is_invalid());
        list.toggle(classes::IS_DISABLED, self.disabled);
        list.toggle(classes::IS_DIRTY, self.dirty);
        if let Some(extra) = extra {
            list.extend_str(extra);
        }
        list
    }
}
