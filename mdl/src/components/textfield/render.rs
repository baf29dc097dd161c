use mdldom::Element;

use super::{TextfieldProps, TextfieldState};
use crate::classes;

/// Render a textfield.
///
/// Layout without `expandable`:
///
/// ```text
/// div.mdl-textfield
/// ├── input | textarea
/// ├── label.mdl-textfield__label
/// └── span.mdl-textfield__error   (only with a non-empty error)
/// ```
///
/// With `expandable`, an icon button comes first and the input, label and
/// error move into `div.mdl-textfield__expandable-holder`.
pub fn render(props: &TextfieldProps) -> Element {
    let state = TextfieldState::from_props(props);
    let id = props.input_id();

    log::debug!(
        "Rendering textfield {id} (multiline: {}, {})",
        state.multiline,
        state.validity
    );

    let fields = field_children(props, &state, &id);

    let root = Element::div()
        .classes(state.root_classes(props.class_name.as_deref()))
        .attr_opt("style", props.style.as_deref());

    if props.expandable {
        root.child(expand_trigger(props, &id)).child(
            Element::div()
                .class(classes::TEXTFIELD_EXPANDABLE_HOLDER)
                .children(fields),
        )
    } else {
        root.children(fields)
    }
}

/// Input, label and (optional) error, in that order.
fn field_children(props: &TextfieldProps, state: &TextfieldState, id: &str) -> Vec<Element> {
    let mut children = vec![
        input(props, state, id),
        Element::label()
            .class(classes::TEXTFIELD_LABEL)
            .attr("for", id)
            .text(props.label.as_str()),
    ];

    if let Some(message) = props.error_message() {
        children.push(Element::span().class(classes::TEXTFIELD_ERROR).text(message));
    }

    children
}

fn input(props: &TextfieldProps, state: &TextfieldState, id: &str) -> Element {
    let value = props.value();

    let el = if state.multiline {
        Element::textarea(value)
            .attr_opt("rows", props.rows.map(|r| r.to_string()))
            .attr_opt("maxrows", props.max_rows.map(|r| r.to_string()))
    } else {
        Element::input(value).attr("type", props.input_type.as_deref().unwrap_or("text"))
    };

    let mut el = el
        .id(id)
        .class(classes::TEXTFIELD_INPUT)
        .flag("disabled", props.disabled)
        .flag("required", props.required)
        .attr_opt("pattern", props.pattern.as_deref())
        .attr_opt("name", props.name.as_deref())
        .attr_opt("placeholder", props.placeholder.as_deref());

    if let Some(extra) = &props.input_class_name {
        el = el.class(extra);
    }
    el
}

/// Icon button that reveals an expandable field.
fn expand_trigger(props: &TextfieldProps, id: &str) -> Element {
    let icon = props.expandable_icon.as_deref().unwrap_or("");
    Element::label()
        .class(classes::BUTTON)
        .class(classes::JS_BUTTON)
        .class(classes::BUTTON_ICON)
        .attr("for", id)
        .attr("aria-label", props.label.as_str())
        .child(Element::icon(icon).class(classes::MATERIAL_ICONS))
}
