//! A host re-renders whenever props change; each render must reflect the new
//! props in full, with nothing carried over from the previous one.

use mdl::components::Textfield;
use mdldom::{Element, query_selector};

fn input(el: &Element) -> &Element {
    query_selector(el, ".mdl-textfield__input").unwrap()
}

#[test]
fn test_receives_error() {
    let before = Textfield::new("label").build();
    assert!(!before.has_class("is-invalid"));

    let after = Textfield::new("label").error("is now invalid!").build();
    assert!(after.has_class("is-invalid"));
}

#[test]
fn test_error_cleared() {
    let before = Textfield::new("label").error("bad").build();
    assert!(before.has_class("is-invalid"));

    let after = Textfield::new("label").build();
    assert!(!after.has_class("is-invalid"));
    assert!(query_selector(&after, ".mdl-textfield__error").is_none());
}

#[test]
fn test_receives_new_value() {
    let before = Textfield::new("label").build();
    assert_eq!(input(&before).value(), Some(""));

    let after = Textfield::new("label").value("my value").build();
    assert_eq!(input(&after).value(), Some("my value"));
}

#[test]
fn test_receives_new_value_multiline() {
    let after = Textfield::new("label").rows(2).value("my value").build();
    assert_eq!(input(&after).value(), Some("my value"));
}

#[test]
fn test_gets_disabled() {
    let before = Textfield::new("label").build();
    assert!(!input(&before).is_disabled());

    let after = Textfield::new("label").disabled(true).build();
    assert!(after.has_class("is-disabled"));
    assert!(input(&after).is_disabled());
}

#[test]
fn test_gets_required_without_value() {
    let after = Textfield::new("label").required(true).build();

    assert!(after.has_class("is-invalid"));
    assert!(input(&after).is_required());
}

#[test]
fn test_gets_required_with_value() {
    let before = Textfield::new("label").value("my value").build();
    assert!(!before.has_class("is-invalid"));

    let after = Textfield::new("label").value("my value").required(true).build();
    assert!(!after.has_class("is-invalid"));
    assert!(input(&after).is_required());
}

#[test]
fn test_whitespace_satisfies_required() {
    let el = Textfield::new("label").value(" ").required(true).build();
    assert!(!el.has_class("is-invalid"));
}

#[test]
fn test_pattern_with_incorrect_value() {
    let before = Textfield::new("label").value("value").build();
    assert!(!before.has_class("is-invalid"));

    let after = Textfield::new("label").value("value").pattern("[0-9]+").build();
    assert!(after.has_class("is-invalid"));
    assert_eq!(input(&after).attr_text("pattern"), Some("[0-9]+"));
}

#[test]
fn test_pattern_with_correct_value() {
    let after = Textfield::new("label").value("17").pattern("[0-9]+").build();
    assert!(!after.has_class("is-invalid"));
}

#[test]
fn test_value_fixed_after_pattern_mismatch() {
    let tf = Textfield::new("label").pattern("[0-9]+").required(true);

    assert!(tf.clone().value("abc").build().has_class("is-invalid"));
    assert!(!tf.clone().value("42").build().has_class("is-invalid"));
    assert!(tf.value("").build().has_class("is-invalid"));
}

#[test]
fn test_malformed_pattern_ignored() {
    let el = Textfield::new("label").value("anything").pattern("[0-9").build();
    assert!(!el.has_class("is-invalid"));
}

#[test]
fn test_state_matches_rendered_classes() {
    let tf = Textfield::new("label").required(true).disabled(true);
    let state = tf.state();
    let el = tf.build();

    assert!(state.validity.value_missing);
    assert_eq!(state.is_invalid(), el.has_class("is-invalid"));
    assert_eq!(state.disabled, el.has_class("is-disabled"));
}

#[test]
fn test_lookahead_pattern_mismatch_is_invalid() {
    let el = Textfield::new("label").value("abc").pattern(r"(?=.*\d).+").build();
    assert!(el.has_class("is-invalid"));

    let el = Textfield::new("label").value("abc1").pattern(r"(?=.*\d).+").build();
    assert!(!el.has_class("is-invalid"));
}

#[test]
fn test_backreference_pattern_mismatch_is_invalid() {
    let el = Textfield::new("label").value("ab").pattern(r"(a)\1").build();
    assert!(el.has_class("is-invalid"));
}
