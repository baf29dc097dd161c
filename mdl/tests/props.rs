use mdl::components::{Textfield, TextfieldProps};

#[test]
fn test_deserialize_camel_case_keys() {
    let props: TextfieldProps = serde_json::from_str(
        r#"{
            "label": "Age",
            "value": "17",
            "maxRows": 4,
            "floatingLabel": true,
            "expandable": true,
            "expandableIcon": "search",
            "required": true,
            "pattern": "[0-9]+",
            "className": "mine",
            "inputClassName": "wide",
            "type": "number"
        }"#,
    )
    .unwrap();

    assert_eq!(props.label, "Age");
    assert_eq!(props.max_rows, Some(4));
    assert!(props.floating_label);
    assert_eq!(props.expandable_icon.as_deref(), Some("search"));
    assert_eq!(props.input_type.as_deref(), Some("number"));
    assert_eq!(props.class_name.as_deref(), Some("mine"));
}

#[test]
fn test_missing_keys_default() {
    let props: TextfieldProps = serde_json::from_str(r#"{"label": "label"}"#).unwrap();

    assert_eq!(props, TextfieldProps::new("label"));
    assert!(!props.is_multiline());
    assert_eq!(props.value(), "");
    assert!(props.error_message().is_none());
}

#[test]
fn test_builder_matches_props() {
    let built = Textfield::new("label")
        .value("v")
        .rows(3)
        .disabled(true)
        .into_props();

    let expected = TextfieldProps {
        value: Some("v".into()),
        rows: Some(3),
        disabled: true,
        ..TextfieldProps::new("label")
    };
    assert_eq!(built, expected);
}

#[test]
fn test_from_props_renders_same() {
    let props = TextfieldProps {
        required: true,
        ..TextfieldProps::new("label")
    };
    let a = Textfield::from(props.clone()).build();
    let b = mdl::components::textfield::render(&props);
    assert_eq!(a, b);
}

// ============================================================================
// Malformed Option Tests
// ============================================================================

#[test]
fn test_negative_rows_treated_as_absent() {
    let props: TextfieldProps = serde_json::from_str(r#"{"label": "Age", "rows": -1}"#).unwrap();

    assert_eq!(props.label, "Age");
    assert_eq!(props.rows, None);
    assert!(!props.is_multiline());
}

#[test]
fn test_numeric_string_rows_accepted() {
    let props: TextfieldProps =
        serde_json::from_str(r#"{"label": "Bio", "rows": "3", "maxRows": " 5 "}"#).unwrap();

    assert_eq!(props.rows, Some(3));
    assert_eq!(props.max_rows, Some(5));
}

#[test]
fn test_non_numeric_string_rows_treated_as_absent() {
    let props: TextfieldProps = serde_json::from_str(r#"{"label": "Bio", "rows": "many"}"#).unwrap();
    assert_eq!(props.rows, None);
}

#[test]
fn test_wrong_typed_flags_default_to_false() {
    let props: TextfieldProps = serde_json::from_str(
        r#"{"label": "label", "disabled": "yes", "required": 1, "floatingLabel": null}"#,
    )
    .unwrap();

    assert!(!props.disabled);
    assert!(!props.required);
    assert!(!props.floating_label);
}

#[test]
fn test_wrong_typed_text_treated_as_absent() {
    let props: TextfieldProps = serde_json::from_str(
        r#"{"label": 42, "value": ["a"], "error": {"msg": "x"}, "pattern": false, "type": null}"#,
    )
    .unwrap();

    assert_eq!(props, TextfieldProps::default());
}

#[test]
fn test_bad_option_keeps_the_others() {
    let props: TextfieldProps = serde_json::from_str(
        r#"{"label": "Age", "rows": -1, "required": true, "value": "17"}"#,
    )
    .unwrap();

    assert!(props.required);
    assert_eq!(props.value(), "17");
}

#[test]
fn test_unparseable_json_still_fails() {
    assert!(serde_json::from_str::<TextfieldProps>(r#"{"label": "#).is_err());
    assert!(serde_json::from_str::<TextfieldProps>("42").is_err());
}

// ============================================================================
// Pattern Compilation Tests
// ============================================================================

#[test]
fn test_compile_pattern_strict() {
    let props = TextfieldProps {
        pattern: Some("[0-9".into()),
        ..TextfieldProps::new("label")
    };
    assert!(matches!(props.compile_pattern(), Err(mdl::Error::Pattern(_))));

    let props = TextfieldProps {
        pattern: Some("[0-9]+".into()),
        ..TextfieldProps::new("label")
    };
    let pattern = props.compile_pattern().unwrap().unwrap();
    assert_eq!(pattern.as_str(), "[0-9]+");

    assert!(TextfieldProps::new("label").compile_pattern().unwrap().is_none());
}

#[test]
fn test_associated_render_matches_build() {
    let props = TextfieldProps {
        floating_label: true,
        ..TextfieldProps::new("label")
    };
    assert_eq!(Textfield::render(&props), Textfield::from(props).build());
}
