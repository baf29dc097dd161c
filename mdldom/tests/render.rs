use mdldom::{to_html, to_html_pretty, Element};

// ============================================================================
// Compact Output Tests
// ============================================================================

#[test]
fn test_attribute_order_id_class_then_sorted() {
    let el = Element::label().attr("for", "x").id("l").class("a b").text("Name");
    assert_eq!(to_html(&el), r#"<label id="l" class="a b" for="x">Name</label>"#);
}

#[test]
fn test_void_input_has_no_closing_tag() {
    let el = Element::input("v").attr("type", "text").flag("disabled", true);
    assert_eq!(to_html(&el), r#"<input disabled type="text" value="v">"#);
}

#[test]
fn test_empty_class_list_omitted() {
    assert_eq!(to_html(&Element::div()), "<div></div>");
}

#[test]
fn test_text_and_attributes_escaped() {
    let el = Element::span().attr("title", "a\"b").text("<b>&");
    assert_eq!(to_html(&el), r#"<span title="a&quot;b">&lt;b&gt;&amp;</span>"#);
}

#[test]
fn test_nested_children() {
    let el = Element::div()
        .class("outer")
        .child(Element::icon("search").class("material-icons"));
    assert_eq!(
        to_html(&el),
        r#"<div class="outer"><i class="material-icons">search</i></div>"#
    );
}

// ============================================================================
// Pretty Output Tests
// ============================================================================

#[test]
fn test_pretty_indents_children() {
    let el = Element::div()
        .child(Element::input(""))
        .child(Element::div().child(Element::span().text("x")));
    let expected = "<div>\n  <input value=\"\">\n  <div>\n    <span>x</span>\n  </div>\n</div>\n";
    assert_eq!(to_html_pretty(&el), expected);
}
