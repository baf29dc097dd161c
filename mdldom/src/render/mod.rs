//! HTML serialization of element trees.

mod escape;

pub use escape::escape;

use std::fmt::Write;

use crate::element::{Content, Element};
use crate::types::Attr;

/// Serialize an element tree to compact HTML.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out, None, 0);
    out
}

/// Serialize an element tree to HTML with one element per line, indented by
/// two spaces per nesting level. Text-only elements stay on one line.
pub fn to_html_pretty(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out, Some(2), 0);
    out
}

fn write_element(element: &Element, out: &mut String, indent: Option<usize>, depth: usize) {
    if let Some(width) = indent {
        out.push_str(&" ".repeat(width * depth));
    }

    write_open_tag(element, out);

    if element.tag.is_void() {
        if indent.is_some() {
            out.push('\n');
        }
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            if indent.is_some() {
                out.push('\n');
            }
            for child in children {
                write_element(child, out, indent, depth + 1);
            }
            if let Some(width) = indent {
                out.push_str(&" ".repeat(width * depth));
            }
        }
    }

    // Writing into a String cannot fail.
    let _ = write!(out, "</{}>", element.tag);
    if indent.is_some() {
        out.push('\n');
    }
}

fn write_open_tag(element: &Element, out: &mut String) {
    let _ = write!(out, "<{}", element.tag);

    if let Some(id) = &element.id {
        let _ = write!(out, " id=\"{}\"", escape(id));
    }
    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.classes.to_string()));
    }
    for (name, value) in &element.attrs {
        match value {
            Attr::Flag => {
                let _ = write!(out, " {name}");
            }
            Attr::Text(text) => {
                let _ = write!(out, " {name}=\"{}\"", escape(text));
            }
        }
    }

    out.push('>');
}
