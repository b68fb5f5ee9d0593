//! HTML serialization with escaping.

use std::fmt::Write as _;

use crate::element::{Element, Node};

impl Element {
    /// Serialize the fragment to HTML.
    ///
    /// Text content escapes `&`, `<`, `>`; attribute values additionally
    /// escape `"`. Classes serialize as a single `class` attribute ahead
    /// of the other attributes.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn write_element(element: &Element, out: &mut String) {
    let _ = write!(out, "<{}", element.tag());
    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        for (i, class) in element.classes().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            escape_into(class, true, out);
        }
        out.push('"');
    }
    for (name, value) in element.attrs() {
        let _ = write!(out, " {name}=\"");
        escape_into(value, true, out);
        out.push('"');
    }
    out.push('>');
    for child in element.children() {
        match child {
            Node::Element(el) => write_element(el, out),
            Node::Text(text) => escape_into(text, false, out),
        }
    }
    let _ = write!(out, "</{}>", element.tag());
}

fn escape_into(raw: &str, in_attr: bool, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
