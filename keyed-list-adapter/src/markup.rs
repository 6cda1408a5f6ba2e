use alloc::string::String;

use crate::Element;

/// Renders `element` and its subtree as compact HTML-like markup.
///
/// Attributes come first in name order, then `data-*` entries in key order. Text is written
/// before the children. `&`, `<`, `>` are escaped everywhere, and `"` inside attribute values.
pub fn to_markup(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag());
    for (name, value) in element.attrs() {
        write_attr(out, "", &name, &value);
    }
    for (key, value) in element.data_entries() {
        write_attr(out, "data-", &key, &value);
    }
    out.push('>');
    escape_into(out, &element.text(), false);
    for child in element.children() {
        write_element(out, &child);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_attr(out: &mut String, prefix: &str, name: &str, value: &str) {
    out.push(' ');
    out.push_str(prefix);
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value, true);
    out.push('"');
}

fn escape_into(out: &mut String, text: &str, quote: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
