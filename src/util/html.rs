//! HTML escaping for text that ends up in `inner_html`.
//!
//! `escape_html` produces exactly what the browser serializes for a text
//! node (`textContent` then `innerHTML`): `&`, `<`, `>` and non-breaking
//! spaces are encoded, quotes are left alone. That makes it safe for element
//! content only, never for attribute values.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    out
}

/// Escaped multi-line text with line breaks turned into `<br>`.
pub fn text_to_html(text: &str) -> String {
    escape_html(text).replace("\r\n", "\n").replace('\n', "<br>")
}
