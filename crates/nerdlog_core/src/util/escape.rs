//! HTML escaping for values interpolated into markup.
//!
//! # Invariants
//! - Output never contains a raw `<`, `>`, `&` or `"` from the input.
//! - `&` is replaced first so existing entities are escaped, not preserved.

/// Escapes text for element content and double-quoted attributes.
///
/// Single quotes are left untouched; card and list markup only uses
/// double-quoted attributes.
pub fn esc(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes text for any HTML context, including single-quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
