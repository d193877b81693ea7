//! HTML entity escaping

/// Escape the HTML-significant characters of a text fragment.
///
/// Applied to text spans and link labels only; markup emitted by the
/// formatters themselves is never passed through here.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
