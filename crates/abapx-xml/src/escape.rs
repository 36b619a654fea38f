//! Markup text escaping for leaf values.

use std::borrow::Cow;

/// Escape `&`, `<` and `>` so `text` is safe as element content.
///
/// Returns the input unchanged when there is nothing to escape.
///
/// # Examples
///
/// ```
/// use abapx_xml::escape_text;
///
/// assert_eq!(escape_text("plain"), "plain");
/// assert_eq!(escape_text("a < b && c"), "a &lt; b &amp;&amp; c");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
