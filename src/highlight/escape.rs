//! Markup escaping for token text.

use std::borrow::Cow;

/// Escape the five reserved markup characters.
///
/// `&` is replaced first so the entities produced for the other characters
/// are not escaped a second time.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;"),
    )
}
