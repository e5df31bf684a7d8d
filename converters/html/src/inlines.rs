//! Inline content rendering for HTML conversion.
//!
//! # Escaping
//!
//! Text is always escaped: `&`, `<`, `>`, `"` and `'` become entities. Markers that did
//! not form emphasis reach the renderer as plain text, so `__` or `_` in the output is
//! exactly what the author wrote. Nothing in the source can produce raw HTML.

use std::borrow::Cow;

use mdlite_converters_core::visitor::{WritableVisitor, WritableVisitorExt};
use mdlite_parser::{Bold, Italic};

use crate::Error;

/// Escape the HTML special characters in `text`.
///
/// Single pass, so an `&` that starts an entity in the source is escaped like any
/// other: `&amp;` becomes `&amp;amp;`. Borrows when there is nothing to escape.
///
/// ```
/// use mdlite_converters_html::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 16);
    let (clean, rest) = text.split_at(first);
    escaped.push_str(clean);
    for c in rest.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

pub(crate) fn visit_bold<V: WritableVisitor<Error = Error>>(
    bold: &Bold,
    visitor: &mut V,
) -> Result<(), Error> {
    visitor.render_wrapped(&bold.content, "<strong>", "</strong>")
}

pub(crate) fn visit_italic<V: WritableVisitor<Error = Error>>(
    italic: &Italic,
    visitor: &mut V,
) -> Result<(), Error> {
    visitor.render_wrapped(&italic.content, "<em>", "</em>")
}

pub(crate) fn visit_text<V: WritableVisitor<Error = Error>>(
    text: &str,
    visitor: &mut V,
) -> Result<(), Error> {
    let w = visitor.writer_mut();
    write!(w, "{}", escape_html(text))?;
    Ok(())
}
