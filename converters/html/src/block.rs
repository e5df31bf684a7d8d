use mdlite_converters_core::visitor::{WritableVisitor, WritableVisitorExt};
use mdlite_parser::{Header, Paragraph};

use crate::Error;

/// A header line is always a level one heading, even when empty.
pub(crate) fn visit_header<V: WritableVisitor<Error = Error>>(
    header: &Header,
    visitor: &mut V,
) -> Result<(), Error> {
    visitor.render_wrapped(&header.content, "<h1>", "</h1>")
}

pub(crate) fn visit_paragraph<V: WritableVisitor<Error = Error>>(
    para: &Paragraph,
    visitor: &mut V,
) -> Result<(), Error> {
    visitor.render_wrapped(&para.content, "<p>", "</p>")
}
