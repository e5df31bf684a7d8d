//! Visitor implementation for HTML conversion.

use std::io::Write;

use mdlite_converters_core::{
    Options,
    visitor::{Visitor, WritableVisitor},
};
use mdlite_parser::{Bold, Document, Header, Italic, Paragraph};

use crate::{Error, block, document, inlines};

/// HTML visitor that generates HTML from the document tree
///
/// Sibling blocks are written back to back, with no separator. In fragment mode (the
/// default) an empty document produces no output at all.
pub struct HtmlVisitor<'a, W: Write> {
    writer: W,
    options: &'a Options,
}

impl<'a, W: Write> HtmlVisitor<'a, W> {
    #[must_use]
    pub fn new(writer: W, options: &'a Options) -> Self {
        Self { writer, options }
    }

    /// Consume the visitor and return the writer
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Visitor for HtmlVisitor<'_, W> {
    type Error = Error;

    fn visit_document_start(&mut self, doc: &Document) -> Result<(), Self::Error> {
        if self.options.standalone() {
            document::render_head(&mut self.writer, doc, self.options)?;
        }
        Ok(())
    }

    fn visit_document_end(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        if self.options.standalone() {
            document::render_foot(&mut self.writer)?;
        }
        Ok(())
    }

    fn visit_header(&mut self, header: &Header) -> Result<(), Self::Error> {
        block::visit_header(header, self)
    }

    fn visit_paragraph(&mut self, para: &Paragraph) -> Result<(), Self::Error> {
        block::visit_paragraph(para, self)
    }

    fn visit_bold(&mut self, bold: &Bold) -> Result<(), Self::Error> {
        inlines::visit_bold(bold, self)
    }

    fn visit_italic(&mut self, italic: &Italic) -> Result<(), Self::Error> {
        inlines::visit_italic(italic, self)
    }

    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error> {
        inlines::visit_text(text, self)
    }
}

impl<W: Write> WritableVisitor for HtmlVisitor<'_, W> {
    fn writer_mut(&mut self) -> &mut dyn Write {
        &mut self.writer
    }
}
