//! Visitor pattern for traversing the mdlite document tree.
//!
//! Converters implement [`Visitor`] to define how each node type is processed. The
//! traversal itself (document → blocks → inlines) lives in the provided methods, so a
//! converter only has to say what each node turns into.
//!
//! # Naming Conventions
//!
//! - **`visit_*` functions** orchestrate traversal: they accept a visitor and call back
//!   into `visit_nodes()` for nested content.
//! - **`render_*` functions** only generate markup for a writer and never traverse.

use std::io::Write;

use mdlite_parser::{Bold, Document, Header, Italic, Node, Paragraph};

/// The Visitor trait defines methods for visiting each type of document node.
///
/// # Document Structure
///
/// `visit_document` calls, in order:
///
/// 1. `visit_document_start()` - document setup
/// 2. `visit_nodes()` over the top-level blocks
/// 3. `visit_document_end()` - document cleanup
///
/// Both structural hooks default to no-ops.
pub trait Visitor {
    /// The error type that can be returned during visiting
    type Error;

    /// Called before any node is visited.
    ///
    /// # Errors
    ///
    /// The default implementation never returns an error, but custom implementations
    /// may return errors during document processing.
    fn visit_document_start(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after every node has been visited.
    ///
    /// # Errors
    ///
    /// The default implementation never returns an error, but custom implementations
    /// may return errors during document processing.
    fn visit_document_end(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visit a complete document.
    ///
    /// # Errors
    ///
    /// Returns an error if any visitor method fails during document traversal.
    fn visit_document(&mut self, doc: &Document) -> Result<(), Self::Error> {
        self.visit_document_start(doc)?;
        self.visit_nodes(&doc.nodes)?;
        self.visit_document_end(doc)
    }

    /// Visit a sequence of sibling nodes, in order, with nothing in between.
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of any node fails.
    fn visit_nodes(&mut self, nodes: &[Node]) -> Result<(), Self::Error> {
        for node in nodes {
            self.visit_node(node)?;
        }
        Ok(())
    }

    /// Visit a single node (delegates to the specific node visitors)
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this node fails.
    fn visit_node(&mut self, node: &Node) -> Result<(), Self::Error> {
        match node {
            Node::Header(header) => self.visit_header(header),
            Node::Paragraph(para) => self.visit_paragraph(para),
            Node::Bold(bold) => self.visit_bold(bold),
            Node::Italic(italic) => self.visit_italic(italic),
            Node::Text(text) => self.visit_text(&text.content),
        }
    }

    /// Visit a header line
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of the header fails.
    fn visit_header(&mut self, header: &Header) -> Result<(), Self::Error>;

    /// Visit a paragraph
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this paragraph fails.
    fn visit_paragraph(&mut self, para: &Paragraph) -> Result<(), Self::Error>;

    /// Visit a bold span
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this span fails.
    fn visit_bold(&mut self, bold: &Bold) -> Result<(), Self::Error>;

    /// Visit an italic span
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this span fails.
    fn visit_italic(&mut self, italic: &Italic) -> Result<(), Self::Error>;

    /// Visit plain text
    ///
    /// # Errors
    ///
    /// Returns an error if writing the text fails.
    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// A writable visitor that outputs to a writer.
pub trait WritableVisitor: Visitor {
    /// Get a mutable reference to the writer
    fn writer_mut(&mut self) -> &mut dyn Write;
}

/// Extension trait for `WritableVisitor` that provides common rendering helpers.
pub trait WritableVisitorExt: WritableVisitor {
    /// Render `nodes` between an opening and a closing piece of markup.
    ///
    /// The markup is written even when `nodes` is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or visiting fails.
    fn render_wrapped(&mut self, nodes: &[Node], prefix: &str, suffix: &str) -> Result<(), Self::Error>
    where
        Self::Error: From<std::io::Error>,
    {
        write!(self.writer_mut(), "{prefix}")?;
        self.visit_nodes(nodes)?;
        write!(self.writer_mut(), "{suffix}")?;
        Ok(())
    }
}

// Blanket implementation for all WritableVisitor types
impl<T: WritableVisitor> WritableVisitorExt for T {}
