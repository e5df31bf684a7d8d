//! HTML converter for mdlite documents.
//!
//! | Node | Output |
//! |---|---|
//! | document | no wrapping tag, blocks back to back |
//! | header | `<h1>…</h1>` |
//! | paragraph | `<p>…</p>` |
//! | bold | `<strong>…</strong>` |
//! | italic | `<em>…</em>` |
//! | text | escaped, no tag |
//!
//! ```
//! assert_eq!(
//!     mdlite_converters_html::convert("# Header with __bold__ and _italic_")?,
//!     "<h1>Header with <strong>bold</strong> and <em>italic</em></h1>"
//! );
//! # Ok::<(), mdlite_converters_html::Error>(())
//! ```

use std::{
    io::{BufWriter, Write},
    path::Path,
    time::{Duration, Instant},
};

use mdlite_converters_core::{
    Converter, Options, PrettyDuration, Processable, Renderer, visitor::Visitor,
};
use mdlite_parser::{Document, Tokenizer};

mod block;
mod document;
mod error;
mod html_visitor;
mod inlines;

pub use error::Error;
pub use html_visitor::HtmlVisitor;
pub use inlines::escape_html;

/// Convert `input` to an HTML fragment with the default tokenizer and renderer.
///
/// # Errors
///
/// Conversion of in-memory text only fails if the pipeline cannot be wired up, which
/// the default components never trigger.
#[tracing::instrument(level = "trace", skip_all)]
pub fn convert(input: &str) -> Result<String, Error> {
    Converter::builder()
        .tokenizer(Tokenizer)
        .renderer(HtmlRenderer::default())
        .build()?
        .convert(input)
}

/// [`Renderer`] producing HTML.
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer {
    options: Options,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }
}

impl Renderer for HtmlRenderer {
    type Error = Error;

    fn render(&self, document: &Document, writer: &mut dyn Write) -> Result<(), Error> {
        HtmlVisitor::new(writer, &self.options).visit_document(document)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Processor {
    options: Options,
}

impl Processor {
    /// Read, parse and convert the file at `path`, writing `<path>.html` next to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the output path equals the input
    /// path, or writing the output fails.
    pub fn convert_file(&self, path: &Path) -> Result<(), Error> {
        if self.options.timings() {
            println!("Input file: {}", path.display());
        }

        let now = Instant::now();
        let doc = mdlite_parser::parse_file(path)?;
        let parse_elapsed = now.elapsed();
        tracing::debug!(time = parse_elapsed.pretty_print_precise(3), source = ?path, "time to read and parse source");

        let now = Instant::now();
        self.convert(&doc, Some(path))?;
        let convert_elapsed = now.elapsed();
        tracing::debug!(time = convert_elapsed.pretty_print_precise(3), source = ?path, "time to convert document");

        if self.options.timings() {
            print_timings(parse_elapsed, convert_elapsed);
        }
        Ok(())
    }

    fn to_file(&self, doc: &Document, path: &Path) -> Result<(), Error> {
        let html_path = path.with_extension("html");
        if html_path == path {
            return Err(Error::OutputPathSameAsInput(html_path));
        }
        tracing::debug!(source = ?path, destination = ?html_path, "processing file");

        let file = std::fs::File::create(&html_path)?;
        self.convert_to_writer(doc, BufWriter::new(file))?;
        println!("Generated HTML file: {}", html_path.display());
        Ok(())
    }
}

fn print_timings(parse: Duration, convert: Duration) {
    println!("  Time to read and parse source: {}", parse.pretty_print());
    println!("  Time to convert document: {}", convert.pretty_print());
    println!(
        "  Total time (read, parse and convert): {}",
        (parse + convert).pretty_print()
    );
}

impl Processable for Processor {
    type Options = Options;
    type Error = Error;

    fn new(options: Options) -> Self {
        Self { options }
    }

    fn convert(&self, doc: &Document, file: Option<&Path>) -> Result<(), Self::Error> {
        match file {
            Some(path) => self.to_file(doc, path),
            None => {
                let stdout = std::io::stdout();
                self.convert_to_writer(doc, BufWriter::new(stdout.lock()))
            }
        }
    }

    fn convert_to_writer<W: Write>(&self, doc: &Document, writer: W) -> Result<(), Self::Error> {
        let mut visitor = HtmlVisitor::new(writer, &self.options);
        visitor.visit_document(doc)?;
        visitor.into_writer().flush()?;
        Ok(())
    }
}
