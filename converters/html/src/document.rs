//! The standalone HTML5 wrapper around the rendered fragment.

use std::io::Write;

use mdlite_converters_core::Options;
use mdlite_parser::{Document, Node};

use crate::{Error, escape_html};

/// Write everything up to and including `<body>`.
///
/// The first header of the document, flattened to plain text, becomes the `<title>`.
pub(crate) fn render_head<W: Write + ?Sized>(
    w: &mut W,
    doc: &Document,
    options: &Options,
) -> Result<(), Error> {
    writeln!(w, "<!DOCTYPE html>")?;
    writeln!(w, "<html>")?;
    writeln!(w, "<head>")?;
    writeln!(w, "<meta charset=\"UTF-8\">")?;
    let generator = options.generator_metadata();
    if !generator.name().is_empty() {
        writeln!(
            w,
            "<meta name=\"generator\" content=\"{}\">",
            escape_html(&generator.to_string())
        )?;
    }
    let first_header = doc.nodes.iter().find_map(|node| {
        if let Node::Header(header) = node {
            Some(header)
        } else {
            None
        }
    });
    if let Some(header) = first_header {
        let mut title = String::new();
        flatten_text(&header.content, &mut title);
        writeln!(w, "<title>{}</title>", escape_html(&title))?;
    }
    writeln!(w, "</head>")?;
    writeln!(w, "<body>")?;
    Ok(())
}

pub(crate) fn render_foot<W: Write + ?Sized>(w: &mut W) -> Result<(), Error> {
    writeln!(w)?;
    writeln!(w, "</body>")?;
    writeln!(w, "</html>")?;
    Ok(())
}

fn flatten_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node.value() {
            Some(text) => out.push_str(text),
            None => flatten_text(node.children(), out),
        }
    }
}
