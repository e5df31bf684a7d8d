//! Tokenizer and parser for a small markup dialect: `"# "` headers, `__bold__`,
//! `_italic_` and backslash escapes.
//!
//! Parsing happens in two passes. The [`Tokenizer`] turns every line into a flat list of
//! [`Token`]s, resolving which underscores form emphasis and which stay literal. The
//! [`Parser`] then builds a [`Document`] tree out of that token stream.
//!
//! Neither pass can fail on markup: malformed emphasis is kept as text.
//!
//! ```
//! use mdlite_parser::{Node, parse};
//!
//! let document = parse("# Title\n\nSome __bold__ text");
//! assert_eq!(document.nodes.len(), 2);
//! assert!(matches!(document.nodes[0], Node::Header(_)));
//! ```
use std::{io::Read, path::Path};

use tracing::instrument;

mod error;
mod model;
mod parser;
mod tokenizer;

#[cfg(test)]
mod proptests;

pub use error::Error;
pub use model::{Bold, Document, Header, Italic, Node, Paragraph, Text, Token};
pub use parser::Parser;
pub use tokenizer::{Tokenize, Tokenizer, split_lines};

/// Tokenize `input` with the default [`Tokenizer`].
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer.tokenize(input)
}

/// Build a [`Document`] out of an already tokenized stream.
#[must_use]
pub fn parse_tokens(tokens: &[Token]) -> Document {
    Parser::new(tokens).parse()
}

/// Parse `input` into a [`Document`].
#[must_use]
#[instrument(skip(input), fields(len = input.len()))]
pub fn parse(input: &str) -> Document {
    let tokens = tokenize(input);
    tracing::trace!(tokens = tokens.len(), "tokenized input");
    parse_tokens(&tokens)
}

/// Parse the contents of a reader.
///
/// # Errors
///
/// Returns an error if the reader fails or yields invalid UTF-8.
#[instrument(skip(reader))]
pub fn parse_from_reader<R: Read>(mut reader: R) -> Result<Document, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(parse(&input))
}

/// Parse the file at `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
#[instrument(skip(file_path))]
pub fn parse_file<P: AsRef<Path>>(file_path: P) -> Result<Document, Error> {
    let input = std::fs::read_to_string(file_path.as_ref())?;
    Ok(parse(&input))
}
