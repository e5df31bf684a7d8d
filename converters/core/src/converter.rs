use std::{
    fmt,
    io::{Read, Write},
    string::FromUtf8Error,
};

use mdlite_parser::{Document, Tokenize};
use tracing::instrument;

use crate::{Component, Error};

/// Turns a parsed [`Document`] into output markup.
pub trait Renderer {
    /// The error type for this renderer.
    type Error;

    /// Render `document` into `writer`.
    ///
    /// An empty document must render to nothing at all.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn render(&self, document: &Document, writer: &mut dyn Write) -> Result<(), Self::Error>;
}

/// The full pipeline: tokenize, parse, render.
///
/// Both the tokenizer and the renderer are pluggable. A converter can only be obtained
/// through [`Converter::builder`], which refuses to build one with a component missing,
/// so every `Converter` that exists is fully wired.
///
/// The converter holds no per-call state. Each call tokenizes and parses with its own
/// cursor, so a single converter can serve concurrent conversions.
pub struct Converter<R> {
    tokenizer: Box<dyn Tokenize + Send + Sync>,
    renderer: R,
}

impl<R> fmt::Debug for Converter<R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> Converter<R> {
    /// Create a new builder with no components configured.
    #[must_use]
    pub fn builder() -> ConverterBuilder<R> {
        ConverterBuilder::default()
    }

    /// Convert `input` and return the rendered output.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or produces invalid UTF-8.
    pub fn convert(&self, input: &str) -> Result<String, R::Error>
    where
        R::Error: From<FromUtf8Error>,
    {
        let mut buffer = Vec::new();
        self.convert_to_writer(input, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Convert `input`, writing the rendered output into `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    #[instrument(level = "trace", skip_all, fields(len = input.len()))]
    pub fn convert_to_writer(&self, input: &str, writer: &mut dyn Write) -> Result<(), R::Error> {
        let tokens = self.tokenizer.tokenize(input);
        let document = mdlite_parser::parse_tokens(&tokens);
        tracing::trace!(
            tokens = tokens.len(),
            blocks = document.nodes.len(),
            "parsed input"
        );
        self.renderer.render(&document, writer)
    }

    /// Read all of `reader` and convert it.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the input is not valid UTF-8, or rendering
    /// fails.
    pub fn convert_reader<Rd: Read>(&self, mut reader: Rd) -> Result<String, R::Error>
    where
        R::Error: From<Error> + From<FromUtf8Error>,
    {
        let mut input = String::new();
        reader.read_to_string(&mut input).map_err(Error::from)?;
        self.convert(&input)
    }
}

/// Builder for [`Converter`].
///
/// Use [`Converter::builder()`] to create a new builder.
pub struct ConverterBuilder<R> {
    tokenizer: Option<Box<dyn Tokenize + Send + Sync>>,
    renderer: Option<R>,
}

impl<R> Default for ConverterBuilder<R> {
    fn default() -> Self {
        Self {
            tokenizer: None,
            renderer: None,
        }
    }
}

impl<R> fmt::Debug for ConverterBuilder<R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterBuilder")
            .field("tokenizer", &self.tokenizer.is_some())
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl<R: Renderer> ConverterBuilder<R> {
    /// Set the tokenizer.
    #[must_use]
    pub fn tokenizer<T>(mut self, tokenizer: T) -> Self
    where
        T: Tokenize + Send + Sync + 'static,
    {
        self.tokenizer = Some(Box::new(tokenizer));
        self
    }

    /// Set the renderer.
    #[must_use]
    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Build the [`Converter`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingComponent`] if the tokenizer or the renderer was never
    /// set. The tokenizer is checked first.
    pub fn build(self) -> Result<Converter<R>, Error> {
        let tokenizer = self
            .tokenizer
            .ok_or(Error::MissingComponent(Component::Tokenizer))?;
        let renderer = self
            .renderer
            .ok_or(Error::MissingComponent(Component::Renderer))?;
        Ok(Converter {
            tokenizer,
            renderer,
        })
    }
}
