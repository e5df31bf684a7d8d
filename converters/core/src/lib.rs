//! Core traits and utilities for mdlite document converters.
//!
//! This crate provides the shared infrastructure used by the mdlite converters:
//!
//! - [`Converter`] - the tokenize → parse → render pipeline with pluggable components
//! - [`Renderer`] - trait for turning a document tree into output markup
//! - [`Processable`] - trait for converter backends driven by the CLI
//! - [`Visitor`](visitor::Visitor) - visitor pattern for document tree traversal
//! - [`Options`] - configuration for conversion
//!
//! # Example
//!
//! ```
//! use mdlite_converters_core::{GeneratorMetadata, Options};
//!
//! let options = Options::builder()
//!     .standalone(true)
//!     .generator_metadata(GeneratorMetadata::new("my-converter", "1.0.0"))
//!     .build();
//! assert!(options.standalone());
//! ```

use std::{io::Write, path::Path};

use mdlite_parser::Document;

mod converter;
mod error;
pub mod visitor;

pub use converter::{Converter, ConverterBuilder, Renderer};
pub use error::{Component, Error};

/// Converter options.
///
/// Use [`Options::builder()`] to construct an instance. This struct is marked
/// `#[non_exhaustive]` to allow adding new fields in future minor versions.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Options {
    generator_metadata: GeneratorMetadata,
    timings: bool,
    standalone: bool,
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Get the generator metadata.
    #[must_use]
    pub fn generator_metadata(&self) -> &GeneratorMetadata {
        &self.generator_metadata
    }

    /// Get whether timing information should be output.
    #[must_use]
    pub fn timings(&self) -> bool {
        self.timings
    }

    /// Get whether to output a complete, standalone document.
    ///
    /// When false, converters output the bare fragment (for HTML: no DOCTYPE, html,
    /// head or body tags).
    #[must_use]
    pub fn standalone(&self) -> bool {
        self.standalone
    }
}

/// Builder for [`Options`].
///
/// Use [`Options::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    generator_metadata: GeneratorMetadata,
    timings: bool,
    standalone: bool,
}

impl OptionsBuilder {
    /// Set the generator metadata (name and version).
    #[must_use]
    pub fn generator_metadata(mut self, meta: GeneratorMetadata) -> Self {
        self.generator_metadata = meta;
        self
    }

    /// Enable or disable timing output.
    #[must_use]
    pub fn timings(mut self, timings: bool) -> Self {
        self.timings = timings;
        self
    }

    /// Enable or disable standalone output.
    #[must_use]
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            generator_metadata: self.generator_metadata,
            timings: self.timings,
            standalone: self.standalone,
        }
    }
}

/// Extension trait for formatting [`Duration`](std::time::Duration) in human-readable form.
pub trait PrettyDuration {
    /// Returns a human-readable string representation of the duration.
    ///
    /// - Automatically selects appropriate unit (ns, µs, ms, s)
    /// - Rounds to 2 decimal places
    /// - Strips trailing zeros
    fn pretty_print(&self) -> String;

    /// Returns a detailed timing string with specified precision.
    ///
    /// # Arguments
    /// * `precision` - Number of decimal places (0-9)
    fn pretty_print_precise(&self, precision: u8) -> String;
}

impl PrettyDuration for std::time::Duration {
    fn pretty_print(&self) -> String {
        let nanos = self.as_nanos();

        // Exact below 2^53 ns, about 104 days.
        #[allow(clippy::cast_precision_loss)]
        let f_nanos = nanos as f64;
        let formatted = match nanos {
            0..=999 => return format!("{nanos}ns"),
            1_000..=999_999 => format!("{:.2}µs", f_nanos / 1_000.0),
            1_000_000..=999_999_999 => format!("{:.2}ms", f_nanos / 1_000_000.0),
            _ => format!("{:.2}s", f_nanos / 1_000_000_000.0),
        };
        strip_fraction_zeros(&formatted)
    }

    fn pretty_print_precise(&self, precision: u8) -> String {
        let precision = usize::from(precision.min(9));
        let nanos = self.as_nanos();
        #[allow(clippy::cast_precision_loss)]
        let f_nanos = nanos as f64;
        match nanos {
            0..=999 => format!("{nanos}ns"),
            1_000..=999_999 => format!("{:.precision$}µs", f_nanos / 1_000.0),
            1_000_000..=999_999_999 => format!("{:.precision$}ms", f_nanos / 1_000_000.0),
            _ => format!("{:.precision$}s", f_nanos / 1_000_000_000.0),
        }
    }
}

/// `"1.50ms"` → `"1.5ms"`, `"2.00s"` → `"2s"`.
fn strip_fraction_zeros(formatted: &str) -> String {
    let unit_start = formatted
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(formatted.len());
    let (number, unit) = formatted.split_at(unit_start);
    let number = if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    };
    format!("{number}{unit}")
}

/// Generator metadata for tracking which tool produced the output.
///
/// Standalone HTML output embeds it in a `<meta name="generator">` tag.
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct GeneratorMetadata {
    name: String,
    version: String,
}

impl GeneratorMetadata {
    /// Create new generator metadata.
    #[must_use]
    pub fn new<S: AsRef<str>>(name: S, version: S) -> Self {
        Self {
            name: name.as_ref().to_string(),
            version: version.as_ref().to_string(),
        }
    }

    /// Get the generator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the generator version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for GeneratorMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

/// Trait for converter backends driven by the CLI.
///
/// The CLI handles all parsing (stdin or files); converters only convert.
pub trait Processable {
    /// The options type for this converter.
    type Options;
    /// The error type for this converter.
    type Error;

    /// Create a new converter instance.
    fn new(options: Self::Options) -> Self;

    /// Convert a pre-parsed document.
    ///
    /// # Arguments
    ///
    /// * `doc` - The pre-parsed document
    /// * `file` - Optional source file path (used to derive the output path)
    ///   - `Some(path)` for file-based conversion
    ///   - `None` for stdin-based conversion
    ///
    /// # Errors
    ///
    /// Returns an error if conversion or writing fails.
    fn convert(&self, doc: &Document, file: Option<&Path>) -> Result<(), Self::Error>;

    /// Convert a pre-parsed document into an arbitrary writer.
    ///
    /// # Errors
    ///
    /// Returns an error if conversion or writing fails.
    fn convert_to_writer<W: Write>(&self, doc: &Document, writer: W) -> Result<(), Self::Error>;
}
