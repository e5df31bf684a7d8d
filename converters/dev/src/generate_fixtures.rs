//! Shared fixture generation utilities for converter integration tests.
//!
//! # Example
//!
//! ```ignore
//! use mdlite_converters_dev::generate_fixtures::FixtureGenerator;
//!
//! FixtureGenerator::new("html", "html")
//!     .generate(|doc, output| {
//!         processor.convert_to_writer(doc, output)?;
//!         Ok(())
//!     })?;
//! ```

use std::{error::Error, fs, path::Path, path::PathBuf};

use crossterm::style::{PrintStyledContent, Stylize};
use mdlite_parser::Document;

const SOURCE_EXTENSION: &str = "md";

/// Builder for generating expected fixture output files.
///
/// Handles directory scanning, parsing, error reporting, and file writing. Each
/// converter provides a closure to handle the actual conversion.
pub struct FixtureGenerator {
    converter_name: String,
    output_extension: String,
}

impl FixtureGenerator {
    /// Create a new fixture generator for a converter.
    ///
    /// # Arguments
    ///
    /// * `converter_name` - Directory of the converter under `converters/` (e.g., "html")
    /// * `output_extension` - File extension for output files (e.g., "html")
    #[must_use]
    pub fn new(converter_name: &str, output_extension: &str) -> Self {
        Self {
            converter_name: converter_name.to_string(),
            output_extension: output_extension.to_string(),
        }
    }

    /// Generate fixture outputs using the provided conversion function.
    ///
    /// Scans `tests/fixtures/source/` for `.md` files and writes expected outputs to
    /// `tests/fixtures/expected/`. Paths are relative to the workspace root.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file I/O fails.
    pub fn generate<F>(&self, convert_fn: F) -> Result<(), Box<dyn Error>>
    where
        F: Fn(&Document, &mut Vec<u8>) -> Result<(), Box<dyn Error>>,
    {
        let fixtures = PathBuf::from("converters")
            .join(&self.converter_name)
            .join("tests/fixtures");

        self.generate_dir(
            &fixtures.join("source"),
            &fixtures.join("expected"),
            &convert_fn,
        )
    }

    fn generate_dir<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        convert_fn: &F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: Fn(&Document, &mut Vec<u8>) -> Result<(), Box<dyn Error>>,
    {
        fs::create_dir_all(output_dir)?;

        println!(
            "Generating expected {} outputs...\n",
            self.converter_name.to_uppercase()
        );

        let mut success_count = 0;
        let mut error_count = 0;

        let mut inputs: Vec<PathBuf> = input_dir
            .read_dir()?
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION))
            .collect();
        inputs.sort();

        for input_path in inputs {
            let Some(output_path) = input_path
                .file_stem()
                .map(|name| output_dir.join(name).with_extension(&self.output_extension))
            else {
                eprintln!(
                    "{} Skipping {}: unable to determine output file name",
                    PrintStyledContent("?".yellow()),
                    input_path.display()
                );
                continue;
            };

            let doc = match mdlite_parser::parse_file(&input_path) {
                Ok(doc) => doc,
                Err(e) => {
                    println!(
                        "{} Error reading {}: {e}",
                        PrintStyledContent("❌".red()),
                        input_path.display()
                    );
                    error_count += 1;
                    continue;
                }
            };

            let mut output = Vec::new();
            if let Err(e) = convert_fn(&doc, &mut output) {
                println!(
                    "{} Error converting {} to {}: {e}",
                    PrintStyledContent("❌".red()),
                    input_path.display(),
                    output_path.display()
                );
                error_count += 1;
                continue;
            }

            fs::write(&output_path, &output)?;
            success_count += 1;

            println!(
                "{} Generated {} ({} bytes)",
                PrintStyledContent("✓".green()),
                output_path.display(),
                output.len()
            );
        }

        println!();
        if error_count > 0 {
            println!(
                "⚠️  Completed with {error_count} error(s). {success_count} file(s) generated."
            );
        } else {
            println!(
                "✨ Done! {success_count} file(s) generated in {}",
                output_dir.display()
            );
        }
        println!("   Manually verify each file before using in tests.");

        Ok(())
    }
}
