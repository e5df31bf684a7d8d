//! Generate expected HTML output files for integration tests.
//!
//! Usage:
//!   `cargo run -p mdlite-converters-html --example generate_expected_fixtures`

use mdlite_converters_core::{Options, Processable};
use mdlite_converters_dev::generate_fixtures::FixtureGenerator;
use mdlite_converters_html::Processor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let processor = Processor::new(Options::default());
    FixtureGenerator::new("html", "html").generate(|doc, output| {
        processor.convert_to_writer(doc, output)?;
        Ok(())
    })
}
