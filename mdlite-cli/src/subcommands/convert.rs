use std::{
    io::{self, BufReader},
    path::PathBuf,
};

use mdlite_converters_core::{GeneratorMetadata, Options, Processable};
use mdlite_converters_html::{Error as HtmlError, Processor};
use rayon::prelude::*;

use crate::error;

/// Convert documents to HTML
#[derive(clap::Args, Debug)]
pub struct Args {
    /// List of files to convert
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    pub files: Vec<PathBuf>,

    /// Read the document from stdin and write HTML to stdout
    #[arg(long)]
    pub stdin: bool,

    /// Wrap the output in a complete HTML page
    #[arg(short, long)]
    pub standalone: bool,

    /// Print the time spent parsing and converting each file
    #[arg(long)]
    pub timings: bool,
}

pub fn run(args: &Args) -> miette::Result<()> {
    let options = Options::builder()
        .generator_metadata(GeneratorMetadata::new(
            env!("CARGO_BIN_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))
        .standalone(args.standalone)
        .timings(args.timings)
        .build();
    let processor = Processor::new(options);

    if args.stdin {
        let stdin = io::stdin();
        let doc = mdlite_parser::parse_from_reader(BufReader::new(stdin.lock()))
            .map_err(|e| error::display(&e))?;
        return processor.convert(&doc, None).map_err(|e| error::display(&e));
    }

    tracing::debug!(files = args.files.len(), "converting files");
    let errors: Vec<(PathBuf, HtmlError)> = args
        .files
        .par_iter()
        .filter_map(|file| {
            processor
                .convert_file(file)
                .err()
                .map(|e| (file.clone(), e))
        })
        .collect();

    if !errors.is_empty() {
        eprintln!("\nFailed to process {} file(s):", errors.len());
        for (idx, (file, error)) in errors.iter().enumerate() {
            eprintln!("\n[{}] {}", idx + 1, file.display());
            eprintln!("{:?}", error::display(error));
        }
        std::process::exit(1);
    }
    Ok(())
}
