use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod error;
mod subcommands;

/// Convert and inspect mdlite documents
#[derive(Parser, Debug)]
#[command(name = "mdlite", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert documents to HTML
    Convert(subcommands::convert::Args),

    /// Print the token stream or the document tree of a file
    Inspect(subcommands::inspect::Args),
}

fn main() -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match &args.command {
        Commands::Convert(args) => subcommands::convert::run(args),
        Commands::Inspect(args) => subcommands::inspect::run(args),
    }
}
