#![deny(missing_docs)]

//! # Apiwrap CLI
//!
//! Command Line Interface for the Flask wrapper generator.
//!
//! Supported Commands:
//! - `generate`: Renders a Flask application from an endpoint manifest.

use apiwrap_core::AppResult;
use clap::{Parser, Subcommand};

mod generate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Flask API wrapper generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates Flask source from a YAML/JSON endpoint manifest.
    Generate(generate::GenerateArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            generate::execute(args)?;
        }
    }

    Ok(())
}
