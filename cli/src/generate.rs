#![deny(missing_docs)]

//! # Generate Command
//!
//! Renders a Flask application from an endpoint manifest.

use std::fs;
use std::path::PathBuf;

use apiwrap_core::{parse_manifest, AppError, AppResult};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the endpoint manifest (YAML or JSON).
    #[clap(long, default_value = "api.yaml")]
    pub manifest_path: PathBuf,

    /// Output path for the generated Python file. When omitted the
    /// source is printed to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

/// Executes the generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    if !args.manifest_path.exists() {
        return Err(AppError::General(format!(
            "Manifest file not found: {:?}",
            args.manifest_path
        )));
    }

    // 1. Read Manifest
    let content = fs::read_to_string(&args.manifest_path)
        .map_err(|e| AppError::General(format!("Failed to read manifest: {}", e)))?;

    // 2. Parse Manifest
    let manifest = parse_manifest(&content)?;

    // 3. Build Code
    let builder = manifest.to_builder()?;

    // 4. Write File (stdout when no output path was given)
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::General(format!("Failed to create output dir: {}", e))
                })?;
            }
            fs::write(path, builder.code())
                .map_err(|e| AppError::General(format!("Failed to write output file: {}", e)))?;
            println!("Generated Flask app '{}' at {:?}", builder.name(), path);
        }
        None => {
            println!("{}", builder.code());
        }
    }

    Ok(())
}
