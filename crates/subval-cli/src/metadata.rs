//! # Metadata Subcommand
//!
//! Checks a single metadata file against a schema definition file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use subval_schema::{validate_metadata, MetadataSchema};

/// Arguments for the metadata subcommand.
#[derive(Args, Debug)]
pub struct MetadataArgs {
    /// Path to the YAML metadata file.
    pub path: PathBuf,

    /// Schema definition (YAML with `mandatory` and `optional` maps).
    #[arg(long)]
    pub schema: PathBuf,

    /// Name of the file in messages.
    #[arg(long, default_value = "metadata")]
    pub label: String,

    /// Print the validated metadata as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the metadata subcommand.
pub fn run_metadata(args: &MetadataArgs) -> Result<u8> {
    let schema = MetadataSchema::from_file(&args.schema)
        .with_context(|| format!("failed to load schema {}", args.schema.display()))?;

    match validate_metadata(&args.path, &args.label, &schema) {
        Ok(metadata) => {
            if args.json {
                let json = serde_json::to_string_pretty(&metadata)
                    .context("metadata cannot be represented as JSON")?;
                println!("{json}");
            } else {
                println!("  ok    {} ({} entries)", args.label, metadata.len());
            }
            Ok(0)
        }
        Err(e) => {
            println!("  FAIL  {}: {e}", args.label);
            Ok(1)
        }
    }
}
