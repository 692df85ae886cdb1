//! # Directory Subcommand
//!
//! Checks the immediate children of a directory against an allow-list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use subval_core::TracingLog;
use subval_layout::validate_directory;

/// Arguments for the directory subcommand.
#[derive(Args, Debug)]
pub struct DirectoryArgs {
    /// Path to the directory.
    pub directory: PathBuf,

    /// Allowed child names, comma separated or repeated.
    #[arg(long, value_delimiter = ',')]
    pub allow: Vec<String>,

    /// Name of the directory in messages. Defaults to the path.
    #[arg(long)]
    pub label: Option<String>,

    /// Every allowed name must be present.
    #[arg(long)]
    pub require_all: bool,

    /// Print the listing as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the directory subcommand.
pub fn run_directory(args: &DirectoryArgs) -> Result<u8> {
    let label = args
        .label
        .clone()
        .unwrap_or_else(|| args.directory.display().to_string());

    match validate_directory(&args.directory, &label, &args.allow, &TracingLog, args.require_all) {
        Ok(listing) => {
            if args.json {
                let json = serde_json::to_string_pretty(&listing)
                    .context("listing cannot be represented as JSON")?;
                println!("{json}");
            } else {
                println!("  ok    {label} ({} entries)", listing.len());
                for name in listing.iter() {
                    println!("          {name}");
                }
            }
            Ok(0)
        }
        Err(e) => {
            println!("  FAIL  {label}: {e}");
            Ok(1)
        }
    }
}
