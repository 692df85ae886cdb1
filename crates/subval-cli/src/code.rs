//! # Code Subcommand
//!
//! Checks a code directory against an open-source or closed-source
//! declaration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use subval_core::TracingLog;
use subval_layout::{validate_code, Disclosure};

/// Arguments for the code subcommand.
#[derive(Args, Debug)]
pub struct CodeArgs {
    /// Path to the code directory.
    pub directory: PathBuf,

    /// Name of the directory in messages.
    #[arg(long, default_value = "code")]
    pub label: String,

    /// The submission declares itself open source.
    #[arg(long)]
    pub open_source: bool,
}

/// Execute the code subcommand.
pub fn run_code(args: &CodeArgs) -> Result<u8> {
    let disclosure = Disclosure::from(args.open_source);
    match validate_code(&args.directory, &args.label, disclosure, &TracingLog) {
        Ok(()) => {
            println!("  ok    {} (declared {disclosure})", args.label);
            Ok(0)
        }
        Err(e) => {
            println!("  FAIL  {}: {e}", args.label);
            Ok(1)
        }
    }
}
