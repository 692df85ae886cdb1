//! # subval CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and dispatches to
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use subval_cli::code::{run_code, CodeArgs};
use subval_cli::directory::{run_directory, DirectoryArgs};
use subval_cli::metadata::{run_metadata, MetadataArgs};
use subval_cli::submission::{run_submission, SubmissionArgs};

/// Submission validator for benchmark challenge packages.
///
/// Checks metadata files against schemas, code directories against
/// open/closed-source declarations, and result directories against
/// allow-lists.
#[derive(Parser, Debug)]
#[command(name = "subval", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a metadata file against a schema.
    Metadata(MetadataArgs),

    /// Check a code directory against the open-source declaration.
    Code(CodeArgs),

    /// Check a directory's immediate children against an allow-list.
    Directory(DirectoryArgs),

    /// Run every check declared in a submission manifest.
    Submission(SubmissionArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("subval v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Metadata(args) => run_metadata(&args),
        Commands::Code(args) => run_code(&args),
        Commands::Directory(args) => run_directory(&args),
        Commands::Submission(args) => run_submission(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_metadata() {
        let cli = Cli::try_parse_from([
            "subval",
            "metadata",
            "metadata.yaml",
            "--schema",
            "schema.yaml",
        ])
        .unwrap();
        if let Commands::Metadata(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("metadata.yaml"));
            assert_eq!(args.schema, PathBuf::from("schema.yaml"));
            assert_eq!(args.label, "metadata");
            assert!(!args.json);
        } else {
            panic!("expected metadata subcommand");
        }
    }

    #[test]
    fn cli_parse_metadata_requires_schema() {
        assert!(Cli::try_parse_from(["subval", "metadata", "metadata.yaml"]).is_err());
    }

    #[test]
    fn cli_parse_code_defaults_to_closed_source() {
        let cli = Cli::try_parse_from(["subval", "code", "code"]).unwrap();
        if let Commands::Code(args) = cli.command {
            assert!(!args.open_source);
            assert_eq!(args.label, "code");
        } else {
            panic!("expected code subcommand");
        }
    }

    #[test]
    fn cli_parse_code_open_source() {
        let cli = Cli::try_parse_from(["subval", "code", "src", "--open-source", "--label", "sources"])
            .unwrap();
        if let Commands::Code(args) = cli.command {
            assert!(args.open_source);
            assert_eq!(args.label, "sources");
        } else {
            panic!("expected code subcommand");
        }
    }

    #[test]
    fn cli_parse_directory_allow_list() {
        let cli = Cli::try_parse_from([
            "subval",
            "directory",
            "2017",
            "--allow",
            "english,french",
            "--allow",
            "mandarin",
            "--require-all",
        ])
        .unwrap();
        if let Commands::Directory(args) = cli.command {
            assert_eq!(args.allow, vec!["english", "french", "mandarin"]);
            assert!(args.require_all);
            assert!(args.label.is_none());
        } else {
            panic!("expected directory subcommand");
        }
    }

    #[test]
    fn cli_parse_submission() {
        let cli = Cli::try_parse_from([
            "subval",
            "submission",
            "sub",
            "--manifest",
            "zr.yaml",
            "--keep-going",
        ])
        .unwrap();
        if let Commands::Submission(args) = cli.command {
            assert_eq!(args.root, PathBuf::from("sub"));
            assert_eq!(args.manifest, PathBuf::from("zr.yaml"));
            assert!(args.keep_going);
        } else {
            panic!("expected submission subcommand");
        }
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["subval", "code", "c"]).unwrap();
        assert_eq!(cli0.verbose, 0);
        let cli2 = Cli::try_parse_from(["subval", "-vv", "code", "c"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["subval", "-q", "code", "c"]).unwrap().quiet);
        assert!(Cli::try_parse_from(["subval", "-q", "-v", "code", "c"]).is_err());
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["subval"]).is_err());
    }
}
