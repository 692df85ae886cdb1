//! # Submission Subcommand
//!
//! Runs every check declared in a [`SubmissionManifest`] against one
//! submission directory, in a fixed order:
//!
//! 1. the metadata file, whose open-source entry feeds step 2;
//! 2. the code directory disclosure check;
//! 3. each directory shape check, in manifest order.
//!
//! By default the run stops at the first failure. With `--keep-going` every
//! check runs and every failure is reported; a code check whose declaration
//! could not be read from the metadata is reported as skipped.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use subval_core::{TracingLog, ValidationError, ValidationLog};
use subval_layout::{validate_code, validate_directory, Disclosure};
use subval_schema::validate_metadata;

use crate::manifest::SubmissionManifest;

/// Arguments for the submission subcommand.
#[derive(Args, Debug)]
pub struct SubmissionArgs {
    /// Root directory of the submission.
    pub root: PathBuf,

    /// Manifest declaring the checks to run.
    #[arg(long)]
    pub manifest: PathBuf,

    /// Run every check even after a failure.
    #[arg(long)]
    pub keep_going: bool,
}

/// Result of one check.
#[derive(Debug)]
pub enum Outcome {
    Passed(String),
    Failed(ValidationError),
    Skipped(String),
}

/// Outcome of the check on one submission component.
#[derive(Debug)]
pub struct CheckOutcome {
    pub component: String,
    pub outcome: Outcome,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Passed(detail) => write!(f, "  ok    {} ({detail})", self.component),
            Outcome::Failed(err) => write!(f, "  FAIL  {}: {err}", self.component),
            Outcome::Skipped(reason) => write!(f, "  skip  {}: {reason}", self.component),
        }
    }
}

/// Outcomes of a submission run, in execution order.
#[derive(Debug, Default)]
pub struct SubmissionReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SubmissionReport {
    fn push(&mut self, component: &str, outcome: Outcome) -> bool {
        let failed = !matches!(outcome, Outcome::Passed(_));
        self.outcomes.push(CheckOutcome {
            component: component.to_string(),
            outcome,
        });
        failed
    }

    /// Returns true if every check passed.
    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.outcome, Outcome::Passed(_)))
    }

    /// Returns the number of checks that did not pass.
    pub fn failure_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o.outcome, Outcome::Passed(_)))
            .count()
    }
}

/// Run the manifest's checks against the submission at `root`.
pub fn check_submission(
    manifest: &SubmissionManifest,
    root: &Path,
    keep_going: bool,
    log: &dyn ValidationLog,
) -> SubmissionReport {
    let mut report = SubmissionReport::default();
    let mut declared: Option<Disclosure> = None;

    if let Some(section) = &manifest.metadata {
        let outcome = match validate_metadata(root.join(&section.path), &section.label, &section.schema) {
            Ok(metadata) => {
                if let Some(key) = &section.open_source_key {
                    declared = metadata.get_bool(key).map(Disclosure::from);
                }
                Outcome::Passed(format!("{} entries", metadata.len()))
            }
            Err(e) => Outcome::Failed(e),
        };
        if report.push(&section.label, outcome) && !keep_going {
            return report;
        }
    }

    if let Some(section) = &manifest.code {
        let outcome = match section.open_source.map(Disclosure::from).or(declared) {
            Some(disclosure) => {
                match validate_code(root.join(&section.path), &section.label, disclosure, log) {
                    Ok(()) => Outcome::Passed(format!("declared {disclosure}")),
                    Err(e) => Outcome::Failed(e),
                }
            }
            None => Outcome::Skipped("open-source declaration unavailable".to_string()),
        };
        if report.push(&section.label, outcome) && !keep_going {
            return report;
        }
    }

    for section in &manifest.directories {
        let label = section.display_label();
        let outcome = match validate_directory(
            root.join(&section.path),
            &label,
            &section.allowed,
            log,
            section.require_all,
        ) {
            Ok(listing) => Outcome::Passed(format!("{} entries", listing.len())),
            Err(e) => Outcome::Failed(e),
        };
        if report.push(&label, outcome) && !keep_going {
            return report;
        }
    }

    report
}

/// Execute the submission subcommand.
pub fn run_submission(args: &SubmissionArgs) -> Result<u8> {
    let manifest = SubmissionManifest::from_file(&args.manifest)
        .with_context(|| format!("failed to load manifest {}", args.manifest.display()))?;

    if !args.root.is_dir() {
        anyhow::bail!("submission root is not a directory: {}", args.root.display());
    }

    tracing::debug!(root = %args.root.display(), "validating submission");
    let report = check_submission(&manifest, &args.root, args.keep_going, &TracingLog);

    println!("Submission: {}", args.root.display());
    for outcome in &report.outcomes {
        println!("{outcome}");
    }
    println!();

    if report.is_success() {
        println!("All {} checks passed.", report.outcomes.len());
        Ok(0)
    } else {
        println!(
            "{} of {} checks did not pass.",
            report.failure_count(),
            report.outcomes.len()
        );
        Ok(1)
    }
}
