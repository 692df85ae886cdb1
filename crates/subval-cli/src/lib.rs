//! # subval-cli — Submission Validation Command-Line Interface
//!
//! Wraps the checkers of `subval-schema` and `subval-layout` in a clap-based
//! CLI and composes them into whole-submission runs.
//!
//! ## Subcommands
//!
//! - `metadata` — check one metadata file against a schema definition
//! - `code` — check a code directory against a disclosure declaration
//! - `directory` — check a directory's children against an allow-list
//! - `submission` — run every check declared in a manifest
//!
//! ```bash
//! subval metadata metadata.yaml --schema schema.yaml
//! subval code code/ --open-source
//! subval directory 2017/ --allow english,french,mandarin --require-all
//! subval submission ./my-submission --manifest zr2020.yaml --keep-going
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from checking: handlers delegate to the
//!   library crates and only format their results.
//! - Handlers return the process exit code: 0 when every check passes, 1
//!   when a check fails. Configuration problems are `Err` values.

pub mod code;
pub mod directory;
pub mod manifest;
pub mod metadata;
pub mod submission;

pub use manifest::{ConfigError, SubmissionManifest};
pub use submission::{check_submission, SubmissionReport};
