//! # subval-core — Foundational Types for Submission Validation
//!
//! This crate holds the vocabulary shared by every checker in the workspace.
//! Every other `subval-*` crate depends on `subval-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One error taxonomy.** [`ValidationError`] has one variant per failure
//!    cause. Callers branch on [`ValidationError::kind`], users read the
//!    `Display` message, which always names the artifact label.
//!
//! 2. **Type constraints are data.** [`ValueKind`] is a closed enum with an
//!    explicit [`ValueKind::matches`] predicate over YAML values.
//!
//! 3. **Logging is injected.** Checkers write informational lines to a
//!    [`ValidationLog`] passed by the caller. Nothing in the library installs
//!    a subscriber or touches global logging state.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `subval-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod log;

// Re-export primary types for ergonomic imports.
pub use error::{ArtifactKind, EntryList, EntryScope, ErrorKind, ValidationError};
pub use kind::ValueKind;
pub use log::{MemoryLog, TracingLog, ValidationLog};
