//! # subval-layout — Submission Directory Checks
//!
//! Audits the directories that accompany a submission's metadata:
//!
//! - **Disclosure** (`disclosure.rs`): a code directory must be present and
//!   non-empty when the submission declares itself open source, and must be
//!   absent or empty when it declares itself closed source.
//!
//! - **Directory shape** (`directory.rs`): the immediate children of a
//!   directory must all belong to an allow-list, and optionally the whole
//!   allow-list must be present.
//!
//! - **Listing** (`listing.rs`): the non-recursive set of child names both
//!   checks work from.
//!
//! ## Crate Policy
//!
//! - Depends only on `subval-core` internally.
//! - Read-only: checks never create, modify or delete anything.
//! - Informational output goes to the caller's `ValidationLog`.

pub mod directory;
pub mod disclosure;
pub mod listing;

pub use directory::validate_directory;
pub use disclosure::{validate_code, Disclosure};
pub use listing::DirectoryListing;
