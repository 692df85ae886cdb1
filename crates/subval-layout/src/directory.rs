//! # Directory Shape
//!
//! Checks the immediate children of a directory against an allow-list.
//! Children outside the list are always rejected; with `require_all` every
//! listed name must also be present, so the directory matches the list
//! exactly.

use std::collections::BTreeSet;
use std::path::Path;

use subval_core::{ArtifactKind, EntryList, EntryScope, ValidationError, ValidationLog};

use crate::listing::DirectoryListing;

/// Validate that `directory` only contains names from `allowed_entries`.
///
/// Writes one line to `log` when the check starts. Returns the full listing
/// on success so callers can inspect its exact composition.
///
/// # Errors
///
/// - `NotFound` if `directory` is not an existing directory.
/// - `ForbiddenEntries` naming every child not in `allowed_entries`.
/// - `MissingEntries` naming every allowed name that is absent, only when
///   `require_all` is set.
/// - `Io` if the directory cannot be listed.
pub fn validate_directory<I, S>(
    directory: impl AsRef<Path>,
    label: &str,
    allowed_entries: I,
    log: &dyn ValidationLog,
    require_all: bool,
) -> Result<DirectoryListing, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let directory = directory.as_ref();
    log.info(&format!("validating {label} directory ..."));

    if !directory.is_dir() {
        return Err(ValidationError::NotFound {
            label: label.to_string(),
            artifact: ArtifactKind::Directory,
            path: directory.to_path_buf(),
        });
    }

    let allowed: BTreeSet<String> = allowed_entries
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    let listing = DirectoryListing::read(directory, label)?;

    let forbidden: EntryList = listing.iter().filter(|name| !allowed.contains(*name)).collect();
    if !forbidden.is_empty() {
        return Err(ValidationError::ForbiddenEntries {
            label: label.to_string(),
            scope: EntryScope::Children,
            entries: forbidden,
        });
    }

    if require_all {
        let missing: EntryList = allowed
            .iter()
            .filter(|name| !listing.contains(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingEntries {
                label: label.to_string(),
                scope: EntryScope::Children,
                entries: missing,
            });
        }
    }

    tracing::debug!(label, entries = listing.len(), "directory shape is valid");
    Ok(listing)
}
