//! # Disclosure Policy
//!
//! A submission declares whether its code is open source. The declaration
//! constrains the code directory:
//!
//! | Declaration   | Directory absent    | Directory empty   | Directory non-empty     |
//! |---------------|---------------------|-------------------|-------------------------|
//! | closed source | ok                  | ok                | `UnexpectedContent`     |
//! | open source   | `MissingDirectory`  | `EmptyDirectory`  | ok, flagged for review  |
//!
//! An open-source directory is never inspected automatically: the check logs
//! one line saying it will be reviewed by hand.

use std::fmt;
use std::path::Path;

use subval_core::{ValidationError, ValidationLog};

use crate::listing::has_children;

/// Whether a submission declares its code open source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    OpenSource,
    ClosedSource,
}

impl Disclosure {
    /// Returns true for [`Disclosure::OpenSource`].
    pub fn is_open_source(self) -> bool {
        matches!(self, Self::OpenSource)
    }
}

impl From<bool> for Disclosure {
    fn from(is_open_source: bool) -> Self {
        if is_open_source {
            Self::OpenSource
        } else {
            Self::ClosedSource
        }
    }
}

impl fmt::Display for Disclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenSource => f.write_str("open source"),
            Self::ClosedSource => f.write_str("closed source"),
        }
    }
}

/// Check a code directory against the submission's disclosure declaration.
///
/// `label` names the directory in messages. On the open-source success path
/// exactly one line is written to `log`; nothing is logged otherwise.
///
/// # Errors
///
/// - `UnexpectedContent` if closed source and the directory has entries.
/// - `MissingDirectory` if open source and the directory does not exist.
/// - `EmptyDirectory` if open source and the directory has no entries.
/// - `Io` if the directory exists but cannot be listed.
pub fn validate_code(
    directory: impl AsRef<Path>,
    label: &str,
    disclosure: Disclosure,
    log: &dyn ValidationLog,
) -> Result<(), ValidationError> {
    let directory = directory.as_ref();
    tracing::debug!(label, path = %directory.display(), %disclosure, "checking code disclosure");

    match disclosure {
        Disclosure::ClosedSource => {
            if directory.is_dir() && has_children(directory, label)? {
                return Err(ValidationError::UnexpectedContent {
                    label: label.to_string(),
                });
            }
        }
        Disclosure::OpenSource => {
            if !directory.is_dir() {
                return Err(ValidationError::MissingDirectory {
                    label: label.to_string(),
                });
            }
            if !has_children(directory, label)? {
                return Err(ValidationError::EmptyDirectory {
                    label: label.to_string(),
                });
            }
            log.info(&format!(
                "found a non-empty \"{label}\" directory, it will be manually \
                 inspected to confirm the submission is open source"
            ));
        }
    }

    Ok(())
}
