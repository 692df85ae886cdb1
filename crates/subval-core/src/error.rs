//! # Error Types — Validation Failure Taxonomy
//!
//! Defines the single error type returned by every checker. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every variant carries the human-readable `label` of the artifact being
//!   checked, and the message always includes it.
//! - Entry lists (missing or forbidden keys, unexpected directory children)
//!   are sorted and comma-joined through [`EntryList`], so messages are
//!   stable regardless of file or directory order.
//! - A failure aborts the check that raised it. There is no partial result.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::kind::ValueKind;

/// Failure raised by a submission checker.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The expected file or directory does not exist.
    #[error("{label} {artifact} not found: {}", .path.display())]
    NotFound {
        /// Label of the artifact being checked.
        label: String,
        /// Whether a file or a directory was expected.
        artifact: ArtifactKind,
        /// Path that was probed.
        path: PathBuf,
    },

    /// The document is malformed or its top level is not a mapping.
    #[error("failed to parse {label}: {reason}")]
    Parse {
        /// Label of the artifact being checked.
        label: String,
        /// Parser diagnostic or shape description.
        reason: String,
    },

    /// The document is present but blank or parses to an empty value.
    #[error("{label} file is empty")]
    EmptyFile {
        /// Label of the artifact being checked.
        label: String,
    },

    /// An open-source directory is present but has no entries.
    #[error("submission declared open source but {label} directory is empty")]
    EmptyDirectory {
        /// Label of the artifact being checked.
        label: String,
    },

    /// Required keys or directory entries are absent.
    #[error("the following {label} {scope} are missing: {entries}")]
    MissingEntries {
        /// Label of the artifact being checked.
        label: String,
        /// Whether the entries are document keys or directory children.
        scope: EntryScope,
        /// Sorted names of the absent entries.
        entries: EntryList,
    },

    /// Keys or directory entries outside the allowed set are present.
    #[error("the following {label} {scope} are forbidden: {entries}")]
    ForbiddenEntries {
        /// Label of the artifact being checked.
        label: String,
        /// Whether the entries are document keys or directory children.
        scope: EntryScope,
        /// Sorted names of the unexpected entries.
        entries: EntryList,
    },

    /// A present key has a null value.
    #[error("entry \"{key}\" is empty in {label}")]
    EmptyValue {
        /// Label of the artifact being checked.
        label: String,
        /// The key whose value is null.
        key: String,
    },

    /// A present key has a value of the wrong kind.
    #[error("entry \"{key}\" in {label} must be of type {expected}, found {found}")]
    TypeMismatch {
        /// Label of the artifact being checked.
        label: String,
        /// The offending key.
        key: String,
        /// Kind declared by the schema.
        expected: ValueKind,
        /// Kind of the value actually found.
        found: &'static str,
    },

    /// A closed-source submission ships a non-empty directory.
    #[error("submission declared closed source but {label} directory is not empty")]
    UnexpectedContent {
        /// Label of the artifact being checked.
        label: String,
    },

    /// An open-source submission does not ship the directory at all.
    #[error("submission declared open source but {label} directory is missing")]
    MissingDirectory {
        /// Label of the artifact being checked.
        label: String,
    },

    /// Reading the file or listing the directory failed for another reason.
    #[error("cannot read {label} at {}: {source}", .path.display())]
    Io {
        /// Label of the artifact being checked.
        label: String,
        /// Path whose read failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Fieldless discriminant of [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Parse,
    EmptyFile,
    EmptyDirectory,
    MissingEntries,
    ForbiddenEntries,
    EmptyValue,
    TypeMismatch,
    UnexpectedContent,
    MissingDirectory,
    Io,
}

impl ValidationError {
    /// Returns the cause of this failure without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::EmptyFile { .. } => ErrorKind::EmptyFile,
            Self::EmptyDirectory { .. } => ErrorKind::EmptyDirectory,
            Self::MissingEntries { .. } => ErrorKind::MissingEntries,
            Self::ForbiddenEntries { .. } => ErrorKind::ForbiddenEntries,
            Self::EmptyValue { .. } => ErrorKind::EmptyValue,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::UnexpectedContent { .. } => ErrorKind::UnexpectedContent,
            Self::MissingDirectory { .. } => ErrorKind::MissingDirectory,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Returns the label of the artifact that failed.
    pub fn label(&self) -> &str {
        match self {
            Self::NotFound { label, .. }
            | Self::Parse { label, .. }
            | Self::EmptyFile { label }
            | Self::EmptyDirectory { label }
            | Self::MissingEntries { label, .. }
            | Self::ForbiddenEntries { label, .. }
            | Self::EmptyValue { label, .. }
            | Self::TypeMismatch { label, .. }
            | Self::UnexpectedContent { label }
            | Self::MissingDirectory { label }
            | Self::Io { label, .. } => label,
        }
    }

    /// Returns the offending entry names for the two entry-list variants.
    pub fn entries(&self) -> Option<&EntryList> {
        match self {
            Self::MissingEntries { entries, .. } | Self::ForbiddenEntries { entries, .. } => {
                Some(entries)
            }
            _ => None,
        }
    }
}

/// What kind of filesystem artifact was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    File,
    Directory,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

/// Where an entry name comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryScope {
    /// Top-level keys of a structured document.
    Keys,
    /// Immediate children of a directory.
    Children,
}

impl fmt::Display for EntryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keys => f.write_str("entries"),
            Self::Children => f.write_str("files or directories"),
        }
    }
}

/// Sorted, deduplicated list of entry names.
///
/// Displays as the names joined with `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList(Vec<String>);

impl EntryList {
    /// Returns the names in sorted order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns true if `name` is in the list.
    pub fn contains(&self, name: &str) -> bool {
        self.0.binary_search_by(|e| e.as_str().cmp(name)).is_ok()
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no names.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for EntryList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names: Vec<String> = iter.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self(names)
    }
}

impl fmt::Display for EntryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_list_sorts_and_dedups() {
        let list: EntryList = ["zeta", "alpha", "mid", "alpha"].into_iter().collect();
        assert_eq!(list.as_slice(), ["alpha", "mid", "zeta"]);
        assert_eq!(list.to_string(), "alpha, mid, zeta");
        assert!(list.contains("mid"));
        assert!(!list.contains("beta"));
    }

    #[test]
    fn empty_entry_list_displays_nothing() {
        let list: EntryList = Vec::<String>::new().into_iter().collect();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn missing_entries_message_names_label_and_keys() {
        let err = ValidationError::MissingEntries {
            label: "metadata".to_string(),
            scope: EntryScope::Keys,
            entries: ["author", "affiliation"].into_iter().collect(),
        };
        assert_eq!(
            err.to_string(),
            "the following metadata entries are missing: affiliation, author"
        );
        assert_eq!(err.kind(), ErrorKind::MissingEntries);
        assert_eq!(err.label(), "metadata");
    }

    #[test]
    fn forbidden_children_message_uses_directory_wording() {
        let err = ValidationError::ForbiddenEntries {
            label: "2017".to_string(),
            scope: EntryScope::Children,
            entries: ["c"].into_iter().collect(),
        };
        assert_eq!(
            err.to_string(),
            "the following 2017 files or directories are forbidden: c"
        );
        assert_eq!(err.entries().map(EntryList::len), Some(1));
    }

    #[test]
    fn not_found_message_includes_path() {
        let err = ValidationError::NotFound {
            label: "metadata".to_string(),
            artifact: ArtifactKind::File,
            path: PathBuf::from("/sub/metadata.yaml"),
        };
        assert_eq!(
            err.to_string(),
            "metadata file not found: /sub/metadata.yaml"
        );
        assert!(err.entries().is_none());
    }

    #[test]
    fn type_mismatch_message_names_expected_and_found() {
        let err = ValidationError::TypeMismatch {
            label: "metadata".to_string(),
            key: "score".to_string(),
            expected: ValueKind::Number,
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "entry \"score\" in metadata must be of type number, found string"
        );
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error as _;
        let err = ValidationError::Io {
            label: "code".to_string(),
            path: PathBuf::from("code"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.source().is_some());
    }
}
