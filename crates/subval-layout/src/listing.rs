//! # Directory Listing
//!
//! Immediate children of a directory, as a set of names. Listings are never
//! recursive. Names that are not valid UTF-8 are converted lossily.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use subval_core::ValidationError;

/// Set of immediate child names of a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirectoryListing {
    names: BTreeSet<String>,
}

impl DirectoryListing {
    /// List the immediate children of `directory`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Io` if the directory cannot be read.
    pub fn read(directory: &Path, label: &str) -> Result<Self, ValidationError> {
        let io_error = |source| ValidationError::Io {
            label: label.to_string(),
            path: directory.to_path_buf(),
            source,
        };

        let mut names = BTreeSet::new();
        for entry in std::fs::read_dir(directory).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(Self { names })
    }

    /// Returns true if `name` is a child.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterates over the child names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the directory has no children.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consumes self and returns the set of names.
    pub fn into_inner(self) -> BTreeSet<String> {
        self.names
    }
}

impl<S: Into<String>> FromIterator<S> for DirectoryListing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for DirectoryListing {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

/// Returns true if `directory` has at least one child.
pub(crate) fn has_children(directory: &Path, label: &str) -> Result<bool, ValidationError> {
    let io_error = |source| ValidationError::Io {
        label: label.to_string(),
        path: directory.to_path_buf(),
        source,
    };
    let mut entries = std::fs::read_dir(directory).map_err(io_error)?;
    let first = entries.next().transpose().map_err(io_error)?;
    Ok(first.is_some())
}
