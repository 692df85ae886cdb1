//! # Submission Manifest
//!
//! A YAML file describing which checks to run on a submission and with
//! which schemas and allow-lists. Paths are relative to the submission root.
//!
//! ```yaml
//! metadata:
//!   path: metadata.yaml
//!   schema:
//!     mandatory:
//!       author: string
//!       open source: bool
//!   open_source_key: open source
//! code:
//!   path: code
//! directories:
//!   - path: .
//!     allowed: [metadata.yaml, code, "2017", "2019"]
//!   - path: "2017"
//!     allowed: [english, french, mandarin]
//!     require_all: true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use subval_core::ValueKind;
use subval_schema::MetadataSchema;

/// Error loading a submission manifest.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The manifest could not be read.
    #[error("cannot read manifest '{}': {source}", .path.display())]
    Io {
        /// Path to the manifest.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid YAML or has unknown fields.
    #[error("invalid manifest '{}': {reason}", .path.display())]
    Invalid {
        /// Path to the manifest.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// The manifest parses but its sections are inconsistent.
    #[error("inconsistent manifest '{}': {reason}", .path.display())]
    Inconsistent {
        /// Path to the manifest.
        path: PathBuf,
        /// What is inconsistent.
        reason: String,
    },
}

/// Checks to run against one submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmissionManifest {
    /// Metadata file check.
    #[serde(default)]
    pub metadata: Option<MetadataSection>,
    /// Code disclosure check.
    #[serde(default)]
    pub code: Option<CodeSection>,
    /// Directory shape checks, run in order.
    #[serde(default)]
    pub directories: Vec<DirectorySection>,
}

/// Metadata file and its schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataSection {
    pub path: PathBuf,
    #[serde(default = "default_metadata_label")]
    pub label: String,
    pub schema: MetadataSchema,
    /// Boolean metadata entry holding the open-source declaration.
    #[serde(default)]
    pub open_source_key: Option<String>,
}

/// Code directory subject to the disclosure policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeSection {
    pub path: PathBuf,
    #[serde(default = "default_code_label")]
    pub label: String,
    /// Fixed declaration. When absent the metadata's `open_source_key` is used.
    #[serde(default)]
    pub open_source: Option<bool>,
}

/// Directory whose immediate children are checked against an allow-list.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorySection {
    pub path: PathBuf,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub allowed: Vec<String>,
    #[serde(default)]
    pub require_all: bool,
}

impl DirectorySection {
    /// Label used in messages: the explicit label, else the path.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

fn default_metadata_label() -> String {
    "metadata".to_string()
}

fn default_code_label() -> String {
    "code".to_string()
}

impl SubmissionManifest {
    /// Parse a manifest from YAML text. `path` is used in error messages.
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        manifest.check_consistency(path)?;
        Ok(manifest)
    }

    /// Load a manifest from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content, path)
    }

    fn check_consistency(&self, path: &Path) -> Result<(), ConfigError> {
        let inconsistent = |reason: &str| ConfigError::Inconsistent {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        if self.metadata.is_none() && self.code.is_none() && self.directories.is_empty() {
            return Err(inconsistent("no checks declared"));
        }

        if let Some(code) = &self.code {
            if code.open_source.is_none() {
                let key = self
                    .metadata
                    .as_ref()
                    .and_then(|m| m.open_source_key.as_deref())
                    .ok_or_else(|| {
                        inconsistent(
                            "code.open_source is unset and metadata.open_source_key is not declared",
                        )
                    })?;
                let declared = self
                    .metadata
                    .as_ref()
                    .is_some_and(|m| m.schema.mandatory().contains(key));
                if !declared {
                    return Err(inconsistent(&format!(
                        "open_source_key \"{key}\" must be a mandatory metadata entry"
                    )));
                }
                let constraint = self
                    .metadata
                    .as_ref()
                    .and_then(|m| m.schema.constraint_for(key));
                if constraint != Some(ValueKind::Bool) {
                    return Err(inconsistent(&format!(
                        "open_source_key \"{key}\" must be constrained to bool"
                    )));
                }
            }
        }

        Ok(())
    }
}
