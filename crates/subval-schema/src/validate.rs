//! # Metadata Validation
//!
//! Loads a YAML metadata file and checks it against a [`MetadataSchema`].
//!
//! ## Check Order
//!
//! 1. The path must be an existing file.
//! 2. The content must parse as YAML.
//! 3. The document must not be blank or parse to an empty/falsy value.
//! 4. The top level must be a mapping with scalar keys.
//! 5. Every mandatory key must be present.
//! 6. No key outside the mandatory and optional sets may be present.
//! 7. In file order, every value must be non-null and satisfy its declared
//!    kind, if any.
//!
//! The first failing step aborts the check. Entry lists in errors are sorted.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use subval_core::kind::{describe, untagged};
use subval_core::{ArtifactKind, EntryList, EntryScope, ValidationError};

use crate::metadata::Metadata;
use crate::schema::MetadataSchema;

/// Validate the YAML metadata file at `path` against `schema`.
///
/// `label` names the file in error messages. Returns the full parsed
/// mapping, mandatory and optional keys alike.
///
/// # Errors
///
/// Returns `NotFound`, `Parse`, `EmptyFile`, `MissingEntries`,
/// `ForbiddenEntries`, `EmptyValue`, `TypeMismatch` or `Io` as described in
/// the module documentation.
pub fn validate_metadata(
    path: impl AsRef<Path>,
    label: &str,
    schema: &MetadataSchema,
) -> Result<Metadata, ValidationError> {
    let path = path.as_ref();
    tracing::debug!(label, path = %path.display(), "validating metadata file");

    if !path.is_file() {
        return Err(ValidationError::NotFound {
            label: label.to_string(),
            artifact: ArtifactKind::File,
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            ValidationError::Parse {
                label: label.to_string(),
                reason: "file is not valid UTF-8".to_string(),
            }
        } else {
            ValidationError::Io {
                label: label.to_string(),
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    validate_metadata_str(&content, label, schema)
}

/// Validate metadata already read into memory.
///
/// Runs every check of [`validate_metadata`] after the file read.
pub fn validate_metadata_str(
    content: &str,
    label: &str,
    schema: &MetadataSchema,
) -> Result<Metadata, ValidationError> {
    let metadata = parse_document(content, label)?;
    check_entries(&metadata, label, schema)?;
    tracing::debug!(label, entries = metadata.len(), "metadata is valid");
    Ok(metadata)
}

fn parse_document(content: &str, label: &str) -> Result<Metadata, ValidationError> {
    let empty = || ValidationError::EmptyFile {
        label: label.to_string(),
    };
    let parse_error = |reason: String| ValidationError::Parse {
        label: label.to_string(),
        reason,
    };

    if is_blank(content) {
        return Err(empty());
    }

    let value: Value = serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
    if is_falsy(&value) {
        return Err(empty());
    }

    let mapping = match into_untagged(value) {
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(parse_error(format!(
                "expected a mapping at the top level, found a {}",
                describe(&other)
            )))
        }
    };

    let mut entries = Mapping::with_capacity(mapping.len());
    for (key, value) in mapping {
        let name = key_name(&key).ok_or_else(|| {
            parse_error(format!("unsupported {} key at the top level", describe(&key)))
        })?;
        if entries.contains_key(name.as_str()) {
            return Err(parse_error(format!("duplicate entry \"{name}\"")));
        }
        entries.insert(Value::String(name), value);
    }

    Ok(Metadata::from_string_keyed(entries))
}

fn check_entries(
    metadata: &Metadata,
    label: &str,
    schema: &MetadataSchema,
) -> Result<(), ValidationError> {
    let missing: EntryList = schema
        .mandatory()
        .keys()
        .filter(|key| !metadata.contains_key(key))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingEntries {
            label: label.to_string(),
            scope: EntryScope::Keys,
            entries: missing,
        });
    }

    let forbidden: EntryList = metadata
        .keys()
        .filter(|key| !schema.is_allowed(key))
        .collect();
    if !forbidden.is_empty() {
        return Err(ValidationError::ForbiddenEntries {
            label: label.to_string(),
            scope: EntryScope::Keys,
            entries: forbidden,
        });
    }

    for (key, value) in metadata.iter() {
        if untagged(value).is_null() {
            return Err(ValidationError::EmptyValue {
                label: label.to_string(),
                key: key.to_string(),
            });
        }
        if let Some(expected) = schema.constraint_for(key) {
            if !expected.matches(value) {
                return Err(ValidationError::TypeMismatch {
                    label: label.to_string(),
                    key: key.to_string(),
                    expected,
                    found: describe(value),
                });
            }
        }
    }

    Ok(())
}

/// True if the text holds no YAML content: only whitespace, comments and
/// document markers.
fn is_blank(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Falsiness of a parsed document: null, `false`, zero, and empty
/// strings, sequences and mappings.
fn is_falsy(value: &Value) -> bool {
    match untagged(value) {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(_) => false,
    }
}

fn into_untagged(mut value: Value) -> Value {
    while let Value::Tagged(tagged) = value {
        value = tagged.value;
    }
    value
}

fn key_name(key: &Value) -> Option<String> {
    match untagged(key) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
