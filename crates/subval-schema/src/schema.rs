//! # Metadata Schemas
//!
//! A [`Schema`] is a flat map from entry name to an optional [`ValueKind`].
//! A [`MetadataSchema`] pairs the mandatory entries with the optional ones.
//!
//! Schemas are plain data. They can be built in code with the builder
//! methods or loaded from a YAML file of the form:
//!
//! ```yaml
//! mandatory:
//!   author: string
//!   open source: bool
//!   notes: ~          # present, any kind
//! optional:
//!   gpu budget: number
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use subval_core::ValueKind;

/// Error loading a schema definition.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("cannot read schema '{}': {source}", .path.display())]
    Io {
        /// Path to the schema file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not a valid schema definition.
    #[error("invalid schema '{}': {reason}", .path.display())]
    Invalid {
        /// Path to the schema file.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Flat map from entry name to an optional type constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: BTreeMap<String, Option<ValueKind>>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry whose value must be of `kind`.
    pub fn entry(mut self, key: impl Into<String>, kind: ValueKind) -> Self {
        self.entries.insert(key.into(), Some(kind));
        self
    }

    /// Add an entry whose value may be of any (non-null) kind.
    pub fn unconstrained(mut self, key: impl Into<String>) -> Self {
        self.entries.insert(key.into(), None);
        self
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, kind: Option<ValueKind>) {
        self.entries.insert(key.into(), kind);
    }

    /// Returns true if the schema declares `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the declaration for `key`: `None` if undeclared,
    /// `Some(None)` if declared without a constraint.
    pub fn get(&self, key: &str) -> Option<Option<ValueKind>> {
        self.entries.get(key).copied()
    }

    /// Iterates over the declared entry names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of declared entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<ValueKind>)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, Option<ValueKind>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Mandatory and optional entries expected in a metadata file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataSchema {
    #[serde(default)]
    mandatory: Schema,
    #[serde(default)]
    optional: Schema,
}

impl MetadataSchema {
    /// Create a schema with the given mandatory entries and no optional ones.
    pub fn new(mandatory: Schema) -> Self {
        Self {
            mandatory,
            optional: Schema::new(),
        }
    }

    /// Replace the optional entries.
    pub fn with_optional(mut self, optional: Schema) -> Self {
        self.optional = optional;
        self
    }

    /// Returns the mandatory entries.
    pub fn mandatory(&self) -> &Schema {
        &self.mandatory
    }

    /// Returns the optional entries.
    pub fn optional(&self) -> &Schema {
        &self.optional
    }

    /// Returns true if `key` is either mandatory or optional.
    pub fn is_allowed(&self, key: &str) -> bool {
        self.mandatory.contains(key) || self.optional.contains(key)
    }

    /// Returns the type constraint applying to `key`, if any.
    ///
    /// When a key is declared in both sets the optional declaration wins.
    pub fn constraint_for(&self, key: &str) -> Option<ValueKind> {
        self.optional
            .get(key)
            .or_else(|| self.mandatory.get(key))
            .flatten()
    }

    /// Parse a schema definition from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load a schema definition from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|e| SchemaError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_constraints() {
        let schema = Schema::new()
            .entry("author", ValueKind::String)
            .unconstrained("notes");
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.get("author"), Some(Some(ValueKind::String)));
        assert_eq!(schema.get("notes"), Some(None));
        assert_eq!(schema.get("absent"), None);
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["author", "notes"]);
    }

    #[test]
    fn default_optional_schema_is_empty_per_value() {
        let a = MetadataSchema::new(Schema::new().entry("a", ValueKind::Bool));
        let b = MetadataSchema::new(Schema::new());
        assert!(a.optional().is_empty());
        assert!(b.optional().is_empty());
    }

    #[test]
    fn optional_declaration_wins_on_overlap() {
        let schema = MetadataSchema::new(Schema::new().entry("k", ValueKind::String))
            .with_optional(Schema::new().entry("k", ValueKind::Integer));
        assert_eq!(schema.constraint_for("k"), Some(ValueKind::Integer));
        assert!(schema.is_allowed("k"));
    }

    #[test]
    fn unconstrained_and_undeclared_have_no_constraint() {
        let schema = MetadataSchema::new(Schema::new().unconstrained("free"));
        assert_eq!(schema.constraint_for("free"), None);
        assert_eq!(schema.constraint_for("other"), None);
        assert!(schema.is_allowed("free"));
        assert!(!schema.is_allowed("other"));
    }

    #[test]
    fn parses_yaml_definition() {
        let schema = MetadataSchema::from_yaml_str(
            "mandatory:\n  author: string\n  open source: bool\n  notes: ~\noptional:\n  gpu budget: number\n",
        )
        .unwrap();
        assert_eq!(schema.mandatory().len(), 3);
        assert_eq!(schema.constraint_for("open source"), Some(ValueKind::Bool));
        assert_eq!(schema.constraint_for("notes"), None);
        assert_eq!(schema.constraint_for("gpu budget"), Some(ValueKind::Number));
    }

    #[test]
    fn optional_section_may_be_omitted() {
        let schema = MetadataSchema::from_yaml_str("mandatory:\n  author: str\n").unwrap();
        assert!(schema.optional().is_empty());
    }

    #[test]
    fn rejects_unknown_sections_and_kinds() {
        assert!(MetadataSchema::from_yaml_str("required:\n  a: string\n").is_err());
        assert!(MetadataSchema::from_yaml_str("mandatory:\n  a: text\n").is_err());
    }

    #[test]
    fn from_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.yaml");
        std::fs::write(&path, "mandatory: [a, b]\n").unwrap();
        let err = MetadataSchema::from_file(&path).unwrap_err();
        assert!(matches!(err, SchemaError::Invalid { .. }));
        assert!(err.to_string().contains("schema.yaml"));

        let missing = MetadataSchema::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(missing, SchemaError::Io { .. }));
    }
}
