//! # Parsed Metadata
//!
//! The mapping returned by a successful metadata check. Keys are kept in
//! file order and exactly as present in the source document; nothing is
//! stripped or defaulted.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use subval_core::kind::untagged;

/// Top-level entries of a validated metadata file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: Mapping,
}

impl Metadata {
    /// Wrap a mapping whose keys are all `Value::String`.
    pub(crate) fn from_string_keyed(entries: Mapping) -> Self {
        Self { entries }
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the value of `key` if it is a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).map(untagged).and_then(Value::as_bool)
    }

    /// Returns the value of `key` if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).map(untagged).and_then(Value::as_str)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(Value::as_str)
    }

    /// Iterates over the entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| k.as_str().map(|k| (k, v)))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes self and returns the underlying mapping.
    pub fn into_mapping(self) -> Mapping {
        self.entries
    }

    /// Serialize the entries back to a YAML document.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.entries)
    }
}
