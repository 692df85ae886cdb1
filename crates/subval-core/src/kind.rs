//! # Value Kinds
//!
//! The closed set of kinds a schema entry can require of a YAML value.
//! A schema maps each key to `Option<ValueKind>`: `None` means the key is
//! unconstrained, `Some(kind)` means the value must satisfy
//! [`ValueKind::matches`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Kind of value a schema entry requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `true` or `false`.
    #[serde(alias = "boolean")]
    Bool,
    /// A number without a fractional representation.
    #[serde(alias = "int")]
    Integer,
    /// A number written with a fractional part or exponent.
    Float,
    /// Any number, integer or float.
    Number,
    /// A string scalar.
    #[serde(alias = "str")]
    String,
    /// A YAML sequence.
    #[serde(alias = "list")]
    Sequence,
    /// A YAML mapping.
    #[serde(alias = "map", alias = "dict")]
    Mapping,
}

impl ValueKind {
    /// Returns true if `value` is of this kind. Tags are looked through.
    ///
    /// `Integer` does not accept booleans, and `Float` does not accept
    /// integers; use `Number` to accept both numeric forms.
    pub fn matches(self, value: &Value) -> bool {
        match (self, untagged(value)) {
            (Self::Bool, Value::Bool(_)) => true,
            (Self::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (Self::Float, Value::Number(n)) => n.is_f64(),
            (Self::Number, Value::Number(_)) => true,
            (Self::String, Value::String(_)) => true,
            (Self::Sequence, Value::Sequence(_)) => true,
            (Self::Mapping, Value::Mapping(_)) => true,
            _ => false,
        }
    }

    /// Returns the lowercase name used in schemas and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names the kind of an arbitrary YAML value, for error messages.
pub fn describe(value: &Value) -> &'static str {
    match untagged(value) {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

/// Strips any number of YAML tags off a value.
pub fn untagged(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}
