//! # subval-schema — Metadata Schema Checking
//!
//! Checks that a submission's metadata description file conforms to the
//! schema the challenge expects.
//!
//! ## Runtime Validation (`validate`)
//!
//! - [`validate_metadata`] — loads a YAML file, verifies that every
//!   mandatory key is present, that no undeclared key is present, and that
//!   each value is non-null and of the declared [`ValueKind`], then returns
//!   the parsed [`Metadata`].
//!
//! ## Schemas (`schema`)
//!
//! [`MetadataSchema`] pairs mandatory and optional [`Schema`]s. Schemas are
//! built in code or loaded from YAML definitions.
//!
//! ## Crate Policy
//!
//! - Depends only on `subval-core` internally.
//! - One file read per check; no recursion into nested values beyond the
//!   top-level kind check.
//!
//! [`ValueKind`]: subval_core::ValueKind

pub mod metadata;
pub mod schema;
pub mod validate;

pub use metadata::Metadata;
pub use schema::{MetadataSchema, Schema, SchemaError};
pub use validate::{validate_metadata, validate_metadata_str};
