//! Error types for dictbridge.
//!
//! Two classes of failure. Structural errors (unknown table, corrupt
//! registry, wrong record length) abort a transfer outright. Content
//! errors (a token matching no accepted kind) stop ingestion of the
//! affected record and carry table name, record index within the batch,
//! and field index so the caller can locate the bad source data.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::{FieldKind, FieldSpec};

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for dictbridge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Schema lookup or registry failure
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Record coercion or validation failure
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    /// Text backend directory is missing per-table files
    #[error("missing table files in {}: {}", dir.display(), missing.join(", "))]
    MissingTables { dir: PathBuf, missing: Vec<String> },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to schema lookup and the table registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Name is not one of the 8 canonical table names
    #[error("unknown table: {name:?}")]
    UnknownTable { name: String },

    /// Registry did not yield exactly 8 distinct schemas.
    /// A programming-time invariant, never an expected runtime condition.
    #[error("table registry corrupt: expected {expected} distinct schemas, found {actual}")]
    RegistryCorrupt { expected: usize, actual: usize },
}

/// Errors raised by container write paths, with full positional context.
///
/// `record` is the index of the failing record within the batch being
/// ingested (always 0 for single-record operations).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Token matches no accepted kind for its field
    #[error("{table}: record {record}, field {field}: token {token:?} matches no accepted kind ({accepted})")]
    Coercion {
        table: &'static str,
        record: usize,
        field: usize,
        token: String,
        accepted: FieldSpec,
    },

    /// Record length differs from the schema's field count
    #[error("{table}: record {record}: expected {expected} fields, got {actual}")]
    WrongLength {
        table: &'static str,
        record: usize,
        expected: usize,
        actual: usize,
    },

    /// Value's runtime kind is not in the field's accepted set
    #[error("{table}: record {record}, field {field}: {actual} not in accepted set ({expected})")]
    KindMismatch {
        table: &'static str,
        record: usize,
        field: usize,
        expected: FieldSpec,
        actual: FieldKind,
    },

    /// Positional write outside the container's valid index range
    #[error("{table}: index {index} out of range for length {len}")]
    IndexOutOfRange {
        table: &'static str,
        index: usize,
        len: usize,
    },
}

/// Context-free coercion failure raised by [`coerce`](crate::coerce::coerce).
///
/// Containers wrap this into [`RecordError::Coercion`] with positional
/// context before surfacing it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("token {token:?} matches no accepted kind ({accepted})")]
pub struct CoerceError {
    pub token: String,
    pub accepted: FieldSpec,
}

/// Context-free validation failure raised by
/// [`validate`](crate::validate::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// Record length differs from the schema's field count
    #[error("expected {expected} fields, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// First field whose value kind falls outside the accepted set
    #[error("field {field}: {actual} not in accepted set ({expected})")]
    KindMismatch {
        field: usize,
        expected: FieldSpec,
        actual: FieldKind,
    },
}
