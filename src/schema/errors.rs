//! Schema and registry error types
//!
//! Error codes:
//! - PRIMDB_TABLE_NOT_FOUND
//! - PRIMDB_TABLE_EXISTS
//! - PRIMDB_INVALID_COLUMN_SPEC
//! - PRIMDB_EMPTY_SCHEMA
//! - PRIMDB_CORRUPT_SCHEMA
//! - PRIMDB_INVALID_TABLE_NAME

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("table \"{0}\" does not exist")]
    NotFound(String),

    #[error("table \"{0}\" already exists")]
    AlreadyExists(String),

    #[error("invalid column spec \"{spec}\": {reason}")]
    InvalidColumnSpec { spec: String, reason: String },

    #[error("no columns given, expected one or more <name>:<type> specs")]
    EmptySchema,

    #[error("table \"{0}\" has no valid schema")]
    CorruptSchema(String),

    #[error("invalid table name \"{0}\"")]
    InvalidTableName(String),
}

impl SchemaError {
    pub(crate) fn invalid_spec(spec: &str, reason: impl Into<String>) -> Self {
        SchemaError::InvalidColumnSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::NotFound(_) => "PRIMDB_TABLE_NOT_FOUND",
            SchemaError::AlreadyExists(_) => "PRIMDB_TABLE_EXISTS",
            SchemaError::InvalidColumnSpec { .. } => "PRIMDB_INVALID_COLUMN_SPEC",
            SchemaError::EmptySchema => "PRIMDB_EMPTY_SCHEMA",
            SchemaError::CorruptSchema(_) => "PRIMDB_CORRUPT_SCHEMA",
            SchemaError::InvalidTableName(_) => "PRIMDB_INVALID_TABLE_NAME",
        }
    }
}
