//! CRUD engine errors
//!
//! Error codes:
//! - PRIMDB_ARITY_MISMATCH
//! - PRIMDB_EMPTY_PREDICATE
//! - PRIMDB_EMPTY_ASSIGNMENT
//! - PRIMDB_ID_EXHAUSTED
//!
//! Wrapped schema, scalar and storage errors keep their own codes.

use thiserror::Error;

use crate::scalar::ScalarError;
use crate::schema::SchemaError;
use crate::storage::StorageError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("expected {expected} values, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("a WHERE clause with at least one condition is required")]
    EmptyPredicate,

    #[error("a SET clause with at least one assignment is required")]
    EmptyAssignment,

    #[error("no identifier left after {last}")]
    IdExhausted { last: i64 },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Scalar(#[from] ScalarError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl EngineError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ArityMismatch { .. } => "PRIMDB_ARITY_MISMATCH",
            EngineError::EmptyPredicate => "PRIMDB_EMPTY_PREDICATE",
            EngineError::EmptyAssignment => "PRIMDB_EMPTY_ASSIGNMENT",
            EngineError::IdExhausted { .. } => "PRIMDB_ID_EXHAUSTED",
            EngineError::Schema(e) => e.code(),
            EngineError::Scalar(e) => e.code(),
            EngineError::Storage(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_codes_pass_through() {
        let err: EngineError = SchemaError::NotFound("books".into()).into();
        assert_eq!(err.code(), "PRIMDB_TABLE_NOT_FOUND");
        assert_eq!(err.to_string(), "table \"books\" does not exist");

        let err: EngineError = ScalarError::UnsupportedType("float".into()).into();
        assert_eq!(err.code(), "PRIMDB_UNSUPPORTED_TYPE");
    }

    #[test]
    fn test_arity_message() {
        let err = EngineError::ArityMismatch { expected: 3, got: 2 };
        assert_eq!(err.to_string(), "expected 3 values, got 2");
        assert_eq!(err.code(), "PRIMDB_ARITY_MISMATCH");
    }
}
