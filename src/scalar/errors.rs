//! Scalar coercion errors
//!
//! Error codes:
//! - PRIMDB_TYPE_COERCION
//! - PRIMDB_UNSUPPORTED_TYPE

use thiserror::Error;

/// Result type for scalar operations
pub type ScalarResult<T> = Result<T, ScalarError>;

/// Failures raised while converting a value to a column type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    #[error("cannot convert \"{value}\" to {target}")]
    TypeCoercion { value: String, target: &'static str },

    #[error("unsupported column type: {0}")]
    UnsupportedType(String),
}

impl ScalarError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ScalarError::TypeCoercion { .. } => "PRIMDB_TYPE_COERCION",
            ScalarError::UnsupportedType(_) => "PRIMDB_UNSUPPORTED_TYPE",
        }
    }
}
