//! CLI-level errors
//!
//! Wraps every core error so the dispatcher can report any failure as one
//! line and keep going.
//!
//! Error codes (own variants):
//! - PRIMDB_CLI_USAGE
//! - PRIMDB_CLI_CONFIG
//! - PRIMDB_CLI_IO
//! - PRIMDB_UNKNOWN_COMMAND

use std::io;

use thiserror::Error;

use crate::engine::EngineError;
use crate::parser::ParseError;
use crate::scalar::ScalarError;
use crate::schema::SchemaError;
use crate::storage::StorageError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Scalar(#[from] ScalarError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid command, expected: {0}")]
    Usage(&'static str),

    #[error("config error: {0}")]
    Config(String),

    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unknown command \"{0}\", type help for the list of commands")]
    UnknownCommand(String),
}

impl CliError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Parse(e) => e.code(),
            CliError::Engine(e) => e.code(),
            CliError::Schema(e) => e.code(),
            CliError::Scalar(e) => e.code(),
            CliError::Storage(e) => e.code(),
            CliError::Usage(_) => "PRIMDB_CLI_USAGE",
            CliError::Config(_) => "PRIMDB_CLI_CONFIG",
            CliError::Io(_) => "PRIMDB_CLI_IO",
            CliError::UnknownCommand(_) => "PRIMDB_UNKNOWN_COMMAND",
        }
    }

    /// Console failures end the session; everything else is reported and
    /// the loop continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Io(_))
    }
}
