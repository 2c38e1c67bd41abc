//! Expression parser errors
//!
//! Every variant that points at a position carries the surrounding token
//! window so the user can see where the fragment went wrong.

use thiserror::Error;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("empty column name near \"{window}\"")]
    EmptyKey { window: String },

    #[error("expected <column> = <value>, got \"{window}\"")]
    ExpectedPair { window: String },

    #[error("expected a value after \"=\" near \"{window}\"")]
    ExpectedValue { window: String },

    #[error("invalid separator between pairs, use \"{expected}\" here; error near \"{window}\"")]
    WrongSeparator {
        expected: &'static str,
        window: String,
    },

    #[error("duplicate column \"{0}\"")]
    DuplicateKey(String),

    #[error("unexpected \"{token}\" near \"{window}\"")]
    UnexpectedToken { token: String, window: String },

    #[error("no closing quotation for {0}")]
    UnterminatedQuote(char),

    #[error("trailing backslash with nothing to escape")]
    DanglingEscape,
}

impl ParseError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        "PRIMDB_PARSE_ERROR"
    }
}
