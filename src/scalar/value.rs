//! Scalar values and column types
//!
//! Supported types:
//! - int: 64-bit signed integer
//! - str: UTF-8 string
//! - bool: Boolean

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{ScalarError, ScalarResult};

/// Tokens recognised as `true`, compared after lowercasing
pub const TRUE_TOKENS: [&str; 4] = ["true", "1", "yes", "y"];

/// Tokens recognised as `false`, compared after lowercasing
pub const FALSE_TOKENS: [&str; 4] = ["false", "0", "no", "n"];

/// A single typed cell value.
///
/// Serialized as the matching native JSON value. Variant order matters for
/// untagged deserialization: a JSON boolean must never be read as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Scalar {
    /// Returns the inner integer if this is a [Scalar::Int]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the inner string slice if this is a [Scalar::Str]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner boolean if this is a [Scalar::Bool]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the column type this value naturally belongs to
    pub fn column_type(&self) -> ColumnType {
        match self {
            Scalar::Int(_) => ColumnType::Int,
            Scalar::Str(_) => ColumnType::Str,
            Scalar::Bool(_) => ColumnType::Bool,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

/// Declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int,
    Str,
    Bool,
}

impl ColumnType {
    /// All allowed types, in the order they are listed to users
    pub const ALL: [ColumnType; 3] = [ColumnType::Int, ColumnType::Str, ColumnType::Bool];

    /// Returns the canonical type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Str => "str",
            ColumnType::Bool => "bool",
        }
    }

    /// Resolves a type name. Names are case-sensitive.
    pub fn parse(name: &str) -> ScalarResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.type_name() == name)
            .ok_or_else(|| ScalarError::UnsupportedType(name.to_string()))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
