//! Row-shaped data shared by the parser, the engine and storage

use std::collections::BTreeMap;

use crate::scalar::Scalar;

/// Name of the identifier column every table starts with
pub const ID_COLUMN: &str = "ID";

/// One stored record: column name to value
pub type Row = BTreeMap<String, Scalar>;

/// Equality-only conjunctive filter (WHERE clause)
pub type Predicate = BTreeMap<String, Scalar>;

/// Column overwrites applied to matching rows (SET clause)
pub type Assignment = BTreeMap<String, Scalar>;
