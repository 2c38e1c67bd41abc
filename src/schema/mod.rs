//! Schema & table registry for primdb
//!
//! A table schema is an ordered column list that always starts with the
//! reserved `ID:int` column. The registry maps table names to schemas and is
//! persisted as one unit.

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::parse_column_specs;
pub use types::{describe_columns, Column, Registry, TableDef};
