//! Table lifecycle operations on the in-memory registry
//!
//! The registry is loaded fresh for every command and written back whole by
//! the caller after a successful create or drop. Every check runs before the
//! registry is touched.

use std::collections::HashSet;

use crate::record::ID_COLUMN;
use crate::scalar::ColumnType;

use super::errors::{SchemaError, SchemaResult};
use super::types::{Column, Registry, TableDef};

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table built from `name:type` specs and returns its columns.
    pub fn create_table<S: AsRef<str>>(
        &mut self,
        name: &str,
        column_specs: &[S],
    ) -> SchemaResult<&[Column]> {
        validate_table_name(name)?;
        if self.tables.contains_key(name) {
            return Err(SchemaError::AlreadyExists(name.to_string()));
        }

        let mut columns = vec![Column::id()];
        columns.extend(parse_column_specs(column_specs)?);

        let def = self
            .tables
            .entry(name.to_string())
            .or_insert(TableDef::new(columns));
        Ok(&def.columns)
    }

    /// Removes a table
    pub fn drop_table(&mut self, name: &str) -> SchemaResult<()> {
        self.tables
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Returns table names in lexicographic order
    pub fn list_tables(&self) -> Vec<String> {
        // BTreeMap keys are already sorted
        self.tables.keys().cloned().collect()
    }

    /// Checks if a table exists
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns the ordered columns of a table, `ID` first.
    pub fn get_columns(&self, name: &str) -> SchemaResult<&[Column]> {
        let def = self
            .tables
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        if def.is_corrupt() {
            return Err(SchemaError::CorruptSchema(name.to_string()));
        }
        Ok(&def.columns)
    }

    /// Returns the number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// Table names double as file names, so path-like names are refused.
fn validate_table_name(name: &str) -> SchemaResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed != name
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
    {
        return Err(SchemaError::InvalidTableName(name.to_string()));
    }
    Ok(())
}

/// Parses `name:type` specs into data columns.
pub fn parse_column_specs<S: AsRef<str>>(specs: &[S]) -> SchemaResult<Vec<Column>> {
    if specs.is_empty() {
        return Err(SchemaError::EmptySchema);
    }

    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(specs.len());
    for spec in specs {
        let spec = spec.as_ref();
        let (name, type_name) = spec
            .split_once(':')
            .ok_or_else(|| SchemaError::invalid_spec(spec, "expected <name>:<type>"))?;
        let (name, type_name) = (name.trim(), type_name.trim());

        if name.is_empty() || type_name.is_empty() {
            return Err(SchemaError::invalid_spec(spec, "name and type must not be empty"));
        }
        if name == ID_COLUMN {
            return Err(SchemaError::invalid_spec(
                spec,
                format!("\"{}\" is reserved", ID_COLUMN),
            ));
        }
        let column_type = ColumnType::parse(type_name).map_err(|_| {
            SchemaError::invalid_spec(spec, "type must be one of int, str, bool")
        })?;
        if !seen.insert(name) {
            return Err(SchemaError::invalid_spec(spec, format!("duplicate column \"{}\"", name)));
        }
        columns.push(Column::new(name, column_type));
    }
    Ok(columns)
}
