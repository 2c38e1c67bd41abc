//! Schema type definitions
//!
//! On disk the registry looks like:
//!
//! ```json
//! {"tables": {"books": {"columns": [["ID", "int"], ["title", "str"]]}}}
//! ```
//!
//! Column types are kept by name so that a hand-edited file with an unknown
//! type is still readable and fails only when a value is coerced against it.
//! A table entry whose column list is malformed is kept as it was found; it
//! reports `CorruptSchema` on use without hiding the other tables.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::ID_COLUMN;
use crate::scalar::{ColumnType, ScalarResult};

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Column {
    pub name: String,
    pub type_name: String,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            type_name: column_type.type_name().to_string(),
        }
    }

    /// The reserved identifier column
    pub fn id() -> Self {
        Self::new(ID_COLUMN, ColumnType::Int)
    }

    /// Resolves the declared type
    pub fn column_type(&self) -> ScalarResult<ColumnType> {
        ColumnType::parse(&self.type_name)
    }

    pub fn is_id(&self) -> bool {
        self.name == ID_COLUMN
    }
}

impl From<(String, String)> for Column {
    fn from((name, type_name): (String, String)) -> Self {
        Self { name, type_name }
    }
}

impl From<Column> for (String, String) {
    fn from(column: Column) -> Self {
        (column.name, column.type_name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.type_name)
    }
}

/// Stored definition of one table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct TableDef {
    /// Ordered columns, `ID` first. Empty when the stored entry is corrupt.
    pub columns: Vec<Column>,
    /// Stored entry that did not hold a non-empty column list
    corrupt: Option<Value>,
}

impl TableDef {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            corrupt: None,
        }
    }

    /// True when the entry does not hold a non-empty column list
    pub fn is_corrupt(&self) -> bool {
        self.corrupt.is_some() || self.columns.is_empty()
    }
}

impl From<Value> for TableDef {
    fn from(raw: Value) -> Self {
        let columns = raw
            .get("columns")
            .cloned()
            .map(serde_json::from_value::<Vec<Column>>);
        match columns {
            Some(Ok(columns)) if !columns.is_empty() => Self::new(columns),
            _ => Self {
                columns: Vec::new(),
                corrupt: Some(raw),
            },
        }
    }
}

impl From<TableDef> for Value {
    fn from(def: TableDef) -> Self {
        if let Some(raw) = def.corrupt {
            return raw;
        }
        let columns = def
            .columns
            .into_iter()
            .map(|column| {
                let (name, type_name): (String, String) = column.into();
                Value::Array(vec![Value::String(name), Value::String(type_name)])
            })
            .collect();
        let mut entry = serde_json::Map::new();
        entry.insert("columns".to_string(), Value::Array(columns));
        Value::Object(entry)
    }
}

/// All table definitions, keyed by table name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub tables: BTreeMap<String, TableDef>,
}

/// Joins columns as `ID:int, title:str`
pub fn describe_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(Column::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
