//! Insert, select, update and delete over one table's row set
//!
//! Every operation validates its inputs completely before touching `rows`,
//! so a failed call leaves the row set exactly as it was.

use crate::record::{Assignment, Predicate, Row, ID_COLUMN};
use crate::scalar::{coerce_named, Scalar};
use crate::schema::{Column, Registry};

use super::errors::{EngineError, EngineResult};
use super::filters::PredicateFilter;

/// Summary of a table for the `info` verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<Column>,
    pub row_count: usize,
}

/// Appends a row built from `values` and returns its identifier.
///
/// Values are matched to the non-identifier columns in schema order and
/// coerced to each column's type.
pub fn insert(
    registry: &Registry,
    table: &str,
    values: &[Scalar],
    rows: &mut Vec<Row>,
) -> EngineResult<i64> {
    let columns = registry.get_columns(table)?;
    let data_columns: Vec<&Column> = columns.iter().filter(|c| !c.is_id()).collect();

    if values.len() != data_columns.len() {
        return Err(EngineError::ArityMismatch {
            expected: data_columns.len(),
            got: values.len(),
        });
    }

    let mut row = Row::new();
    for (column, raw) in data_columns.iter().zip(values) {
        let value = coerce_named(raw, &column.type_name)?;
        row.insert(column.name.clone(), value);
    }

    let id = next_id(rows)?;
    row.insert(ID_COLUMN.to_string(), Scalar::Int(id));
    rows.push(row);
    Ok(id)
}

/// Returns `max(ID) + 1`, or 1 when the set is empty or any ID is unreadable.
fn next_id(rows: &[Row]) -> EngineResult<i64> {
    let mut max = 0;
    for row in rows {
        match row.get(ID_COLUMN).and_then(Scalar::as_int) {
            Some(id) => max = max.max(id),
            None => return Ok(1),
        }
    }
    max.checked_add(1).ok_or(EngineError::IdExhausted { last: max })
}

/// Returns copies of the matching rows in stored order.
///
/// A missing or empty predicate selects every row.
pub fn select(rows: &[Row], predicate: Option<&Predicate>) -> Vec<Row> {
    match predicate {
        Some(predicate) if !predicate.is_empty() => rows
            .iter()
            .filter(|row| PredicateFilter::matches(row, predicate))
            .cloned()
            .collect(),
        _ => rows.to_vec(),
    }
}

/// Overwrites the assigned columns on every matching row.
///
/// Assigned values are stored as given, without coercion against the
/// column types. Returns the number of rows changed.
pub fn update(
    rows: &mut [Row],
    predicate: &Predicate,
    assignment: &Assignment,
) -> EngineResult<usize> {
    if predicate.is_empty() {
        return Err(EngineError::EmptyPredicate);
    }
    if assignment.is_empty() {
        return Err(EngineError::EmptyAssignment);
    }

    let mut changed = 0;
    for row in rows
        .iter_mut()
        .filter(|row| PredicateFilter::matches(row, predicate))
    {
        for (column, value) in assignment {
            row.insert(column.clone(), value.clone());
        }
        changed += 1;
    }
    Ok(changed)
}

/// Removes every matching row, keeping the rest in order.
///
/// Returns the number of rows removed.
pub fn delete(rows: &mut Vec<Row>, predicate: &Predicate) -> EngineResult<usize> {
    if predicate.is_empty() {
        return Err(EngineError::EmptyPredicate);
    }
    let before = rows.len();
    rows.retain(|row| !PredicateFilter::matches(row, predicate));
    Ok(before - rows.len())
}

/// Describes a table's columns and row count
pub fn table_info(registry: &Registry, table: &str, rows: &[Row]) -> EngineResult<TableInfo> {
    let columns = registry.get_columns(table)?;
    Ok(TableInfo {
        name: table.to_string(),
        columns: columns.to_vec(),
        row_count: rows.len(),
    })
}
