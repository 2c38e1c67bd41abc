//! Per-command working state
//!
//! A [`CommandContext`] is created for one command and dropped after it. It
//! loads the registry fresh from the gateway, loads at most one table's rows
//! on first use, and writes back only what the command changed. Nothing
//! survives between commands, so edits made to the files by another tool are
//! always seen by the next command.

use crate::observability::{log_event, Event};
use crate::record::{Assignment, Predicate, Row};
use crate::scalar::Scalar;
use crate::schema::{describe_columns, Column, Registry};
use crate::storage::Gateway;

use super::crud::{self, TableInfo};
use super::errors::EngineResult;

/// Rows of the one table the current command works on
#[derive(Debug)]
struct LoadedRows {
    table: String,
    rows: Vec<Row>,
}

/// Registry plus the row set of at most one table, bound to a gateway
pub struct CommandContext<'a, G: Gateway + ?Sized> {
    gateway: &'a mut G,
    registry: Registry,
    loaded: Option<LoadedRows>,
}

impl<'a, G: Gateway + ?Sized> CommandContext<'a, G> {
    /// Starts a command with a freshly loaded registry
    pub fn new(gateway: &'a mut G) -> Self {
        let registry = gateway.load_registry();
        Self {
            gateway,
            registry,
            loaded: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the rows of `table`, loading them on first use.
    ///
    /// Asking for a different table replaces the loaded rows.
    pub fn rows_mut(&mut self, table: &str) -> EngineResult<&mut Vec<Row>> {
        load_rows(&mut self.loaded, &*self.gateway, table)
    }

    /// Writes the loaded rows back
    pub fn commit_rows(&mut self) -> EngineResult<()> {
        if let Some(loaded) = &self.loaded {
            self.gateway.save_rows(&loaded.table, &loaded.rows)?;
        }
        Ok(())
    }

    /// Writes the registry back
    pub fn commit_registry(&mut self) -> EngineResult<()> {
        self.gateway.save_registry(&self.registry)?;
        Ok(())
    }

    /// Creates a table with an empty row file and returns its columns
    pub fn create_table<S: AsRef<str>>(
        &mut self,
        name: &str,
        column_specs: &[S],
    ) -> EngineResult<Vec<Column>> {
        let columns = self.registry.create_table(name, column_specs)?.to_vec();
        self.commit_registry()?;
        self.loaded = Some(LoadedRows {
            table: name.to_string(),
            rows: Vec::new(),
        });
        self.commit_rows()?;

        let described = describe_columns(&columns);
        log_event(
            Event::TableCreated,
            &[("table", name), ("columns", described.as_str())],
        );
        Ok(columns)
    }

    /// Drops a table and deletes its row file
    pub fn drop_table(&mut self, name: &str) -> EngineResult<()> {
        self.registry.drop_table(name)?;
        self.commit_registry()?;
        self.gateway.remove_rows(name)?;
        if self.loaded.as_ref().is_some_and(|l| l.table == name) {
            self.loaded = None;
        }
        log_event(Event::TableDropped, &[("table", name)]);
        Ok(())
    }

    pub fn list_tables(&self) -> Vec<String> {
        self.registry.list_tables()
    }

    /// Returns the ordered columns of `table`
    pub fn columns(&self, table: &str) -> EngineResult<&[Column]> {
        Ok(self.registry.get_columns(table)?)
    }

    /// Inserts one row, persists the table, and returns the new ID
    pub fn insert(&mut self, table: &str, values: &[Scalar]) -> EngineResult<i64> {
        self.registry.get_columns(table)?;
        let rows = load_rows(&mut self.loaded, &*self.gateway, table)?;
        let id = crud::insert(&self.registry, table, values, rows)?;
        self.commit_rows()?;
        Ok(id)
    }

    /// Returns matching rows of `table`
    pub fn select(&mut self, table: &str, predicate: Option<&Predicate>) -> EngineResult<Vec<Row>> {
        self.registry.get_columns(table)?;
        let rows = load_rows(&mut self.loaded, &*self.gateway, table)?;
        Ok(crud::select(rows, predicate))
    }

    /// Updates matching rows and persists the table if any changed
    pub fn update(
        &mut self,
        table: &str,
        predicate: &Predicate,
        assignment: &Assignment,
    ) -> EngineResult<usize> {
        self.registry.get_columns(table)?;
        let rows = load_rows(&mut self.loaded, &*self.gateway, table)?;
        let changed = crud::update(rows, predicate, assignment)?;
        if changed > 0 {
            self.commit_rows()?;
        }
        Ok(changed)
    }

    /// Deletes matching rows and persists the table if any were removed
    pub fn delete(&mut self, table: &str, predicate: &Predicate) -> EngineResult<usize> {
        self.registry.get_columns(table)?;
        let rows = load_rows(&mut self.loaded, &*self.gateway, table)?;
        let removed = crud::delete(rows, predicate)?;
        if removed > 0 {
            self.commit_rows()?;
        }
        Ok(removed)
    }

    /// Describes `table`
    pub fn info(&mut self, table: &str) -> EngineResult<TableInfo> {
        self.registry.get_columns(table)?;
        let rows = load_rows(&mut self.loaded, &*self.gateway, table)?;
        crud::table_info(&self.registry, table, rows)
    }
}

fn load_rows<'r, G: Gateway + ?Sized>(
    loaded: &'r mut Option<LoadedRows>,
    gateway: &G,
    table: &str,
) -> EngineResult<&'r mut Vec<Row>> {
    let current = match loaded.take() {
        Some(current) if current.table == table => current,
        _ => LoadedRows {
            table: table.to_string(),
            rows: gateway.load_rows(table)?,
        },
    };
    Ok(&mut loaded.insert(current).rows)
}
