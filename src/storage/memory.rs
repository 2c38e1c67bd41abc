//! In-memory gateway for tests and embedding

use std::collections::HashMap;

use crate::record::Row;
use crate::schema::Registry;

use super::errors::StorageResult;
use super::Gateway;

/// Keeps the registry and row sets in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    registry: Registry,
    rows: HashMap<String, Vec<Row>>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of save calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Gateway for MemoryStore {
    fn load_registry(&self) -> Registry {
        self.registry.clone()
    }

    fn save_registry(&mut self, registry: &Registry) -> StorageResult<()> {
        self.registry = registry.clone();
        self.writes += 1;
        Ok(())
    }

    fn load_rows(&self, table: &str) -> StorageResult<Vec<Row>> {
        Ok(self.rows.get(table).cloned().unwrap_or_default())
    }

    fn save_rows(&mut self, table: &str, rows: &[Row]) -> StorageResult<()> {
        self.rows.insert(table.to_string(), rows.to_vec());
        self.writes += 1;
        Ok(())
    }

    fn remove_rows(&mut self, table: &str) -> StorageResult<()> {
        self.rows.remove(table);
        Ok(())
    }
}
