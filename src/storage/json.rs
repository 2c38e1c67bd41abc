//! JSON file persistence
//!
//! Layout under the data directory:
//! - `db_meta.json`: the registry
//! - `data/<table>.json`: one array of row objects per table
//!
//! Every write goes to `<file>.tmp` first and is renamed over the target, so
//! a crash mid-write leaves either the old file or the new one.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::observability::{log_event, log_event_at, Event, Severity};
use crate::record::Row;
use crate::schema::Registry;

use super::errors::{StorageError, StorageResult};
use super::Gateway;

/// Default registry file name
pub const META_FILE: &str = "db_meta.json";

/// Default row directory name
pub const ROWS_DIR: &str = "data";

/// File-backed gateway rooted at a data directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    meta_path: PathBuf,
    rows_dir: PathBuf,
}

impl JsonStore {
    /// Opens a store with the default layout under `data_dir`
    pub fn new(data_dir: &Path) -> Self {
        Self::with_layout(data_dir, META_FILE, ROWS_DIR)
    }

    /// Opens a store with explicit registry file and row directory names
    pub fn with_layout(data_dir: &Path, meta_file: &str, rows_dir: &str) -> Self {
        Self {
            meta_path: data_dir.join(meta_file),
            rows_dir: data_dir.join(rows_dir),
        }
    }

    /// Returns the registry file path
    pub fn meta_path(&self) -> &Path {
        &self.meta_path
    }

    /// Returns the row file path for a table
    pub fn rows_path(&self, table: &str) -> PathBuf {
        self.rows_dir.join(format!("{}.json", table))
    }

    fn read_optional(path: &Path) -> StorageResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io("failed to read file", path, e)),
        }
    }

    fn write_atomic<T: Serialize + ?Sized>(
        path: &Path,
        value: &T,
        what: &'static str,
    ) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::io("failed to create directory", parent, e))?;
        }

        let mut content = serde_json::to_string_pretty(value)
            .map_err(|source| StorageError::Serialize { what, source })?;
        content.push('\n');

        let mut temp_name = path.as_os_str().to_os_string();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StorageError::io("failed to create temp file", &temp_path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| StorageError::io("failed to write temp file", &temp_path, e))?;
        file.sync_all()
            .map_err(|e| StorageError::io("failed to fsync temp file", &temp_path, e))?;

        fs::rename(&temp_path, path)
            .map_err(|e| StorageError::io("failed to replace file", path, e))?;

        if let Some(parent) = path.parent() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }
        Ok(())
    }

    fn reset_registry(&self, reason: &str) -> Registry {
        let path = self.meta_path.display().to_string();
        log_event_at(
            Severity::Warn,
            Event::RegistryReset,
            &[("path", path.as_str()), ("reason", reason)],
        );
        Registry::new()
    }
}

impl Gateway for JsonStore {
    fn load_registry(&self) -> Registry {
        let content = match Self::read_optional(&self.meta_path) {
            Ok(Some(content)) => content,
            Ok(None) => return Registry::new(),
            Err(e) => return self.reset_registry(&e.to_string()),
        };
        match serde_json::from_str(&content) {
            Ok(registry) => registry,
            Err(e) => self.reset_registry(&format!("invalid JSON: {}", e)),
        }
    }

    fn save_registry(&mut self, registry: &Registry) -> StorageResult<()> {
        Self::write_atomic(&self.meta_path, registry, "registry")?;
        let tables = registry.table_count().to_string();
        log_event(Event::RegistryWritten, &[("tables", tables.as_str())]);
        Ok(())
    }

    fn load_rows(&self, table: &str) -> StorageResult<Vec<Row>> {
        let path = self.rows_path(table);
        let content = match Self::read_optional(&path)? {
            Some(content) => content,
            None => return Ok(Vec::new()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| StorageError::CorruptData {
            path,
            reason: format!("expected a list of rows: {}", e),
        })
    }

    fn save_rows(&mut self, table: &str, rows: &[Row]) -> StorageResult<()> {
        let path = self.rows_path(table);
        Self::write_atomic(&path, rows, "rows")?;
        let count = rows.len().to_string();
        log_event(
            Event::RowsWritten,
            &[("table", table), ("rows", count.as_str())],
        );
        Ok(())
    }

    fn remove_rows(&mut self, table: &str) -> StorageResult<()> {
        let path = self.rows_path(table);
        match fs::remove_file(&path) {
            Ok(()) => {
                log_event(Event::RowsRemoved, &[("table", table)]);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io("failed to remove file", path, e)),
        }
    }
}
