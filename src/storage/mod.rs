//! Persistence gateway for primdb
//!
//! The registry and each table's row set are independent units that are
//! read whole at the start of a command and written whole after a successful
//! mutation. There is no locking: two processes sharing a data directory can
//! overwrite each other's changes.

mod errors;
mod json;
mod memory;

pub use errors::{StorageError, StorageResult};
pub use json::{JsonStore, META_FILE, ROWS_DIR};
pub use memory::MemoryStore;

use crate::record::Row;
use crate::schema::Registry;

/// Load/save surface the engine and dispatcher persist through.
pub trait Gateway {
    /// Loads the registry. A missing or unreadable registry is empty.
    fn load_registry(&self) -> Registry;

    /// Replaces the stored registry
    fn save_registry(&mut self, registry: &Registry) -> StorageResult<()>;

    /// Loads a table's rows. A missing row file is an empty table.
    fn load_rows(&self, table: &str) -> StorageResult<Vec<Row>>;

    /// Replaces a table's rows
    fn save_rows(&mut self, table: &str, rows: &[Row]) -> StorageResult<()>;

    /// Deletes a table's rows
    fn remove_rows(&mut self, table: &str) -> StorageResult<()>;
}
