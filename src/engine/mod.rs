//! CRUD engine for primdb
//!
//! Pure operations over a registry and one table's rows (`crud`), the
//! equality filter they share (`filters`), and the per-command context that
//! loads and persists through a [`Gateway`](crate::storage::Gateway).

mod context;
mod crud;
mod errors;
mod filters;

pub use context::CommandContext;
pub use crud::{delete, insert, select, table_info, update, TableInfo};
pub use errors::{EngineError, EngineResult};
pub use filters::PredicateFilter;
