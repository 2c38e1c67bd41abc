//! primdb - a single-user, file-backed table store
//!
//! Tables with typed columns (`int`, `str`, `bool`) are created and queried
//! through a small line command language. The registry and every table's
//! rows live in JSON files under one data directory.

pub mod cli;
pub mod engine;
pub mod observability;
pub mod parser;
pub mod record;
pub mod scalar;
pub mod schema;
pub mod storage;
