//! Scalar values, column types and the conversions between them
//!
//! Every cell in a table is one of three kinds: int, str or bool.

mod coerce;
mod errors;
mod value;

pub use coerce::{coerce, coerce_named, infer};
pub use errors::{ScalarError, ScalarResult};
pub use value::{ColumnType, Scalar, FALSE_TOKENS, TRUE_TOKENS};
