//! Expression parser for clause fragments
//!
//! Turns the free text after `set`, `where` and `values` into typed
//! structures. Values are classified with [`crate::scalar::infer`]; the
//! declared column type is enforced later, at insert time.

mod clauses;
mod errors;
mod lexer;

pub use clauses::{parse_assignments, parse_set, parse_values_list, parse_where, Separator};
pub use errors::{ParseError, ParseResult};
pub use lexer::{tokenize, Token};
