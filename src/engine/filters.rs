//! Predicate filtering
//!
//! Exact equality only, AND across entries. Values are compared as stored,
//! without coercion: `Str("1937")` never matches `Int(1937)`.

use crate::record::{Predicate, Row};

/// Evaluates WHERE predicates against rows
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a row matches every predicate entry.
    ///
    /// An empty predicate matches every row.
    pub fn matches(row: &Row, predicate: &Predicate) -> bool {
        predicate
            .iter()
            .all(|(column, expected)| match row.get(column) {
                Some(actual) => actual == expected,
                None => false, // Missing field = no match
            })
    }
}
