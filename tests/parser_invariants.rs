//! Expression Parser and Coercion Tests
//!
//! Exercises the public parsing surface the dispatcher relies on, plus the
//! coercion rules applied on insert.

use primdb::parser::{parse_set, parse_values_list, parse_where, ParseError};
use primdb::scalar::{coerce, infer, ColumnType, Scalar, ScalarError};

fn s(v: &str) -> Scalar {
    Scalar::Str(v.to_string())
}

// =============================================================================
// Clause parsing
// =============================================================================

#[test]
fn test_values_list_keeps_quoted_commas() {
    let values = parse_values_list(r#""a, b", 5, true"#).unwrap();
    assert_eq!(values, vec![s("a, b"), Scalar::Int(5), Scalar::Bool(true)]);
}

#[test]
fn test_where_with_and() {
    let predicate = parse_where("year = 1937 and active = true").unwrap();
    assert_eq!(predicate.len(), 2);
    assert_eq!(predicate["year"], Scalar::Int(1937));
    assert_eq!(predicate["active"], Scalar::Bool(true));
}

#[test]
fn test_set_with_commas() {
    let assignment = parse_set(r#"age = 30, name = "Bob""#).unwrap();
    assert_eq!(assignment.len(), 2);
    assert_eq!(assignment["age"], Scalar::Int(30));
    assert_eq!(assignment["name"], s("Bob"));
}

#[test]
fn test_parsing_is_deterministic() {
    let first = parse_where(r#"title = "It's, here" and n = -4"#).unwrap();
    for _ in 0..50 {
        assert_eq!(parse_where(r#"title = "It's, here" and n = -4"#).unwrap(), first);
    }
    assert_eq!(first["n"], Scalar::Int(-4));
}

#[test]
fn test_malformed_fragments_fail() {
    for bad in ["", "year", "year =", "= 5", "a = 1 and", "a = 1, b = 2", "a = 1 b = 2"] {
        assert!(parse_where(bad).is_err(), "where {:?} parsed", bad);
    }
    for bad in ["", "a = 1 and b = 2", "a = 1,", "a = 1, a = 2"] {
        assert!(parse_set(bad).is_err(), "set {:?} parsed", bad);
    }
    assert!(matches!(
        parse_values_list(r#"("open"#),
        Err(ParseError::UnterminatedQuote('"'))
    ));
}

// =============================================================================
// Coercion
// =============================================================================

#[test]
fn test_coercion_examples() {
    assert_eq!(coerce(&s("7"), ColumnType::Int).unwrap(), Scalar::Int(7));
    assert!(matches!(
        coerce(&s("7.0"), ColumnType::Int),
        Err(ScalarError::TypeCoercion { .. })
    ));
    assert_eq!(coerce(&Scalar::Int(3), ColumnType::Bool).unwrap(), Scalar::Bool(true));
    assert_eq!(coerce(&Scalar::Int(0), ColumnType::Bool).unwrap(), Scalar::Bool(false));
    assert!(coerce(&s("maybe"), ColumnType::Bool).is_err());
    assert_eq!(coerce(&Scalar::Int(42), ColumnType::Str).unwrap(), s("42"));
}

#[test]
fn test_inference_priority() {
    assert_eq!(infer("1"), Scalar::Bool(true));
    assert_eq!(infer("No"), Scalar::Bool(false));
    assert_eq!(infer("12"), Scalar::Int(12));
    assert_eq!(infer("12a"), s("12a"));
}
