//! Targeted coercion and untargeted inference
//!
//! `coerce` converts a value to a declared column type and may fail.
//! `infer` classifies a bare token before any column type is known and
//! never fails.

use super::errors::{ScalarError, ScalarResult};
use super::value::{ColumnType, Scalar, FALSE_TOKENS, TRUE_TOKENS};

/// Converts `raw` to `target`.
pub fn coerce(raw: &Scalar, target: ColumnType) -> ScalarResult<Scalar> {
    match target {
        ColumnType::Int => to_int(raw).map(Scalar::Int),
        ColumnType::Str => Ok(Scalar::Str(raw.to_string())),
        ColumnType::Bool => to_bool(raw).map(Scalar::Bool),
    }
}

/// Converts `raw` to the type called `type_name`.
pub fn coerce_named(raw: &Scalar, type_name: &str) -> ScalarResult<Scalar> {
    coerce(raw, ColumnType::parse(type_name)?)
}

/// Classifies a token: boolean words, then integers, then plain strings.
pub fn infer(token: &str) -> Scalar {
    if let Some(b) = bool_token(token) {
        return Scalar::Bool(b);
    }
    match parse_int(token) {
        Some(i) => Scalar::Int(i),
        None => Scalar::Str(token.to_string()),
    }
}

fn to_int(raw: &Scalar) -> ScalarResult<i64> {
    match raw {
        Scalar::Int(i) => Ok(*i),
        Scalar::Bool(b) => Ok(i64::from(*b)),
        Scalar::Str(s) => parse_int(s.trim()).ok_or_else(|| failure(raw, ColumnType::Int)),
    }
}

fn to_bool(raw: &Scalar) -> ScalarResult<bool> {
    match raw {
        Scalar::Bool(b) => Ok(*b),
        Scalar::Int(i) => Ok(*i != 0),
        Scalar::Str(s) => bool_token(s.trim()).ok_or_else(|| failure(raw, ColumnType::Bool)),
    }
}

fn bool_token(token: &str) -> Option<bool> {
    let lowered = token.to_lowercase();
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Optional sign followed by a non-empty run of ASCII digits.
fn parse_int(token: &str) -> Option<i64> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn failure(raw: &Scalar, target: ColumnType) -> ScalarError {
    ScalarError::TypeCoercion {
        value: raw.to_string(),
        target: target.type_name(),
    }
}
