//! SET / WHERE / VALUES fragment parsing
//!
//! SET and WHERE share one scanner: the context's separator (`,` or `and`)
//! is normalized to a single separator piece before scanning.

use std::collections::BTreeMap;

use crate::record::{Assignment, Predicate};
use crate::scalar::{infer, Scalar};

use super::errors::{ParseError, ParseResult};
use super::lexer::{tokenize, window, Token};

/// Separator expected between `key = value` pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `,` (SET clauses)
    Comma,
    /// `and`, any case (WHERE clauses)
    And,
}

impl Separator {
    fn as_str(&self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::And => "and",
        }
    }
}

enum Piece<'t> {
    Text(&'t str),
    Equals,
    Separator,
    Stray,
}

fn normalize(tokens: &[Token], separator: Separator) -> Vec<Piece<'_>> {
    tokens
        .iter()
        .map(|token| match (token, separator) {
            (Token::Comma, Separator::Comma) => Piece::Separator,
            (Token::Word(w), Separator::And) if w.eq_ignore_ascii_case("and") => Piece::Separator,
            (Token::Word(w) | Token::Quoted(w), _) => Piece::Text(w),
            (Token::Equals, _) => Piece::Equals,
            (Token::Comma, Separator::And) => Piece::Stray,
        })
        .collect()
}

/// Splits a fragment into ordered `(key, raw value)` pairs.
pub fn parse_assignments(text: &str, separator: Separator) -> ParseResult<Vec<(String, String)>> {
    let tokens = tokenize(text)?;
    let pieces = normalize(&tokens, separator);
    let n = pieces.len();

    let mut pairs = Vec::new();
    let mut i = 0;
    while i < n {
        let key = match pieces[i] {
            Piece::Text(k) => k,
            _ => {
                return Err(ParseError::ExpectedPair {
                    window: window(&tokens, i, i + 3),
                })
            }
        };
        if key.is_empty() {
            return Err(ParseError::EmptyKey {
                window: window(&tokens, i, i + 3),
            });
        }
        if !matches!(pieces.get(i + 1), Some(Piece::Equals)) {
            return Err(ParseError::ExpectedPair {
                window: window(&tokens, i, i + 3),
            });
        }
        let value = match pieces.get(i + 2) {
            Some(Piece::Text(v)) => v,
            _ => {
                return Err(ParseError::ExpectedValue {
                    window: window(&tokens, i.saturating_sub(1), i + 3),
                })
            }
        };
        pairs.push((key.to_string(), value.to_string()));
        i += 3;

        if i < n {
            if !matches!(pieces[i], Piece::Separator) {
                return Err(ParseError::WrongSeparator {
                    expected: separator.as_str(),
                    window: window(&tokens, i.saturating_sub(2), i + 3),
                });
            }
            i += 1;
            // a separator must be followed by another pair
            if i == n {
                return Err(ParseError::ExpectedPair {
                    window: window(&tokens, i.saturating_sub(3), n),
                });
            }
        }
    }
    Ok(pairs)
}

fn parse_pairs(text: &str, separator: Separator) -> ParseResult<BTreeMap<String, Scalar>> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let mut out = BTreeMap::new();
    for (key, raw) in parse_assignments(text, separator)? {
        if out.contains_key(&key) {
            return Err(ParseError::DuplicateKey(key));
        }
        out.insert(key, infer(&raw));
    }
    Ok(out)
}

/// Parses `age = 30, name = "Bob"`.
pub fn parse_set(text: &str) -> ParseResult<Assignment> {
    parse_pairs(text, Separator::Comma)
}

/// Parses `year = 1937 and active = true`.
pub fn parse_where(text: &str) -> ParseResult<Predicate> {
    parse_pairs(text, Separator::And)
}

/// Parses `("a, b", 5, true)`; the enclosing parentheses are optional.
pub fn parse_values_list(text: &str) -> ParseResult<Vec<Scalar>> {
    let mut body = text.trim();
    if body.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
        body = inner.trim();
    }

    let tokens = tokenize(body)?;
    let mut values = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Comma => continue,
            Token::Word(w) | Token::Quoted(w) => values.push(infer(w)),
            Token::Equals => {
                return Err(ParseError::UnexpectedToken {
                    token: token.to_string(),
                    window: window(&tokens, i.saturating_sub(2), i + 3),
                })
            }
        }
    }
    Ok(values)
}
