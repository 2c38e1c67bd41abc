//! Shell-style tokenizer for clause fragments
//!
//! Rules:
//! - whitespace separates words
//! - '...' is taken literally
//! - "..." allows \" and \\ escapes
//! - a backslash outside quotes escapes the next character
//! - adjacent quoted and unquoted pieces join into one word
//! - unquoted `=` and `,` are tokens of their own

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use super::errors::{ParseError, ParseResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare word, never quoted
    Word(String),
    /// A word that had at least one quoted part
    Quoted(String),
    /// `=`
    Equals,
    /// `,`
    Comma,
}

impl Token {
    /// Returns the word content, if this token is a word
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Word(s) | Token::Quoted(s) => Some(s),
            Token::Equals | Token::Comma => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(s) => write!(f, "{}", s),
            Token::Quoted(s) => write!(f, "\"{}\"", s),
            Token::Equals => write!(f, "="),
            Token::Comma => write!(f, ","),
        }
    }
}

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    current: String,
    in_word: bool,
    quoted: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            current: String::new(),
            in_word: false,
            quoted: false,
            tokens: Vec::new(),
        }
    }

    /// Consumes the whole input
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        while let Some(ch) = self.chars.next() {
            match ch {
                c if c.is_whitespace() => self.flush(),
                '=' => {
                    self.flush();
                    self.tokens.push(Token::Equals);
                }
                ',' => {
                    self.flush();
                    self.tokens.push(Token::Comma);
                }
                '\'' => self.lex_single()?,
                '"' => self.lex_double()?,
                '\\' => {
                    let escaped = self.chars.next().ok_or(ParseError::DanglingEscape)?;
                    self.push(escaped);
                }
                c => self.push(c),
            }
        }
        self.flush();
        Ok(self.tokens)
    }

    fn push(&mut self, ch: char) {
        self.in_word = true;
        self.current.push(ch);
    }

    fn flush(&mut self) {
        if !self.in_word {
            return;
        }
        let text = std::mem::take(&mut self.current);
        self.tokens.push(if self.quoted {
            Token::Quoted(text)
        } else {
            Token::Word(text)
        });
        self.in_word = false;
        self.quoted = false;
    }

    fn lex_single(&mut self) -> ParseResult<()> {
        self.in_word = true;
        self.quoted = true;
        loop {
            match self.chars.next() {
                None => return Err(ParseError::UnterminatedQuote('\'')),
                Some('\'') => return Ok(()),
                Some(c) => self.current.push(c),
            }
        }
    }

    fn lex_double(&mut self) -> ParseResult<()> {
        self.in_word = true;
        self.quoted = true;
        loop {
            match self.chars.next() {
                None => return Err(ParseError::UnterminatedQuote('"')),
                Some('"') => return Ok(()),
                Some('\\') => match self.chars.peek() {
                    Some(&c @ ('"' | '\\')) => {
                        self.chars.next();
                        self.current.push(c);
                    }
                    _ => self.current.push('\\'),
                },
                Some(c) => self.current.push(c),
            }
        }
    }
}

/// Tokenizes `src` with the rules above
pub fn tokenize(src: &str) -> ParseResult<Vec<Token>> {
    Lexer::new(src).tokenize()
}

/// Joins a slice of tokens back into a readable fragment
pub fn window(tokens: &[Token], start: usize, end: usize) -> String {
    let end = end.min(tokens.len());
    let start = start.min(end);
    tokens[start..end]
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
