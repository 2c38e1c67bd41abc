//! Command line recognition
//!
//! Turns one input line into a [`Statement`]. The verb is the first word and
//! is matched exactly. Clause keywords (`into`, `values`, `from`, `set`,
//! `where`) are matched case-insensitively as whole words and only outside
//! quoted text, so `"Where the wild things are"` is a value, not a clause.
//! Every clause is parsed here, before anything is loaded or changed.

use crate::parser::{parse_set, parse_values_list, parse_where, tokenize, Token};
use crate::record::{Assignment, Predicate};
use crate::scalar::Scalar;

use super::errors::{CliError, CliResult};

pub const CREATE_TABLE_USAGE: &str = "create_table <table> <column:type> ...";
pub const DROP_TABLE_USAGE: &str = "drop_table <table>";
pub const INSERT_USAGE: &str = "insert into <table> values (<value>, ...)";
pub const SELECT_USAGE: &str = "select from <table> [where <column> = <value> [and ...]]";
pub const UPDATE_USAGE: &str =
    "update <table> set <column> = <value>[, ...] where <column> = <value> [and ...]";
pub const DELETE_USAGE: &str = "delete from <table> where <column> = <value> [and ...]";
pub const INFO_USAGE: &str = "info <table>";

/// Help text printed by `help` and at REPL start
pub const HELP: &str = "\
Tables:
  create_table <table> <column:type> ...   create a table (types: int, str, bool)
  list_tables                              list all tables
  drop_table <table>                       drop a table and its rows
  info <table>                             show columns and row count

Data:
  insert into <table> values (<value>, ...)
  select from <table> [where <column> = <value> [and ...]]
  update <table> set <column> = <value>[, ...] where <column> = <value> [and ...]
  delete from <table> where <column> = <value> [and ...]

General:
  help                                     show this help
  exit                                     leave the program
";

/// One recognised command with its clauses already parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateTable { table: String, columns: Vec<String> },
    DropTable { table: String },
    ListTables,
    Insert { table: String, values: Vec<Scalar> },
    Select { table: String, predicate: Option<Predicate> },
    Update { table: String, assignment: Assignment, predicate: Predicate },
    Delete { table: String, predicate: Predicate },
    Info { table: String },
    Help,
    Exit,
}

impl Statement {
    /// The verb this statement was written with
    pub fn verb(&self) -> &'static str {
        match self {
            Statement::CreateTable { .. } => "create_table",
            Statement::DropTable { .. } => "drop_table",
            Statement::ListTables => "list_tables",
            Statement::Insert { .. } => "insert",
            Statement::Select { .. } => "select",
            Statement::Update { .. } => "update",
            Statement::Delete { .. } => "delete",
            Statement::Info { .. } => "info",
            Statement::Help => "help",
            Statement::Exit => "exit",
        }
    }

    /// Text for the confirmation prompt, for destructive statements
    pub fn confirmation(&self) -> Option<String> {
        match self {
            Statement::DropTable { table } => Some(format!("drop table \"{}\"", table)),
            Statement::Delete { table, .. } => Some(format!("delete rows from \"{}\"", table)),
            _ => None,
        }
    }

    /// Statements that read or write row data
    pub fn is_data_operation(&self) -> bool {
        matches!(
            self,
            Statement::Insert { .. }
                | Statement::Select { .. }
                | Statement::Update { .. }
                | Statement::Delete { .. }
        )
    }
}

/// Parses one command line
pub fn parse_statement(line: &str) -> CliResult<Statement> {
    let line = line.trim();
    let verb = line
        .split_whitespace()
        .next()
        .ok_or(CliError::Usage("a command, type help for the list"))?;
    let rest = &line[verb.len()..];

    match verb {
        "create_table" => {
            let mut words = words(rest, CREATE_TABLE_USAGE)?.into_iter();
            let table = words.next().ok_or(CliError::Usage(CREATE_TABLE_USAGE))?;
            Ok(Statement::CreateTable {
                table,
                columns: words.collect(),
            })
        }
        "drop_table" => Ok(Statement::DropTable {
            table: single_word(rest, DROP_TABLE_USAGE)?,
        }),
        "list_tables" => no_args(rest, "list_tables", Statement::ListTables),
        "insert" => parse_insert(rest),
        "select" => parse_select(rest),
        "update" => parse_update(rest),
        "delete" => parse_delete(rest),
        "info" => Ok(Statement::Info {
            table: single_word(rest, INFO_USAGE)?,
        }),
        "help" => no_args(rest, "help", Statement::Help),
        "exit" => no_args(rest, "exit", Statement::Exit),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn parse_insert(rest: &str) -> CliResult<Statement> {
    let after_into = leading_keyword(rest, "into", INSERT_USAGE)?;
    let (table, payload) =
        split_at_keyword(after_into, "values").ok_or(CliError::Usage(INSERT_USAGE))?;
    Ok(Statement::Insert {
        table: single_word(table, INSERT_USAGE)?,
        values: parse_values_list(payload)?,
    })
}

fn parse_select(rest: &str) -> CliResult<Statement> {
    let after_from = leading_keyword(rest, "from", SELECT_USAGE)?;
    match split_at_keyword(after_from, "where") {
        Some((table, condition)) => Ok(Statement::Select {
            table: single_word(table, SELECT_USAGE)?,
            predicate: Some(parse_where(condition)?),
        }),
        None => Ok(Statement::Select {
            table: single_word(after_from, SELECT_USAGE)?,
            predicate: None,
        }),
    }
}

fn parse_update(rest: &str) -> CliResult<Statement> {
    let (table, after_set) = split_at_keyword(rest, "set").ok_or(CliError::Usage(UPDATE_USAGE))?;
    let (assignment, condition) =
        split_at_keyword(after_set, "where").ok_or(CliError::Usage(UPDATE_USAGE))?;
    Ok(Statement::Update {
        table: single_word(table, UPDATE_USAGE)?,
        assignment: parse_set(assignment)?,
        predicate: parse_where(condition)?,
    })
}

fn parse_delete(rest: &str) -> CliResult<Statement> {
    let after_from = leading_keyword(rest, "from", DELETE_USAGE)?;
    let (table, condition) =
        split_at_keyword(after_from, "where").ok_or(CliError::Usage(DELETE_USAGE))?;
    Ok(Statement::Delete {
        table: single_word(table, DELETE_USAGE)?,
        predicate: parse_where(condition)?,
    })
}

fn no_args(rest: &str, verb: &'static str, statement: Statement) -> CliResult<Statement> {
    if rest.trim().is_empty() {
        Ok(statement)
    } else {
        Err(CliError::Usage(verb))
    }
}

/// Requires `keyword` to be the first word of `text` and returns what follows
fn leading_keyword<'a>(text: &'a str, keyword: &str, usage: &'static str) -> CliResult<&'a str> {
    match split_at_keyword(text, keyword) {
        Some((before, after)) if before.trim().is_empty() => Ok(after),
        _ => Err(CliError::Usage(usage)),
    }
}

/// Splits around the first unquoted whole-word `keyword`
pub fn split_at_keyword<'a>(text: &'a str, keyword: &str) -> Option<(&'a str, &'a str)> {
    let start = find_keyword(text, keyword)?;
    Some((&text[..start], &text[start + keyword.len()..]))
}

/// Byte offset of the first unquoted, whole-word, case-insensitive match.
///
/// A keyword may be followed directly by `(`, as in `values(1, 2)`.
pub fn find_keyword(text: &str, keyword: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut at_word_start = true;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            at_word_start = false;
            continue;
        }
        if let Some(q) = quote {
            if q == '"' && c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            at_word_start = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' | '"' => quote = Some(c),
            _ if at_word_start && keyword_at(&text[i..], keyword) => return Some(i),
            _ => {}
        }
        at_word_start = c.is_whitespace();
    }
    None
}

fn keyword_at(rest: &str, keyword: &str) -> bool {
    let head_matches = rest
        .get(..keyword.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(keyword));
    head_matches
        && rest[keyword.len()..]
            .chars()
            .next()
            .map_or(true, |next| next.is_whitespace() || next == '(')
}

/// Words of `text` with quoting removed; commas are ignored
fn words(text: &str, usage: &'static str) -> CliResult<Vec<String>> {
    let mut out = Vec::new();
    for token in tokenize(text)? {
        match token {
            Token::Word(w) | Token::Quoted(w) => out.push(w),
            Token::Comma => {}
            Token::Equals => return Err(CliError::Usage(usage)),
        }
    }
    Ok(out)
}

fn single_word(text: &str, usage: &'static str) -> CliResult<String> {
    let mut words = words(text, usage)?;
    if words.len() != 1 {
        return Err(CliError::Usage(usage));
    }
    Ok(words.remove(0))
}
