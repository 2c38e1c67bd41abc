//! Command dispatch
//!
//! A [`Session`] owns the config, the gateway and the console. Each line is
//! parsed, confirmed if destructive, executed against a fresh
//! [`CommandContext`], optionally timed, and its result written out. Errors
//! from the core are turned into a single `Error: <message>` line here and
//! nowhere else.

use std::io::{BufRead, Write};

use crate::engine::CommandContext;
use crate::observability::{log_event, log_event_at, Event, Severity, Timer};
use crate::schema::describe_columns;
use crate::storage::Gateway;

use super::commands::{parse_statement, Statement, HELP};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::Console;
use super::render::render_table;

/// REPL prompt
pub const PROMPT: &str = "primdb> ";

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<G: Gateway, R: BufRead, W: Write> {
    config: Config,
    gateway: G,
    console: Console<R, W>,
}

impl<G: Gateway, R: BufRead, W: Write> Session<G, R, W> {
    pub fn new(config: Config, gateway: G, console: Console<R, W>) -> Self {
        Self {
            config,
            gateway,
            console,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Ends the session and returns the console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Reads and runs commands until `exit` or end of input
    pub fn repl(&mut self) -> CliResult<()> {
        log_event(Event::ReplStart, &[]);
        self.console.line("*** primdb ***")?;
        if self.config.show_help {
            self.console.block(HELP)?;
        }

        loop {
            let line = match self.console.prompt(PROMPT)? {
                Some(line) => line,
                None => {
                    self.console.line("")?;
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        log_event(Event::ReplExit, &[]);
        Ok(())
    }

    /// Runs one line, reporting any non-fatal error as `Error: <message>`
    pub fn handle_line(&mut self, line: &str) -> CliResult<Flow> {
        match self.execute_line(line) {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs one line and returns its error unreported
    pub fn execute_line(&mut self, line: &str) -> CliResult<Flow> {
        let statement = parse_statement(line)?;
        let verb = statement.verb();

        if let Some(action) = statement.confirmation() {
            if self.config.confirm_destructive && !self.console.confirm(&action)? {
                log_event(Event::CommandCancelled, &[("command", verb)]);
                self.console.line("Operation cancelled.")?;
                return Ok(Flow::Continue);
            }
        }

        let timer = (self.config.log_timings && statement.is_data_operation()).then(Timer::new);
        let flow = self.execute(statement)?;
        if let Some(timer) = timer {
            timer.finish(verb);
        }
        Ok(flow)
    }

    fn report(&mut self, error: &CliError) -> CliResult<()> {
        let message = error.to_string();
        log_event_at(
            Severity::Warn,
            Event::CommandFailed,
            &[("code", error.code()), ("message", message.as_str())],
        );
        self.console.line(&format!("Error: {}", message))?;
        Ok(())
    }

    fn execute(&mut self, statement: Statement) -> CliResult<Flow> {
        let mut ctx = CommandContext::new(&mut self.gateway);

        match statement {
            Statement::CreateTable { table, columns } => {
                let created = ctx.create_table(&table, columns.as_slice())?;
                self.console.line(&format!(
                    "Table \"{}\" created with columns: {}",
                    table,
                    describe_columns(&created)
                ))?;
            }
            Statement::DropTable { table } => {
                ctx.drop_table(&table)?;
                self.console.line(&format!("Table \"{}\" dropped.", table))?;
            }
            Statement::ListTables => {
                for name in ctx.list_tables() {
                    self.console.line(&format!("- {}", name))?;
                }
            }
            Statement::Insert { table, values } => {
                let id = ctx.insert(&table, &values)?;
                self.console.line(&format!(
                    "Row with ID={} added to table \"{}\".",
                    id, table
                ))?;
            }
            Statement::Select { table, predicate } => {
                let rows = ctx.select(&table, predicate.as_ref())?;
                let headers: Vec<&str> = ctx
                    .columns(&table)?
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect();
                self.console.block(&render_table(&headers, &rows))?;
            }
            Statement::Update {
                table,
                assignment,
                predicate,
            } => {
                let changed = ctx.update(&table, &predicate, &assignment)?;
                self.console.line(&format!(
                    "Updated {} row(s) in table \"{}\".",
                    changed, table
                ))?;
            }
            Statement::Delete { table, predicate } => {
                let removed = ctx.delete(&table, &predicate)?;
                self.console.line(&format!(
                    "Deleted {} row(s) from table \"{}\".",
                    removed, table
                ))?;
            }
            Statement::Info { table } => {
                let info = ctx.info(&table)?;
                self.console.line(&format!("Table: {}", info.name))?;
                self.console
                    .line(&format!("Columns: {}", describe_columns(&info.columns)))?;
                self.console.line(&format!("Rows: {}", info.row_count))?;
            }
            Statement::Help => self.console.block(HELP)?,
            Statement::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }
}
