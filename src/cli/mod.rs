//! CLI module for primdb
//!
//! Provides:
//! - repl: interactive command loop (default)
//! - exec: run one command and exit non-zero if it failed

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod render;
mod session;

pub use args::{Cli, Command};
pub use commands::{find_keyword, parse_statement, split_at_keyword, Statement, HELP};
pub use config::{Config, DEFAULT_CONFIG_PATH, SHOW_HELP_ENV};
pub use errors::{CliError, CliResult};
pub use io::Console;
pub use render::render_table;
pub use session::{Flow, Session, PROMPT};

use std::io as stdio;

use crate::observability::{log_event, Event, Logger};

/// Parses arguments, loads config and runs the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.yes {
        config.confirm_destructive = false;
    }

    Logger::set_min_severity(config.severity());
    let data_dir = config.data_dir.display().to_string();
    log_event(Event::ConfigLoaded, &[("data_dir", data_dir.as_str())]);

    let store = config.open_store();
    let stdin = stdio::stdin();
    let console = Console::new(stdin.lock(), stdio::stdout().lock());
    let mut session = Session::new(config, store, console);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => session.repl(),
        Command::Exec { command } => session.execute_line(&command).map(|_| ()),
    }
}
