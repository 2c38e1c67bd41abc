//! CLI argument definitions using clap
//!
//! Commands:
//! - primdb [--config <path>] [--data-dir <dir>] [--yes] [repl]
//! - primdb [--config <path>] [--data-dir <dir>] [--yes] exec "<command>"

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// primdb - a small file-backed table store with a line command language
#[derive(Parser, Debug)]
#[command(name = "primdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default: ./primdb.json, optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding db_meta.json and the row files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Skip confirmation prompts for drop_table and delete
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read commands interactively until `exit` or end of input
    Repl,

    /// Execute a single command and exit
    Exec {
        /// The command line, e.g. "select from books where year = 1937"
        command: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_repl() {
        let cli = Cli::try_parse_from(["primdb"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.yes);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_exec_with_flags() {
        let cli = Cli::try_parse_from([
            "primdb",
            "--data-dir",
            "/tmp/db",
            "exec",
            "--yes",
            "drop_table books",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/db")));
        assert!(cli.yes);
        assert_eq!(
            cli.command,
            Some(Command::Exec {
                command: "drop_table books".into()
            })
        );
    }

    #[test]
    fn test_exec_requires_command() {
        assert!(Cli::try_parse_from(["primdb", "exec"]).is_err());
    }
}
