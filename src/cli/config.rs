//! Configuration file handling
//!
//! The file is optional JSON; every field has a default:
//!
//! ```json
//! {
//!   "data_dir": ".",
//!   "meta_file": "db_meta.json",
//!   "rows_dir": "data",
//!   "show_help": true,
//!   "confirm_destructive": true,
//!   "log_timings": false,
//!   "log_level": "warn"
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::storage::{JsonStore, META_FILE, ROWS_DIR};

use super::errors::{CliError, CliResult};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./primdb.json";

/// Environment variable that hides the startup help unless set to `1`
pub const SHOW_HELP_ENV: &str = "DB_SHOW_HELP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the registry file and the row directory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Registry file name inside `data_dir`
    #[serde(default = "default_meta_file")]
    pub meta_file: String,

    /// Row directory name inside `data_dir`
    #[serde(default = "default_rows_dir")]
    pub rows_dir: String,

    /// Print the command list when the REPL starts
    #[serde(default = "default_true")]
    pub show_help: bool,

    /// Ask before drop_table and delete
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,

    /// Log OPERATION_TIMED for data commands
    #[serde(default)]
    pub log_timings: bool,

    /// Minimum log severity: trace, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_meta_file() -> String {
    META_FILE.to_string()
}
fn default_rows_dir() -> String {
    ROWS_DIR.to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            meta_file: default_meta_file(),
            rows_dir: default_rows_dir(),
            show_help: true,
            confirm_destructive: true,
            log_timings: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// With no explicit path, a missing default file means defaults. An
    /// explicit path must exist.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound && !explicit => {
                return Ok(Config::default())
            }
            Err(e) => {
                return Err(CliError::Config(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Self::from_json(&content)
    }

    /// Parses and validates a JSON config document
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::Config(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.log_level
            .parse::<Severity>()
            .map_err(CliError::Config)?;

        for (field, value) in [("meta_file", &self.meta_file), ("rows_dir", &self.rows_dir)] {
            if value.trim().is_empty() || value.contains(['/', '\\']) || value == ".." {
                return Err(CliError::Config(format!(
                    "{} must be a plain file name, got '{}'",
                    field, value
                )));
            }
        }

        if self.meta_file == self.rows_dir {
            return Err(CliError::Config(
                "meta_file and rows_dir must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Applies `DB_SHOW_HELP` from the process environment
    pub fn apply_env(&mut self) {
        self.apply_show_help(std::env::var(SHOW_HELP_ENV).ok().as_deref());
    }

    /// Help stays on only when the variable is unset or exactly `1`
    fn apply_show_help(&mut self, value: Option<&str>) {
        if let Some(value) = value {
            self.show_help = value == "1";
        }
    }

    /// Minimum severity to log. Timing events are INFO, so `log_timings`
    /// lowers a stricter threshold to INFO.
    pub fn severity(&self) -> Severity {
        let configured = self.log_level.parse().unwrap_or(Severity::Warn);
        if self.log_timings {
            configured.min(Severity::Info)
        } else {
            configured
        }
    }

    /// Opens the JSON store described by this config
    pub fn open_store(&self) -> JsonStore {
        JsonStore::with_layout(&self.data_dir, &self.meta_file, &self.rows_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.meta_file, "db_meta.json");
        assert_eq!(config.rows_dir, "data");
        assert!(config.show_help);
        assert!(config.confirm_destructive);
    }

    #[test]
    fn test_partial_config() {
        let config =
            Config::from_json(r#"{"data_dir": "/var/primdb", "confirm_destructive": false}"#)
                .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/primdb"));
        assert!(!config.confirm_destructive);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_json(r#"{"log_level": "loud"}"#).is_err());
        assert!(Config::from_json(r#"{"meta_file": "../meta.json"}"#).is_err());
        assert!(Config::from_json(r#"{"rows_dir": ""}"#).is_err());
        assert!(Config::from_json(r#"{"meta_file": "x", "rows_dir": "x"}"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code(), "PRIMDB_CLI_CONFIG");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("primdb.json");
        fs::write(&path, r#"{"log_timings": true}"#).unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert!(config.log_timings);
    }

    #[test]
    fn test_show_help_env() {
        let mut config = Config::default();
        config.apply_show_help(None);
        assert!(config.show_help);
        config.apply_show_help(Some("1"));
        assert!(config.show_help);
        config.apply_show_help(Some("0"));
        assert!(!config.show_help);
    }

    #[test]
    fn test_severity_with_timings() {
        let mut config = Config::default();
        assert_eq!(config.severity(), Severity::Warn);
        config.log_timings = true;
        assert_eq!(config.severity(), Severity::Info);
        config.log_level = "trace".into();
        assert_eq!(config.severity(), Severity::Trace);
    }
}
