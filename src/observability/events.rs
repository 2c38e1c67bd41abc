//! Observable events in primdb

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Interactive loop started
    ReplStart,
    /// Interactive loop finished
    ReplExit,
    /// Configuration loaded
    ConfigLoaded,
    /// Registry file was missing or unreadable and an empty one was used
    RegistryReset,
    /// Registry written to disk
    RegistryWritten,
    /// Row file written to disk
    RowsWritten,
    /// Row file removed
    RowsRemoved,
    /// Table created
    TableCreated,
    /// Table dropped
    TableDropped,
    /// A command failed and was reported to the user
    CommandFailed,
    /// A destructive command was cancelled at the prompt
    CommandCancelled,
    /// Elapsed time of a data operation
    OperationTimed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ReplStart => "REPL_START",
            Event::ReplExit => "REPL_EXIT",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RegistryReset => "REGISTRY_RESET",
            Event::RegistryWritten => "REGISTRY_WRITTEN",
            Event::RowsWritten => "ROWS_WRITTEN",
            Event::RowsRemoved => "ROWS_REMOVED",
            Event::TableCreated => "TABLE_CREATED",
            Event::TableDropped => "TABLE_DROPPED",
            Event::CommandFailed => "COMMAND_FAILED",
            Event::CommandCancelled => "COMMAND_CANCELLED",
            Event::OperationTimed => "OPERATION_TIMED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
