//! Operation timing

use std::time::{Duration, Instant};

use super::events::Event;
use super::logger::{Logger, Severity};

/// A simple duration timer for logging elapsed time
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get elapsed milliseconds with microsecond precision, e.g. `0.042`
    pub fn elapsed_ms(&self) -> String {
        format!("{:.3}", self.elapsed().as_secs_f64() * 1000.0)
    }

    /// Logs `OPERATION_TIMED` for `operation` at INFO level
    pub fn finish(self, operation: &str) {
        let elapsed = self.elapsed_ms();
        Logger::log(
            Severity::Info,
            Event::OperationTimed.as_str(),
            &[("operation", operation), ("elapsed_ms", elapsed.as_str())],
        );
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
