//! Line-oriented console I/O
//!
//! Input and output are injected so the session can be driven from tests.

use std::io::{self, BufRead, Write};

/// Reader/writer pair the session talks through
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` without a newline and reads one line.
    ///
    /// Returns `None` at end of input.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Asks `Are you sure you want to <action>? [y/n]`.
    ///
    /// Only `y` (any case) confirms; end of input cancels.
    pub fn confirm(&mut self, action: &str) -> io::Result<bool> {
        let question = format!("Are you sure you want to {}? [y/n]: ", action);
        match self.prompt(&question)? {
            Some(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
            None => {
                writeln!(self.output)?;
                Ok(false)
            }
        }
    }

    /// Writes one line
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes a block that already ends lines itself
    pub fn block(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Gives the writer back, used by tests to inspect output
    pub fn into_output(self) -> W {
        self.output
    }
}
