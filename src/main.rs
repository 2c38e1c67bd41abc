//! primdb CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. Any error that escapes
//! is printed to stderr and the process exits non-zero.

use primdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
