//! Process-level side effects: environment reads and console output.
//!
//! Everything else in the crate is a pure function of its inputs.

use std::io::Write;

/// Read an environment variable, treating unset and non-UTF-8 values alike.
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

// Write failures (e.g. a closed pipe) are ignored, as a plain println to a
// broken stream would be; the exit code already reports the outcome.

/// Print a line to standard output.
pub fn out_println(message: &str) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{message}");
    let _ = out.flush();
}

/// Print a line to standard error.
pub fn err_println(message: &str) {
    let _ = writeln!(std::io::stderr().lock(), "{message}");
}
