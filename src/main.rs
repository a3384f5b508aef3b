//! jvm-options: assemble JVM launch options
//!
//! Reads `jvm.options` plus `jvm.options.d/*.options`, keeps the lines that
//! apply to the target Java major version, and prints the result on one line.

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    jvm_options::cli::run()
}
