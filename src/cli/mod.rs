//! Command-line interface for jvm-options
//!
//! Takes a configuration root and prints the assembled JVM options on one line.

use anyhow::Result;
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, LauncherConfig};
use crate::error::OptionsError;
use crate::options::{collect_env_overrides, JvmOptionsBuilder};
use crate::version::parse_java_major_version;

mod launcher;
mod report;
mod utils;

use launcher::{env_var, err_println, out_println};
use report::invalid_lines_report;
use utils::parse_key_value;

/// Assemble JVM options from jvm.options and jvm.options.d
#[derive(Parser)]
#[command(name = "jvm-options")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration root: a directory containing jvm.options, or an options file
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Runtime version string used to evaluate version-gated lines (e.g. 17.0.2, 1.8.0_292)
    #[arg(long, value_name = "VERSION", env = "JAVA_VERSION")]
    java_version: Option<String>,

    /// Extra placeholder binding, repeatable; wins over environment bindings
    #[arg(short = 's', long = "substitute", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    substitutions: Vec<(String, String)>,

    /// Launcher config file (TOML or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    // Logs go to stderr so stdout carries only the option line.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = load_config(cli.config.as_deref())?;

    let version_string =
        cli.java_version.clone().or_else(|| config.java_version.clone()).unwrap_or_default();
    let java_major_version = parse_java_major_version(&version_string)?;
    tracing::debug!("using java major version {} (from '{}')", java_major_version, version_string);

    let builder = JvmOptionsBuilder::new(&cli.path)
        .java_major_version(java_major_version)
        .env_overrides(collect_env_overrides(&config.override_env_vars, env_var))
        .substitutions(substitutions(&cli, &config));

    match builder.build() {
        Ok(options) => {
            out_println(&options.join(" "));
            Ok(ExitCode::SUCCESS)
        }
        Err(OptionsError::InvalidLines { file, invalid_lines }) => {
            for line in invalid_lines_report(&file, &invalid_lines) {
                err_println(&line);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Failed assembling options from {}", cli.path.display()))),
    }
}

/// Environment bindings first, then `--substitute` pairs on top.
fn substitutions(cli: &Cli, config: &LauncherConfig) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = config
        .substitution_env_vars
        .iter()
        .filter_map(|name| env_var(name).map(|value| (name.clone(), value)))
        .collect();
    map.extend(cli.substitutions.iter().cloned());
    map
}
