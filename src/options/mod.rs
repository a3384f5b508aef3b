//! JVM options assembly
//!
//! Reads `jvm.options` and its `jvm.options.d/*.options` drop-ins, filters
//! lines by major version, appends environment overrides, and substitutes
//! `${placeholders}`.

pub mod aggregate;
pub mod discover;
pub mod line;
pub mod overrides;
pub mod parser;
pub mod substitute;

pub use aggregate::{parse_options_file, read_options_files};
pub use discover::discover_options_files;
pub use line::{OptionLine, VersionRange};
pub use overrides::{collect_env_overrides, DEFAULT_OVERRIDE_ENV_VARS};
pub use parser::{parse_options, ParseOutcome};
pub use substitute::substitute_placeholders;

use crate::error::OptionsError;
use crate::version::FALLBACK_MAJOR_VERSION;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Assembles the final option list for one configuration root.
///
/// The builder holds only plain values; reading the process environment is
/// left to the caller.
pub struct JvmOptionsBuilder {
    config: PathBuf,
    java_major_version: u32,
    env_overrides: Vec<String>,
    substitutions: BTreeMap<String, String>,
}

impl JvmOptionsBuilder {
    pub fn new(config: impl Into<PathBuf>) -> Self {
        Self {
            config: config.into(),
            java_major_version: FALLBACK_MAJOR_VERSION,
            env_overrides: Vec::new(),
            substitutions: BTreeMap::new(),
        }
    }

    /// Set the major version used to evaluate conditional lines
    pub fn java_major_version(mut self, version: u32) -> Self {
        self.java_major_version = version;
        self
    }

    /// Set tokens appended after all file-based options
    pub fn env_overrides(mut self, tokens: Vec<String>) -> Self {
        self.env_overrides = tokens;
        self
    }

    /// Set placeholder bindings, replacing any set before
    pub fn substitutions(mut self, substitutions: BTreeMap<String, String>) -> Self {
        self.substitutions = substitutions;
        self
    }

    /// Bind a single placeholder
    pub fn substitution(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.substitutions.insert(key.into(), value.into());
        self
    }

    /// Read, filter, extend and substitute.
    ///
    /// The returned list is ordered so that later entries override earlier
    /// ones; downstream stages may append to it.
    pub fn build(self) -> Result<Vec<String>, OptionsError> {
        let mut options = read_options_files(&self.config, self.java_major_version)?;
        options.extend(self.env_overrides);
        Ok(substitute_placeholders(&options, &self.substitutions))
    }
}
