//! Config file loading

use super::LauncherConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load launcher settings from `config_path`, or defaults when none is given.
pub fn load_config(config_path: Option<&Path>) -> Result<LauncherConfig> {
    let Some(config_file) = config_path else {
        return Ok(LauncherConfig::default());
    };

    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file)?,
        "yaml" | "yml" => parse_yaml_config(&content, config_file)?,
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };

    tracing::debug!("loaded launcher config from {}", config_file.display());
    Ok(parsed)
}

/// Parse TOML config, accepting either top-level keys or a `[jvm-options]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<LauncherConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("jvm-options") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, accepting either top-level keys or a `jvm-options` mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<LauncherConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("jvm-options") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}
