//! Launcher configuration
//!
//! Controls which environment variables feed overrides and placeholder
//! bindings. Precedence for the runtime version is CLI > Env > File > Defaults.

pub mod loader;

pub use loader::load_config;

use crate::options::DEFAULT_OVERRIDE_ENV_VARS;
use serde::Deserialize;

/// Placeholders bound from the environment variable of the same name.
pub const DEFAULT_SUBSTITUTION_ENV_VARS: [&str; 1] = ["ES_PATH_CONF"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Variables whose whitespace-separated values are appended as options, in order
    pub override_env_vars: Vec<String>,
    /// Variables bound to the `${NAME}` placeholder of the same name when set
    pub substitution_env_vars: Vec<String>,
    /// Runtime version string used when neither `--java-version` nor `JAVA_VERSION` is given
    pub java_version: Option<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            override_env_vars: DEFAULT_OVERRIDE_ENV_VARS.iter().map(|s| s.to_string()).collect(),
            substitution_env_vars: DEFAULT_SUBSTITUTION_ENV_VARS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            java_version: None,
        }
    }
}
