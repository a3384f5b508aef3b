//! Error types for option file processing

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    /// One or more lines in a single options file did not match the grammar.
    ///
    /// Carries every rejected line of that file, keyed by 1-based line number.
    #[error(
        "encountered [{}] error{} parsing [{}]",
        .invalid_lines.len(),
        plural_suffix(.invalid_lines.len()),
        .file.display()
    )]
    InvalidLines { file: PathBuf, invalid_lines: BTreeMap<usize, String> },

    #[error("failed reading options file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognised java version string '{0}'")]
    InvalidJavaVersion(String),
}

pub(crate) fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl OptionsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
