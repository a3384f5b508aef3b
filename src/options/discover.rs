//! Options file discovery
//!
//! A configuration root is either a directory holding `jvm.options`, or the
//! primary options file itself. Drop-in files live next to the primary in
//! `jvm.options.d/` and are applied after it in path order.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const PRIMARY_FILE_NAME: &str = "jvm.options";
pub const DROP_IN_DIR_NAME: &str = "jvm.options.d";
pub const DROP_IN_SUFFIX: &str = ".options";

/// Resolve the ordered list of options files for `config`.
///
/// The primary file comes first whether or not it exists; opening it is left
/// to the caller. A missing drop-in directory contributes nothing.
pub fn discover_options_files(config: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let drop_in_dir = if config.is_dir() {
        files.push(config.join(PRIMARY_FILE_NAME));
        Some(config.join(DROP_IN_DIR_NAME))
    } else if config.is_file() {
        files.push(config.to_path_buf());
        let parent = config.parent().unwrap_or_else(|| Path::new(""));
        Some(parent.join(DROP_IN_DIR_NAME))
    } else {
        tracing::debug!("config root {} is neither a file nor a directory", config.display());
        None
    };

    if let Some(dir) = drop_in_dir.filter(|dir| dir.is_dir()) {
        files.extend(drop_in_files(&dir));
    }

    tracing::debug!("discovered {} options file(s) under {}", files.len(), config.display());
    files
}

/// Entries directly inside `dir` whose name ends in `.options`, sorted by path.
fn drop_in_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| {
            entry.file_name().to_str().is_some_and(|name| name.ends_with(DROP_IN_SUFFIX))
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}
