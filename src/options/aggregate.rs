//! Multi-file aggregation
//!
//! Files are processed strictly in discovery order. The first file with any
//! invalid line aborts the whole run; files after it are never opened.

use crate::error::OptionsError;
use crate::options::discover::discover_options_files;
use crate::options::parser::{parse_options, ParseOutcome};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse one options file from disk.
///
/// The file handle is dropped before this returns.
pub fn parse_options_file(path: &Path, java_major_version: u32) -> Result<ParseOutcome, OptionsError> {
    let file = File::open(path).map_err(|e| OptionsError::io(path, e))?;
    parse_options(BufReader::new(file), java_major_version).map_err(|e| OptionsError::io(path, e))
}

/// Read every options file under `config` and concatenate their options.
pub fn read_options_files(config: &Path, java_major_version: u32) -> Result<Vec<String>, OptionsError> {
    let mut options = Vec::new();

    for path in discover_options_files(config) {
        let outcome = parse_options_file(&path, java_major_version)?;
        if !outcome.is_valid() {
            tracing::debug!(
                "{} invalid line(s) in {}, aborting",
                outcome.invalid_lines.len(),
                path.display()
            );
            return Err(OptionsError::InvalidLines { file: path, invalid_lines: outcome.invalid_lines });
        }
        tracing::debug!("{} option(s) from {}", outcome.options.len(), path.display());
        options.extend(outcome.options);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn drop_in_dir(root: &Path) -> std::path::PathBuf {
        let d = root.join("jvm.options.d");
        fs::create_dir_all(&d).expect("mkdir");
        d
    }

    #[test]
    fn primary_options_precede_drop_ins() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("jvm.options"), "-Xms1g\n11-:-Xmx2g\n").expect("write");
        fs::write(drop_in_dir(tmp.path()).join("a.options"), "-ea\n8:-Xloggc:gc.log\n")
            .expect("write");

        let options = read_options_files(tmp.path(), 11).expect("options");
        assert_eq!(options, vec!["-Xms1g", "-Xmx2g", "-ea"]);
    }

    #[test]
    fn drop_ins_apply_in_lexical_order() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("jvm.options"), "").expect("write");
        let d = drop_in_dir(tmp.path());
        fs::write(d.join("b.options"), "-Dfrom=b\n").expect("write b");
        fs::write(d.join("a.options"), "-Dfrom=a\n").expect("write a");

        let options = read_options_files(tmp.path(), 17).expect("options");
        assert_eq!(options, vec!["-Dfrom=a", "-Dfrom=b"]);
    }

    #[test]
    fn invalid_file_aborts_before_later_files() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("jvm.options"), "-Xms1g\nnot an option\n9-8:-Xmx2g\n")
            .expect("write");
        let d = drop_in_dir(tmp.path());
        // A later file that would fail to read if it were ever touched.
        fs::create_dir(d.join("z.options")).expect("mkdir z.options");

        match read_options_files(tmp.path(), 11) {
            Err(OptionsError::InvalidLines { file, invalid_lines }) => {
                assert_eq!(file, tmp.path().join("jvm.options"));
                let lines: Vec<_> = invalid_lines.into_iter().collect();
                assert_eq!(
                    lines,
                    vec![(2, "not an option".to_string()), (3, "9-8:-Xmx2g".to_string())]
                );
            }
            other => panic!("expected invalid lines error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_drop_in_discards_everything() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("jvm.options"), "-Xms1g\n").expect("write");
        let d = drop_in_dir(tmp.path());
        fs::write(d.join("a.options"), "-ea\nbogus\n").expect("write a");
        fs::write(d.join("b.options"), "also bogus\n").expect("write b");

        let err = read_options_files(tmp.path(), 11).expect_err("should fail");
        match err {
            OptionsError::InvalidLines { file, invalid_lines } => {
                assert_eq!(file, d.join("a.options"));
                assert_eq!(invalid_lines.len(), 1);
                assert_eq!(invalid_lines.get(&2).map(String::as_str), Some("bogus"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_primary_is_an_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = read_options_files(tmp.path(), 11).expect_err("should fail");
        assert!(matches!(err, OptionsError::Io { ref path, .. } if path == &tmp.path().join("jvm.options")));
    }

    #[test]
    fn single_file_root_with_sibling_drop_ins() {
        let tmp = TempDir::new().expect("tmp");
        let primary = tmp.path().join("custom.options");
        fs::write(&primary, "-Xss1m\n").expect("write");
        fs::write(drop_in_dir(tmp.path()).join("gc.options"), "-XX:+UseG1GC\n").expect("write");

        let options = read_options_files(&primary, 21).expect("options");
        assert_eq!(options, vec!["-Xss1m", "-XX:+UseG1GC"]);
    }
}
