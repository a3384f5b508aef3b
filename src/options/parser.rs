//! Per-file parsing
//!
//! Streams every line of one options file through [`OptionLine::classify`]
//! and splits the result into accepted options and rejected lines.

use crate::options::line::OptionLine;
use crate::utils::lossy_lines;
use std::collections::BTreeMap;
use std::io::{self, BufRead};

/// Result of parsing a single options file for one major version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Options that apply to the target version, in line order.
    pub options: Vec<String>,
    /// Rejected lines keyed by 1-based line number, holding the raw text.
    pub invalid_lines: BTreeMap<usize, String>,
}

impl ParseOutcome {
    pub fn is_valid(&self) -> bool {
        self.invalid_lines.is_empty()
    }
}

/// Parse every line of `reader` for `java_major_version`.
///
/// A malformed line is recorded and scanning continues; only read failures
/// return `Err`.
pub fn parse_options<R: BufRead>(reader: R, java_major_version: u32) -> io::Result<ParseOutcome> {
    let mut outcome = ParseOutcome::default();

    for (index, line) in lossy_lines(reader).enumerate() {
        let line = line?;
        let parsed = OptionLine::classify(&line);
        if parsed.is_invalid() {
            outcome.invalid_lines.insert(index + 1, line);
            continue;
        }
        if let Some(option) = parsed.option_for(java_major_version) {
            outcome.options.push(option.to_string());
        }
    }

    Ok(outcome)
}

/// Convenience wrapper over [`parse_options`] for in-memory text.
pub fn parse_options_str(content: &str, java_major_version: u32) -> ParseOutcome {
    // Reading from a byte slice cannot fail.
    parse_options(content.as_bytes(), java_major_version).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn filters_by_version_and_skips_comments() {
        let outcome = parse_options_str("8:-Xms1g\n9-:-Xmx2g\n# comment\n\n-XX:+UseG1GC", 11);
        assert!(outcome.is_valid());
        assert_eq!(outcome.options, vec!["-Xmx2g", "-XX:+UseG1GC"]);
    }

    #[test]
    fn same_file_for_an_older_version() {
        let outcome = parse_options_str("8:-Xms1g\n9-:-Xmx2g\n# comment\n\n-XX:+UseG1GC", 8);
        assert_eq!(outcome.options, vec!["-Xms1g", "-XX:+UseG1GC"]);
    }

    #[test]
    fn conflicting_options_are_all_kept_in_order() {
        let outcome = parse_options_str("-Xmx1g\n11-:-Xmx4g\n-Xmx2g\n", 17);
        assert_eq!(outcome.options, vec!["-Xmx1g", "-Xmx4g", "-Xmx2g"]);
    }

    #[test]
    fn invalid_lines_are_collected_with_line_numbers() {
        let content = "-Xms1g\nbogus\n# fine\n9-8:-Xmx2g\nabc:-ea\n-Xmx1g\n";
        let outcome = parse_options_str(content, 11);
        assert!(!outcome.is_valid());

        let invalid: Vec<(usize, &str)> =
            outcome.invalid_lines.iter().map(|(n, l)| (*n, l.as_str())).collect();
        assert_eq!(invalid, vec![(2, "bogus"), (4, "9-8:-Xmx2g"), (5, "abc:-ea")]);
        // scanning continued past the bad lines
        assert_eq!(outcome.options, vec!["-Xms1g", "-Xmx1g"]);
    }

    #[test]
    fn inverted_range_is_reported_even_when_version_would_not_match() {
        let outcome = parse_options_str("20-10:-Xmx2g", 8);
        assert_eq!(outcome.invalid_lines.get(&1).map(String::as_str), Some("20-10:-Xmx2g"));
    }

    #[test]
    fn carriage_returns_split_lines_and_keep_numbering() {
        let outcome = parse_options_str("-Xms1g\r-Xmx1g\n-ea\r", 11);
        assert_eq!(outcome.options, vec!["-Xms1g", "-Xmx1g", "-ea"]);

        let outcome = parse_options_str("-Xms1g\rbogus\r\n-ea", 11);
        assert_eq!(outcome.invalid_lines.get(&2).map(String::as_str), Some("bogus"));
        assert_eq!(outcome.options, vec!["-Xms1g", "-ea"]);
    }

    #[test]
    fn empty_input_is_valid_and_empty() {
        let outcome = parse_options_str("", 11);
        assert!(outcome.is_valid());
        assert!(outcome.options.is_empty());
    }
}
