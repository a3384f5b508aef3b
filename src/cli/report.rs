//! Rendering of invalid-line failures for standard error.

use crate::error::plural_suffix;
use std::collections::BTreeMap;
use std::path::Path;

/// One summary line followed by one numbered line per invalid entry.
pub fn invalid_lines_report(file: &Path, invalid_lines: &BTreeMap<usize, String>) -> Vec<String> {
    let count = invalid_lines.len();
    let mut lines = Vec::with_capacity(count + 1);
    lines.push(format!(
        "encountered [{}] error{} parsing [{}]",
        count,
        plural_suffix(count),
        file.display()
    ));
    for (index, (line_number, text)) in invalid_lines.iter().enumerate() {
        lines.push(format!(
            "[{}]: encountered improperly formatted option in [{}] on line number [{}]: [{}]",
            index + 1,
            file.display(),
            line_number,
            text
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_error_report() {
        let invalid = BTreeMap::from([(4, "9-8:-Xmx2g".to_string())]);
        let report = invalid_lines_report(Path::new("/etc/es/jvm.options"), &invalid);
        assert_eq!(
            report,
            vec![
                "encountered [1] error parsing [/etc/es/jvm.options]",
                "[1]: encountered improperly formatted option in [/etc/es/jvm.options] on line number [4]: [9-8:-Xmx2g]",
            ]
        );
    }

    #[test]
    fn entries_are_numbered_in_line_order() {
        let invalid = BTreeMap::from([(9, "late".to_string()), (2, "early".to_string())]);
        let report = invalid_lines_report(Path::new("a.options"), &invalid);
        assert_eq!(report[0], "encountered [2] errors parsing [a.options]");
        assert!(report[1].starts_with("[1]: ") && report[1].ends_with("line number [2]: [early]"));
        assert!(report[2].starts_with("[2]: ") && report[2].ends_with("line number [9]: [late]"));
    }
}
