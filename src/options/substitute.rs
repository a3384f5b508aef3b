//! `${name}` placeholder substitution

use std::collections::BTreeMap;

/// Replace `${key}` with its value in every option that contains a placeholder.
///
/// Replacement is literal, not recursive, and applied in key order. Unknown
/// placeholders are left as-is.
pub fn substitute_placeholders(options: &[String], substitutions: &BTreeMap<String, String>) -> Vec<String> {
    let placeholders: Vec<(String, &str)> =
        substitutions.iter().map(|(key, value)| (format!("${{{key}}}"), value.as_str())).collect();

    options
        .iter()
        .map(|option| {
            if !has_placeholder(option) {
                return option.clone();
            }
            placeholders
                .iter()
                .fold(option.clone(), |acc, (placeholder, value)| acc.replace(placeholder.as_str(), value))
        })
        .collect()
}

fn has_placeholder(option: &str) -> bool {
    option.find("${").is_some_and(|start| option[start..].contains('}'))
}
