//! Options supplied through environment variables such as `JAVA_OPTS`

/// Variables consulted, in order, when no launcher config overrides the list.
pub const DEFAULT_OVERRIDE_ENV_VARS: [&str; 5] =
    ["ES_JAVA_OPTS", "JAVA_OPTS", "JVM_OPTS", "JAVA_OPTIONS", "JVM_OPTIONS"];

/// Collect override tokens from each variable in `names`, in order.
///
/// `lookup` resolves a variable name to its value; unset variables are
/// skipped. Values are split on whitespace and empty tokens dropped.
pub fn collect_env_overrides<S, F>(names: &[S], lookup: F) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name.as_ref()))
        .flat_map(|value| tokenize(&value))
        .collect()
}

pub fn tokenize(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}
