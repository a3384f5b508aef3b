//! Shared CLI utilities.

/// Parse a `KEY=VALUE` placeholder binding. The value may itself contain `=`.
pub fn parse_key_value(value: &str) -> Result<(String, String), String> {
    let (key, val) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{value}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty placeholder name in '{value}'"));
    }
    Ok((key.to_string(), val.to_string()))
}
