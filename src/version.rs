//! Java runtime version handling

use crate::error::OptionsError;

/// Major version assumed when no version string is available.
pub const FALLBACK_MAJOR_VERSION: u32 = 8;

/// Extract the major version from a `java.version` style string.
///
/// Handles legacy `1.x` versions (`1.8.0_292` → 8), dotted versions
/// (`11.0.2` → 11), pre-release and build suffixes (`17-ea`, `22+36` → 17, 22),
/// bare numbers, and distribution prefixes such as `jdk-17.0.9+9` or
/// `jdk8u392-b08`. An empty string falls back to [`FALLBACK_MAJOR_VERSION`].
pub fn parse_java_major_version(version: &str) -> Result<u32, OptionsError> {
    let version = version.trim();
    if version.is_empty() {
        return Ok(FALLBACK_MAJOR_VERSION);
    }

    let numeric = version.trim_start_matches(|c: char| !c.is_ascii_digit());
    let numeric = numeric.strip_prefix("1.").unwrap_or(numeric);
    let digits = numeric.find(|c: char| !c.is_ascii_digit()).map_or(numeric, |end| &numeric[..end]);

    digits.parse().map_err(|_| OptionsError::InvalidJavaVersion(version.to_string()))
}
