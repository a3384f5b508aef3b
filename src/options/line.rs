//! Single-line grammar for options files
//!
//! A line is either a comment (`#...`), blank, or an option starting with `-`,
//! optionally gated by a major-version prefix:
//!
//! - `-Xmx2g` applies to every version
//! - `11:-Xmx2g` applies to version 11 only
//! - `11-:-Xmx2g` applies to version 11 and later
//! - `11-17:-Xmx2g` applies to versions 11 through 17 inclusive

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` would accept any Unicode decimal digit.
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<start>[0-9]+)(?P<range>-)?(?P<end>[0-9]+)?:)?(?P<option>-.*)$")
        .expect("valid regex")
});

/// Largest accepted bound; prefixes are signed 32-bit integers.
pub const MAX_BOUND: u32 = i32::MAX as u32;

/// Inclusive range of major versions an option applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub lower: u32,
    pub upper: u32,
}

impl VersionRange {
    /// Build a range, rejecting `upper < lower`.
    pub fn new(lower: u32, upper: u32) -> Option<Self> {
        (lower <= upper).then_some(Self { lower, upper })
    }

    pub fn exactly(version: u32) -> Self {
        Self { lower: version, upper: version }
    }

    pub fn at_least(lower: u32) -> Self {
        Self { lower, upper: MAX_BOUND }
    }

    pub fn contains(&self, version: u32) -> bool {
        self.lower <= version && version <= self.upper
    }
}

/// Classification of one line of an options file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionLine<'a> {
    Comment,
    Blank,
    Unconditional(&'a str),
    Conditional { range: VersionRange, option: &'a str },
    Invalid,
}

impl<'a> OptionLine<'a> {
    /// Classify `line`, which must not carry its trailing newline.
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with('#') {
            return Self::Comment;
        }
        if line.bytes().all(is_blank_byte) {
            return Self::Blank;
        }

        let Some(caps) = OPTION_LINE.captures(line) else {
            return Self::Invalid;
        };
        let option = caps.name("option").map_or("", |m| m.as_str());

        let Some(start) = caps.name("start") else {
            return Self::Unconditional(option);
        };
        let Some(lower) = parse_bound(start.as_str()) else {
            return Self::Invalid;
        };

        let range = if caps.name("range").is_none() {
            VersionRange::exactly(lower)
        } else if let Some(end) = caps.name("end") {
            let Some(upper) = parse_bound(end.as_str()) else {
                return Self::Invalid;
            };
            match VersionRange::new(lower, upper) {
                Some(range) => range,
                None => return Self::Invalid,
            }
        } else {
            VersionRange::at_least(lower)
        };

        Self::Conditional { range, option }
    }

    /// The option text to apply for `version`, if any.
    pub fn option_for(&self, version: u32) -> Option<&'a str> {
        match *self {
            Self::Unconditional(option) => Some(option),
            Self::Conditional { range, option } if range.contains(version) => Some(option),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// ASCII whitespace as matched by a `\s` class, vertical tab included.
fn is_blank_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

fn parse_bound(digits: &str) -> Option<u32> {
    digits.parse::<i32>().ok().map(|n| n as u32)
}
