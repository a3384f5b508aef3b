//! Shared helpers

pub mod encoding;

pub use encoding::lossy_lines;
