//! Error types for color parsing.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// A character that is not a hex digit.
    #[error("invalid hex digit {digit:?} in color: {input}")]
    InvalidHex { input: String, digit: char },

    /// Hex colors must have exactly 3 or 6 digits.
    #[error("invalid hex color length {len}: {input}")]
    InvalidLength { input: String, len: usize },
}
