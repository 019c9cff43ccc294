//! Error types for tag parsing and configuration.
//!
//! None of these escape [`transform`](crate::transform): a tag that fails to
//! parse is left in the output as literal text.

use chroma::ColorParseError;
use thiserror::Error;

/// Errors that can occur when parsing the parameters of an effect tag.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TagParseError {
    /// The tag text does not follow the tag grammar.
    #[error("malformed tag: {0}")]
    Grammar(String),

    /// A gradient needs at least two color stops.
    #[error("gradient needs at least 2 color stops, found {0}")]
    TooFewStops(usize),

    /// Invalid color stop.
    #[error("invalid color stop: {0}")]
    Color(#[from] ColorParseError),

    /// A numeric parameter that does not fit its type.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Errors that can occur when validating a [`Config`](crate::Config).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The native marker and the alternate marker must differ.
    #[error("marker and alternate marker are both {0:?}")]
    MarkerCollision(char),

    /// A marker character that would be ambiguous with tag or code syntax.
    #[error("{0:?} cannot be used as a marker")]
    ReservedMarker(char),
}
