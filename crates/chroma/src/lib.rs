//! Color model for chat color codes.
//!
//! This crate provides the pieces the markup engine builds on:
//!
//! - [`Color`]: a 24-bit RGB value with hex parsing, linear interpolation and
//!   hue/saturation/brightness conversion.
//! - [`Marker`]: the host's native escape character, and the one routine that
//!   renders a color as an extended hex escape.
//!
//! # Usage
//!
//! ```
//! use chroma::{Color, Marker};
//!
//! let start = Color::parse_hex("#ff0000").unwrap();
//! let end = Color::parse_hex("#0000ff").unwrap();
//! let mid = Color::lerp(start, end, 0.5);
//! assert_eq!(mid, Color::rgb(128, 0, 128));
//!
//! assert_eq!(Marker::SECTION.escape(mid), "§x§8§0§0§0§8§0");
//! ```

pub mod color;
pub mod error;
pub mod escape;

pub use color::Color;
pub use error::ColorParseError;
pub use escape::{HEX_CODE, HEX_ESCAPE_LEN, Marker};
