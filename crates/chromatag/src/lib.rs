//! Color markup transpiler for chat style renderers.
//!
//! This crate converts compact, human-writable color markup into the native
//! per-character codes of a renderer that uses a marker character (`§`) to
//! introduce formatting codes.
//!
//! # Overview
//!
//! - `&a`, `§l` - Standard codes; `&` is accepted in place of the marker
//! - `<aqua>` - Shorthand, the first letter of the word becomes the code
//! - `<#00FF00>` - Fixed hex color
//! - `<gradient:#f00:#00f>text</gradient>` - Gradient across the text
//!   (`<g>` for short, `#speed` and `:loop` optional)
//! - `<rainbow:0.8:1>text</rainbow>` - Rainbow across the text
//!   (`<r>` for short, optional `#speed`, saturation, brightness and `:loop`)
//!
//! Inside a gradient or rainbow, format codes such as `&l` stay active for
//! every following character and color codes are ignored.
//!
//! Malformed markup is never an error: it is kept in the output as text.
//!
//! # Usage
//!
//! ```
//! use chromatag::{Config, TagKinds, Transformer};
//!
//! assert_eq!(chromatag::transform("&aHello <#FF0000>World"), "§aHello §x§F§F§0§0§0§0World");
//!
//! // Only allow standard codes
//! let config = Config::default().with_tags(TagKinds::STANDARD);
//! let transformer = Transformer::new(config).unwrap();
//! assert_eq!(transformer.transform("&a<r>hi</r>"), "§a<r>hi</r>");
//! ```

pub mod config;
pub mod effects;
pub mod error;
pub mod format;
pub mod parser;
pub mod span;
pub mod transform;

// Re-export main types at crate root
pub use config::{Config, TagKinds};
pub use error::{ConfigError, TagParseError};
pub use format::Formats;
pub use span::{Effect, GradientSpec, RainbowSpec, TaggedSpan};
pub use transform::{Transformer, strip, transform};

pub use chroma::{Color, Marker};
