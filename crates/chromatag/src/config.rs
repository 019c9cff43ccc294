//! Transformer configuration.

use bitflags::bitflags;
use chroma::Marker;

use crate::error::ConfigError;

bitflags! {
    /// The tag grammars a transformer recognizes.
    ///
    /// Hosts can narrow the set for less trusted input, for example to allow
    /// only standard codes. Markup of a disabled kind passes through as
    /// literal text.
    ///
    /// # Example
    ///
    /// ```
    /// use chromatag::{Config, TagKinds, Transformer};
    ///
    /// let config = Config::default().with_tags(TagKinds::STANDARD);
    /// let transformer = Transformer::new(config).unwrap();
    /// assert_eq!(transformer.transform("&a<#ffffff>"), "§a<#ffffff>");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagKinds: u8 {
        /// `&a`, `§l`
        const STANDARD  = 0b0000_0001;
        /// `<word>`
        const SHORTHAND = 0b0000_0010;
        /// `<#RRGGBB>`
        const HEX       = 0b0000_0100;
        /// `<gradient:#...:#...>text</gradient>`
        const GRADIENT  = 0b0000_1000;
        /// `<rainbow>text</rainbow>`
        const RAINBOW   = 0b0001_0000;

        /// Codes that can appear inside an effect span.
        const INLINE = Self::STANDARD.bits() | Self::SHORTHAND.bits() | Self::HEX.bits();
        /// Paired span tags.
        const EFFECTS = Self::GRADIENT.bits() | Self::RAINBOW.bits();
    }
}

impl Default for TagKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// Settings for a [`Transformer`](crate::Transformer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Native marker written to the output.
    pub marker: Marker,
    /// Input-friendly marker accepted in place of the native one.
    pub alternate: char,
    /// Recognized tag grammars.
    pub tags: TagKinds,
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Config {
    /// `§` output, `&` accepted as alternate, every tag kind enabled.
    pub const DEFAULT: Config = Config {
        marker: Marker::SECTION,
        alternate: '&',
        tags: TagKinds::all(),
    };

    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = Marker::new(marker);
        self
    }

    pub fn with_alternate(mut self, alternate: char) -> Self {
        self.alternate = alternate;
        self
    }

    pub fn with_tags(mut self, tags: TagKinds) -> Self {
        self.tags = tags;
        self
    }

    /// Returns true if `c` introduces a standard code.
    pub(crate) fn is_marker(&self, c: char) -> bool {
        c == self.marker.char() || c == self.alternate
    }

    /// Check that both markers can be told apart from markup and text.
    ///
    /// Markers may not be alphanumeric, whitespace, or one of the tag
    /// characters `<`, `>`, `/`, `#`, `:`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let marker = self.marker.char();
        if marker == self.alternate {
            return Err(ConfigError::MarkerCollision(marker));
        }

        for c in [marker, self.alternate] {
            if c.is_alphanumeric() || c.is_whitespace() || matches!(c, '<' | '>' | '/' | '#' | ':') {
                return Err(ConfigError::ReservedMarker(c));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.marker.char(), '§');
        assert_eq!(config.alternate, '&');
        assert_eq!(config.tags, TagKinds::all());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn markers_recognized() {
        let config = Config::default();
        assert!(config.is_marker('&'));
        assert!(config.is_marker('§'));
        assert!(!config.is_marker('$'));
    }

    #[test]
    fn tag_groups() {
        assert!(TagKinds::INLINE.contains(TagKinds::HEX));
        assert!(!TagKinds::INLINE.intersects(TagKinds::EFFECTS));
        assert_eq!(TagKinds::INLINE | TagKinds::EFFECTS, TagKinds::all());
    }
}
