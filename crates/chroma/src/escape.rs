//! Rendering of native formatting codes.
//!
//! The host recognizes a single marker character (`§` by default) followed
//! by a code character. Arbitrary RGB colors use the extended form
//! `§x§R§R§G§G§B§B`, where every hex digit carries its own marker.

use std::fmt;

use crate::color::Color;

/// Code character that introduces an extended hex color.
pub const HEX_CODE: char = 'x';

/// Number of chars in one rendered hex escape (`§x` plus six `§d` pairs).
pub const HEX_ESCAPE_LEN: usize = 14;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The native escape character of the host renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker(char);

impl Marker {
    /// The section sign used by chat style renderers.
    pub const SECTION: Marker = Marker('§');

    pub const fn new(c: char) -> Self {
        Self(c)
    }

    pub const fn char(self) -> char {
        self.0
    }

    /// Marker followed by a single code character.
    ///
    /// ```
    /// use chroma::Marker;
    ///
    /// assert_eq!(Marker::SECTION.code('a'), "§a");
    /// ```
    pub fn code(self, code: char) -> String {
        let mut out = String::with_capacity(4);
        self.write_code(&mut out, code);
        out
    }

    pub fn write_code(self, out: &mut String, code: char) {
        out.push(self.0);
        out.push(code);
    }

    /// Render `color` as an extended hex escape.
    ///
    /// ```
    /// use chroma::{Color, Marker};
    ///
    /// let escape = Marker::SECTION.escape(Color::rgb(0, 255, 0));
    /// assert_eq!(escape, "§x§0§0§F§F§0§0");
    /// ```
    pub fn escape(self, color: Color) -> String {
        let mut out = String::with_capacity(HEX_ESCAPE_LEN * self.0.len_utf8());
        self.write_escape(&mut out, color);
        out
    }

    /// Append the extended hex escape for `color` to `out`.
    ///
    /// Every colored character in the output goes through this function, so
    /// hex tags, gradients and rainbows produce identical bytes for the same
    /// color.
    pub fn write_escape(self, out: &mut String, color: Color) {
        self.write_code(out, HEX_CODE);
        for channel in [color.r, color.g, color.b] {
            self.write_code(out, HEX_DIGITS[usize::from(channel >> 4)] as char);
            self.write_code(out, HEX_DIGITS[usize::from(channel & 0x0f)] as char);
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::SECTION
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
