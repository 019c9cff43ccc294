//! Formatting codes.
//!
//! The host understands three families of single character codes after the
//! marker: colors (`0-9`, `a-f`), formats (`k-o`) and reset (`r`).

use bitflags::bitflags;

bitflags! {
    /// Non-color formatting codes.
    ///
    /// The host clears formats whenever a color code is applied, so inside
    /// an effect span the active formats have to be repeated after every
    /// color escape.
    ///
    /// # Example
    ///
    /// ```
    /// use chromatag::Formats;
    ///
    /// let mut formats = Formats::empty();
    /// formats |= Formats::from_code('l').unwrap();
    /// formats |= Formats::from_code('O').unwrap();
    ///
    /// assert_eq!(formats.codes().collect::<String>(), "lo");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Formats: u8 {
        /// `k`
        const OBFUSCATED    = 0b0000_0001;
        /// `l`
        const BOLD          = 0b0000_0010;
        /// `m`
        const STRIKETHROUGH = 0b0000_0100;
        /// `n`
        const UNDERLINE     = 0b0000_1000;
        /// `o`
        const ITALIC        = 0b0001_0000;
    }
}

const FORMAT_CODES: [(Formats, char); 5] = [
    (Formats::OBFUSCATED, 'k'),
    (Formats::BOLD, 'l'),
    (Formats::STRIKETHROUGH, 'm'),
    (Formats::UNDERLINE, 'n'),
    (Formats::ITALIC, 'o'),
];

impl Formats {
    /// Look up the format for a code character (case-insensitive).
    pub fn from_code(code: char) -> Option<Formats> {
        let code = code.to_ascii_lowercase();
        FORMAT_CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(format, _)| *format)
    }

    /// The code characters of the set formats, in `k..o` order.
    pub fn codes(self) -> impl Iterator<Item = char> {
        FORMAT_CODES
            .into_iter()
            .filter(move |(format, _)| self.contains(*format))
            .map(|(_, c)| c)
    }
}

/// What a single code character does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeKind {
    /// `0-9`, `a-f`
    Color,
    /// `k-o`
    Format(Formats),
    /// `r`
    Reset,
}

impl CodeKind {
    /// Classify a code character; `None` if the host does not know it.
    pub fn of(code: char) -> Option<CodeKind> {
        match code.to_ascii_lowercase() {
            '0'..='9' | 'a'..='f' => Some(CodeKind::Color),
            'r' => Some(CodeKind::Reset),
            c => Formats::from_code(c).map(CodeKind::Format),
        }
    }
}

/// Returns true if `code` may follow a marker as a standard code.
pub fn is_standard_code(code: char) -> bool {
    CodeKind::of(code).is_some()
}
