//! Effect synthesizers.
//!
//! Each effect walks a span of text and emits one color escape per printable
//! unit. A printable unit is an extended grapheme cluster, so a base character
//! and its combining marks always share a color.

mod gradient;
mod rainbow;

use chroma::{Color, Marker};
use unicode_segmentation::UnicodeSegmentation;

use crate::format::Formats;

pub use gradient::{gradient_colors, synthesize_gradient};
pub use rainbow::{rainbow_colors, rainbow_hue, synthesize_rainbow};

/// A piece of span body after inline codes have been resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Piece<'a> {
    /// One printable unit.
    Glyph(&'a str),
    /// Formats that stay on for the following glyphs.
    Format(Formats),
    /// Clears the sticky formats.
    Reset,
}

/// Split plain text into glyph pieces.
pub(crate) fn glyphs(text: &str) -> impl Iterator<Item = Piece<'_>> {
    text.graphemes(true).map(Piece::Glyph)
}

pub(crate) fn glyph_count(pieces: &[Piece<'_>]) -> usize {
    pieces
        .iter()
        .filter(|piece| matches!(piece, Piece::Glyph(_)))
        .count()
}

/// Write `pieces` to `out`, one color per glyph.
///
/// Every glyph is preceded by its color escape and then by the active
/// formats. Escapes are never merged, even for repeated colors.
pub(crate) fn paint(out: &mut String, pieces: &[Piece<'_>], colors: &[Color], marker: Marker) {
    let mut colors = colors.iter();
    let mut active = Formats::empty();

    for piece in pieces {
        match *piece {
            Piece::Glyph(glyph) => {
                if let Some(color) = colors.next() {
                    marker.write_escape(out, *color);
                }
                for code in active.codes() {
                    marker.write_code(out, code);
                }
                out.push_str(glyph);
            }
            Piece::Format(formats) => active |= formats,
            Piece::Reset => active = Formats::empty(),
        }
    }
}
