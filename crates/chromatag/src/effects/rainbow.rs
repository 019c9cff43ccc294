use chroma::{Color, Marker};

use super::{Piece, glyphs, paint};
use crate::span::RainbowSpec;

/// Hue in `[0, 1]` for unit `index` of a span of `len` units.
///
/// Looping rainbows cycle `max(speed, 1)` times across the text; otherwise
/// the hue sweeps once from 0 to 1.
pub fn rainbow_hue(index: usize, len: usize, spec: &RainbowSpec) -> f32 {
    let len = len.max(1);

    if spec.looping {
        let cycles = spec.speed.max(1) as f32;
        ((index as f32 / len as f32) * cycles).rem_euclid(1.0)
    } else {
        let span = (len - 1).max(1) as f32;
        (index as f32 / span).clamp(0.0, 1.0)
    }
}

/// Colors for `len` units of a rainbow.
pub fn rainbow_colors(len: usize, spec: &RainbowSpec) -> Vec<Color> {
    (0..len)
        .map(|i| Color::from_hsb(rainbow_hue(i, len, spec), spec.saturation, spec.brightness))
        .collect()
}

/// Color every unit of `text` with a rainbow.
///
/// ```
/// use chroma::Marker;
/// use chromatag::RainbowSpec;
/// use chromatag::effects::synthesize_rainbow;
///
/// let out = synthesize_rainbow("A", &RainbowSpec::default(), Marker::SECTION);
/// assert_eq!(out, "§x§F§F§0§0§0§0A");
/// ```
pub fn synthesize_rainbow(text: &str, spec: &RainbowSpec, marker: Marker) -> String {
    if text.is_empty() {
        return String::new();
    }

    let pieces: Vec<Piece<'_>> = glyphs(text).collect();
    let colors = rainbow_colors(pieces.len(), spec);

    let mut out = String::with_capacity(text.len() * 16);
    paint(&mut out, &pieces, &colors, marker);
    out
}
