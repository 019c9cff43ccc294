use chroma::{Color, Marker};

use super::{Piece, glyphs, paint};

/// Colors for `len` units spread across `stops`.
///
/// Unit `i` sits at `i / (len - 1)` along the gradient, or `i / len` when
/// looping. That position is mapped onto the segment between two adjacent
/// stops and interpolated linearly.
///
/// No stops gives no colors; a single stop colors every unit.
pub fn gradient_colors(len: usize, stops: &[Color], looping: bool) -> Vec<Color> {
    match stops {
        [] => Vec::new(),
        [only] => vec![*only; len],
        _ => {
            let segments = stops.len() - 1;
            let effective = if looping { len } else { len.saturating_sub(1) };

            (0..len)
                .map(|i| {
                    let mut relative = if effective == 0 {
                        0.0
                    } else {
                        i as f32 / effective as f32
                    };
                    if !looping {
                        relative = relative.min(1.0);
                    }

                    let position = relative * segments as f32;
                    let index = (position.floor() as usize).min(segments - 1);
                    let fraction = (position - index as f32).clamp(0.0, 1.0);

                    Color::lerp(stops[index], stops[index + 1], fraction)
                })
                .collect()
        }
    }
}

/// Color every unit of `text` along a gradient.
///
/// Empty text or no stops returns the text unchanged.
///
/// ```
/// use chroma::{Color, Marker};
/// use chromatag::effects::synthesize_gradient;
///
/// let out = synthesize_gradient(
///     "AB",
///     &[Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)],
///     false,
///     Marker::SECTION,
/// );
/// assert_eq!(out, "§x§F§F§0§0§0§0A§x§0§0§F§F§0§0B");
/// ```
pub fn synthesize_gradient(text: &str, stops: &[Color], looping: bool, marker: Marker) -> String {
    if text.is_empty() || stops.is_empty() {
        return text.to_string();
    }

    let pieces: Vec<Piece<'_>> = glyphs(text).collect();
    let colors = gradient_colors(pieces.len(), stops, looping);

    let mut out = String::with_capacity(text.len() * 16);
    paint(&mut out, &pieces, &colors, marker);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn two_units_hit_both_stops() {
        assert_eq!(gradient_colors(2, &[RED, GREEN], false), vec![RED, GREEN]);
    }

    #[test]
    fn single_unit_uses_first_stop() {
        assert_eq!(gradient_colors(1, &[RED, GREEN], false), vec![RED]);
        assert_eq!(gradient_colors(1, &[RED, GREEN], true), vec![RED]);
    }

    #[test]
    fn midpoint_is_interpolated() {
        let colors = gradient_colors(3, &[RED, BLUE], false);
        assert_eq!(colors, vec![RED, Color::rgb(128, 0, 128), BLUE]);
    }

    #[test]
    fn three_stops_pass_through_middle() {
        let colors = gradient_colors(5, &[RED, GREEN, BLUE], false);
        assert_eq!(colors[0], RED);
        assert_eq!(colors[2], GREEN);
        assert_eq!(colors[4], BLUE);
        assert_eq!(colors[1], Color::rgb(128, 128, 0));
    }

    #[test]
    fn looping_never_reaches_last_stop() {
        let colors = gradient_colors(4, &[RED, BLUE], true);
        assert_eq!(colors[0], RED);
        assert_eq!(colors[2], Color::rgb(128, 0, 128));
        assert_eq!(colors[3], Color::rgb(64, 0, 191));
    }

    #[test]
    fn degenerate_inputs() {
        assert!(gradient_colors(0, &[RED, GREEN], false).is_empty());
        assert!(gradient_colors(3, &[], false).is_empty());
        assert_eq!(gradient_colors(2, &[GREEN], false), vec![GREEN, GREEN]);
        assert_eq!(synthesize_gradient("", &[RED, GREEN], false, Marker::SECTION), "");
        assert_eq!(synthesize_gradient("abc", &[], true, Marker::SECTION), "abc");
    }
}
