//! RGB color value.
//!
//! Supports hex parsing (`#RGB`, `#RRGGBB`), linear interpolation between two
//! colors, and conversion from hue/saturation/brightness.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// An opaque 24-bit RGB color.
///
/// Channels are always in `[0, 255]`; every constructor that does arithmetic
/// rounds and clamps before building the value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color, with or without the leading `#`.
    ///
    /// Three digit colors are expanded by doubling each digit, so `#f80`
    /// is `#ff8800`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma::Color;
    ///
    /// assert_eq!(Color::parse_hex("#ff5733").unwrap(), Color::rgb(255, 87, 51));
    /// assert_eq!(Color::parse_hex("0f0").unwrap(), Color::rgb(0, 255, 0));
    /// assert!(Color::parse_hex("#12345").is_err());
    /// ```
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let hex = input.strip_prefix('#').unwrap_or(input);

        let mut digits = [0u8; 6];
        let mut len = 0;
        for c in hex.chars() {
            if len < digits.len() {
                digits[len] = Self::parse_hex_digit(c).ok_or_else(|| {
                    ColorParseError::InvalidHex {
                        input: input.to_string(),
                        digit: c,
                    }
                })?;
            }
            len += 1;
        }

        match len {
            3 => Ok(Color::rgb(
                digits[0] * 17,
                digits[1] * 17,
                digits[2] * 17,
            )),
            6 => Ok(Color::rgb(
                digits[0] * 16 + digits[1],
                digits[2] * 16 + digits[3],
                digits[4] * 16 + digits[5],
            )),
            _ => Err(ColorParseError::InvalidLength {
                input: input.to_string(),
                len,
            }),
        }
    }

    fn parse_hex_digit(c: char) -> Option<u8> {
        c.to_digit(16).map(|d| d as u8)
    }

    /// Render as `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linearly interpolate between `start` and `end`.
    ///
    /// `fraction` is clamped to `[0, 1]` and each channel is rounded to the
    /// nearest integer.
    ///
    /// ```
    /// use chroma::Color;
    ///
    /// let mid = Color::lerp(Color::BLACK, Color::WHITE, 0.5);
    /// assert_eq!(mid, Color::rgb(128, 128, 128));
    /// ```
    pub fn lerp(start: Color, end: Color, fraction: f32) -> Color {
        let t = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        Color::rgb(
            lerp_channel(start.r, end.r, t),
            lerp_channel(start.g, end.g, t),
            lerp_channel(start.b, end.b, t),
        )
    }

    /// Convert hue/saturation/brightness to RGB.
    ///
    /// - `hue` is cyclic: only its fractional part is used, so `1.25` and
    ///   `-0.75` both mean `0.25`.
    /// - `saturation` and `brightness` are clamped to `[0, 1]`.
    ///
    /// ```
    /// use chroma::Color;
    ///
    /// assert_eq!(Color::from_hsb(0.0, 1.0, 1.0), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::from_hsb(1.0 / 3.0, 1.0, 1.0), Color::rgb(0, 255, 0));
    /// ```
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Color {
        let s = unit_clamp(saturation);
        let v = unit_clamp(brightness);

        if s == 0.0 {
            let gray = to_channel(v);
            return Color::rgb(gray, gray, gray);
        }

        let hue = if hue.is_finite() { hue.rem_euclid(1.0) } else { 0.0 };
        let h = hue * 6.0;
        let sector = (h.floor() as u8) % 6;
        let f = h - h.floor();

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color::rgb(to_channel(r), to_channel(g), to_channel(b))
    }
}

fn lerp_channel(start: u8, end: u8, t: f32) -> u8 {
    let start = f32::from(start);
    let end = f32::from(end);
    (start + (end - start) * t).round().clamp(0.0, 255.0) as u8
}

fn to_channel(value: f32) -> u8 {
    (value * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

fn unit_clamp(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s.trim())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}
