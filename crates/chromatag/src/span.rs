//! Effect span types.
//!
//! A span is the text enclosed by a paired gradient or rainbow tag, together
//! with the parameters parsed from its open tag.

use chroma::Color;

use crate::effects;

/// Parameters of a `<gradient>` tag.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    /// Color stops in interpolation order. The tag grammar guarantees two or
    /// more.
    pub stops: Vec<Color>,
    /// Animation speed from `#<speed>`. Parsed but not used for static output.
    pub speed: u32,
    /// Whether the gradient wraps back towards its first stop.
    pub looping: bool,
}

impl GradientSpec {
    pub fn new(stops: Vec<Color>) -> Self {
        Self {
            stops,
            speed: 0,
            looping: false,
        }
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }
}

/// Parameters of a `<rainbow>` tag.
#[derive(Clone, Debug, PartialEq)]
pub struct RainbowSpec {
    /// Number of hue cycles across the text when looping.
    pub speed: u32,
    /// Saturation in `[0, 1]`.
    pub saturation: f32,
    /// Brightness in `[0, 1]`.
    pub brightness: f32,
    /// Cycle through the hues instead of a single sweep.
    pub looping: bool,
}

impl Default for RainbowSpec {
    fn default() -> Self {
        Self {
            speed: 0,
            saturation: 1.0,
            brightness: 1.0,
            looping: false,
        }
    }
}

impl RainbowSpec {
    /// Build a spec, clamping saturation and brightness into `[0, 1]`.
    pub fn new(speed: u32, saturation: f32, brightness: f32, looping: bool) -> Self {
        Self {
            speed,
            saturation: clamp_unit(saturation),
            brightness: clamp_unit(brightness),
            looping,
        }
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 1.0 } else { value.clamp(0.0, 1.0) }
}

/// The effect applied to a span.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Gradient(GradientSpec),
    Rainbow(RainbowSpec),
}

impl Effect {
    /// One color per printable unit for a span of `len` units.
    pub fn colors(&self, len: usize) -> Vec<Color> {
        match self {
            Effect::Gradient(spec) => effects::gradient_colors(len, &spec.stops, spec.looping),
            Effect::Rainbow(spec) => effects::rainbow_colors(len, spec),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Effect::Gradient(_) => "gradient",
            Effect::Rainbow(_) => "rainbow",
        }
    }
}

/// A parsed gradient or rainbow tag and the text it encloses.
///
/// `text` borrows from the scanned input and holds the raw body, which may
/// still contain inline codes.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedSpan<'a> {
    pub effect: Effect,
    pub text: &'a str,
}

impl<'a> TaggedSpan<'a> {
    pub fn new(effect: Effect, text: &'a str) -> Self {
        Self { effect, text }
    }
}
