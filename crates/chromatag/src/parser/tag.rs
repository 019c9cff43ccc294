//! Tag grammars.
//!
//! Each parser takes the input starting at a `<` and, on success, returns the
//! parsed value together with the number of bytes the open tag spans.
//!
//! ```text
//! <gradient#3:#ff0000:#00f:loop>    <g:#f00:#0f0>
//! <rainbow#2:0.8:1:l>               <r>
//! <#00FF00>                         <bold>
//! ```

use chroma::Color;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while_m_n, take_while1},
    character::complete::{char, digit1},
    combinator::{map, opt, recognize},
    multi::many1,
    sequence::{delimited, pair, preceded},
};

use crate::error::TagParseError;
use crate::span::{GradientSpec, RainbowSpec};

/// Close tags accepted for a gradient span.
pub const GRADIENT_CLOSE: [&str; 2] = ["</gradient>", "</g>"];

/// Close tags accepted for a rainbow span.
pub const RAINBOW_CLOSE: [&str; 2] = ["</rainbow>", "</r>"];

/// Gradient open tag before its values are checked.
struct RawGradient<'a> {
    speed: Option<&'a str>,
    stops: Vec<&'a str>,
    looping: bool,
}

/// Rainbow open tag before its values are checked.
struct RawRainbow<'a> {
    speed: Option<&'a str>,
    saturation: Option<&'a str>,
    brightness: Option<&'a str>,
    looping: bool,
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// `#<digits>`
fn speed(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), digit1)(input)
}

/// `:#<hex digits>`; the digit count is checked when the color is parsed.
fn color_stop(input: &str) -> IResult<&str, &str> {
    preceded(tag(":#"), take_while1(is_hex_digit))(input)
}

/// `1`, `0.5` or `.5`
fn number(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

/// Optional `:l`, `:L` or `:loop`.
fn loop_flag(input: &str) -> IResult<&str, bool> {
    map(
        opt(preceded(char(':'), alt((tag("loop"), tag("l"), tag("L"))))),
        |flag| flag.is_some(),
    )(input)
}

fn gradient_open(input: &str) -> IResult<&str, RawGradient<'_>> {
    let (input, _) = char('<')(input)?;
    let (input, _) = alt((tag("gradient"), tag("g")))(input)?;
    let (input, speed) = opt(speed)(input)?;
    let (input, stops) = many1(color_stop)(input)?;
    let (input, looping) = loop_flag(input)?;
    let (input, _) = char('>')(input)?;

    Ok((
        input,
        RawGradient {
            speed,
            stops,
            looping,
        },
    ))
}

fn rainbow_open(input: &str) -> IResult<&str, RawRainbow<'_>> {
    let (input, _) = char('<')(input)?;
    let (input, _) = alt((tag("rainbow"), tag("r")))(input)?;
    let (input, speed) = opt(speed)(input)?;
    let (input, saturation) = opt(preceded(char(':'), number))(input)?;
    let (input, brightness) = opt(preceded(char(':'), number))(input)?;
    let (input, looping) = loop_flag(input)?;
    let (input, _) = char('>')(input)?;

    Ok((
        input,
        RawRainbow {
            speed,
            saturation,
            brightness,
            looping,
        },
    ))
}

fn grammar_error(input: &str, err: nom::Err<nom::error::Error<&str>>) -> TagParseError {
    let snippet: String = input.chars().take(32).collect();
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            TagParseError::Grammar(format!("{:?} in {:?}", e.code, snippet))
        }
        nom::Err::Incomplete(_) => TagParseError::Grammar(format!("incomplete {:?}", snippet)),
    }
}

fn parse_speed(speed: Option<&str>) -> Result<u32, TagParseError> {
    speed.map_or(Ok(0), |digits| {
        digits
            .parse::<u32>()
            .map_err(|_| TagParseError::InvalidNumber(digits.to_string()))
    })
}

fn parse_unit(value: Option<&str>) -> Result<f32, TagParseError> {
    value.map_or(Ok(1.0), |digits| {
        digits
            .parse::<f32>()
            .map_err(|_| TagParseError::InvalidNumber(digits.to_string()))
    })
}

/// Parse a gradient open tag.
///
/// # Examples
///
/// ```
/// use chroma::Color;
/// use chromatag::parser::parse_gradient_tag;
///
/// let (spec, len) = parse_gradient_tag("<g:#f00:#0000ff:l>text</g>").unwrap();
/// assert_eq!(spec.stops, vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)]);
/// assert!(spec.looping);
/// assert_eq!(len, 18);
/// ```
pub fn parse_gradient_tag(input: &str) -> Result<(GradientSpec, usize), TagParseError> {
    let (rest, raw) = gradient_open(input).map_err(|e| grammar_error(input, e))?;

    if raw.stops.len() < 2 {
        return Err(TagParseError::TooFewStops(raw.stops.len()));
    }

    let stops = raw
        .stops
        .iter()
        .map(|hex| Color::parse_hex(hex))
        .collect::<Result<Vec<_>, _>>()?;

    let spec = GradientSpec {
        stops,
        speed: parse_speed(raw.speed)?,
        looping: raw.looping,
    };

    Ok((spec, input.len() - rest.len()))
}

/// Parse a rainbow open tag.
///
/// Missing saturation and brightness default to `1.0`; present values are
/// clamped into `[0, 1]`.
///
/// ```
/// use chromatag::parser::parse_rainbow_tag;
///
/// let (spec, len) = parse_rainbow_tag("<rainbow#2:.5:l>").unwrap();
/// assert_eq!(spec.speed, 2);
/// assert_eq!(spec.saturation, 0.5);
/// assert_eq!(spec.brightness, 1.0);
/// assert!(spec.looping);
/// assert_eq!(len, 16);
/// ```
pub fn parse_rainbow_tag(input: &str) -> Result<(RainbowSpec, usize), TagParseError> {
    let (rest, raw) = rainbow_open(input).map_err(|e| grammar_error(input, e))?;

    let spec = RainbowSpec::new(
        parse_speed(raw.speed)?,
        parse_unit(raw.saturation)?,
        parse_unit(raw.brightness)?,
        raw.looping,
    );

    Ok((spec, input.len() - rest.len()))
}

/// Parse `<#RRGGBB>`. Exactly six digits.
pub fn parse_hex_tag(input: &str) -> Option<(Color, usize)> {
    let parsed: IResult<&str, &str> =
        delimited(tag("<#"), take_while_m_n(6, 6, is_hex_digit), char('>'))(input);
    let (rest, hex) = parsed.ok()?;
    let color = Color::parse_hex(hex).ok()?;
    Some((color, input.len() - rest.len()))
}

/// Parse `<word>` into its lowercased first character.
pub fn parse_shorthand_tag(input: &str) -> Option<(char, usize)> {
    let parsed: IResult<&str, &str> = delimited(
        char('<'),
        take_while1(|c: char| c.is_ascii_alphanumeric()),
        char('>'),
    )(input);
    let (rest, word) = parsed.ok()?;
    let first = word.chars().next()?.to_ascii_lowercase();
    Some((first, input.len() - rest.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_long_name() {
        let (spec, len) = parse_gradient_tag("<gradient:#ff0000:#00ff00>").unwrap();
        assert_eq!(spec.stops.len(), 2);
        assert_eq!(spec.speed, 0);
        assert!(!spec.looping);
        assert_eq!(len, 26);
    }

    #[test]
    fn gradient_speed_and_loop() {
        let (spec, _) = parse_gradient_tag("<g#15:#000:#fff:#888:loop>").unwrap();
        assert_eq!(spec.speed, 15);
        assert_eq!(spec.stops.len(), 3);
        assert_eq!(spec.stops[2], Color::rgb(0x88, 0x88, 0x88));
        assert!(spec.looping);
    }

    #[test]
    fn gradient_upper_loop_flag() {
        let (spec, _) = parse_gradient_tag("<g:#000:#fff:L>").unwrap();
        assert!(spec.looping);
    }

    #[test]
    fn gradient_needs_two_stops() {
        assert_eq!(
            parse_gradient_tag("<g:#fff>"),
            Err(TagParseError::TooFewStops(1))
        );
        assert!(matches!(
            parse_gradient_tag("<g>"),
            Err(TagParseError::Grammar(_))
        ));
    }

    #[test]
    fn gradient_bad_stop_length() {
        assert!(matches!(
            parse_gradient_tag("<g:#ffff:#000>"),
            Err(TagParseError::Color(_))
        ));
    }

    #[test]
    fn gradient_speed_overflow() {
        assert_eq!(
            parse_gradient_tag("<g#99999999999:#000:#fff>"),
            Err(TagParseError::InvalidNumber("99999999999".to_string()))
        );
    }

    #[test]
    fn gradient_rejects_other_words() {
        assert!(parse_gradient_tag("<green:#000:#fff>").is_err());
        assert!(parse_gradient_tag("<G:#000:#fff>").is_err());
        assert!(parse_gradient_tag("<g:#000:#fff").is_err());
    }

    #[test]
    fn rainbow_bare() {
        let (spec, len) = parse_rainbow_tag("<r>").unwrap();
        assert_eq!(spec, RainbowSpec::default());
        assert_eq!(len, 3);

        let (spec, len) = parse_rainbow_tag("<rainbow>").unwrap();
        assert_eq!(spec, RainbowSpec::default());
        assert_eq!(len, 9);
    }

    #[test]
    fn rainbow_all_params() {
        let (spec, _) = parse_rainbow_tag("<r#3:0.25:0.75:L>").unwrap();
        assert_eq!(spec.speed, 3);
        assert_eq!(spec.saturation, 0.25);
        assert_eq!(spec.brightness, 0.75);
        assert!(spec.looping);
    }

    #[test]
    fn rainbow_clamps_values() {
        let (spec, _) = parse_rainbow_tag("<r:5:2.5>").unwrap();
        assert_eq!(spec.saturation, 1.0);
        assert_eq!(spec.brightness, 1.0);
    }

    #[test]
    fn rainbow_loop_without_values() {
        let (spec, _) = parse_rainbow_tag("<r:l>").unwrap();
        assert!(spec.looping);
        assert_eq!(spec.saturation, 1.0);
    }

    #[test]
    fn rainbow_rejects_garbage() {
        assert!(parse_rainbow_tag("<red>").is_err());
        assert!(parse_rainbow_tag("<r:abc>").is_err());
        assert!(parse_rainbow_tag("<r:0.5:0.5:0.5>").is_err());
    }

    #[test]
    fn hex_tag() {
        assert_eq!(
            parse_hex_tag("<#00FF00>rest"),
            Some((Color::rgb(0, 255, 0), 9))
        );
        assert_eq!(parse_hex_tag("<#00FF0>"), None);
        assert_eq!(parse_hex_tag("<#00FF000>"), None);
        assert_eq!(parse_hex_tag("<#00GG00>"), None);
    }

    #[test]
    fn shorthand_tag() {
        assert_eq!(parse_shorthand_tag("<Bold>"), Some(('b', 6)));
        assert_eq!(parse_shorthand_tag("<4ever>x"), Some(('4', 7)));
        assert_eq!(parse_shorthand_tag("<>"), None);
        assert_eq!(parse_shorthand_tag("<two words>"), None);
        assert_eq!(parse_shorthand_tag("<#abc>"), None);
    }
}
