//! Tests for configuration, tag kinds, formats and tag grammars.

use chromatag::format::{CodeKind, is_standard_code};
use chromatag::parser::{
    GRADIENT_CLOSE, RAINBOW_CLOSE, parse_gradient_tag, parse_hex_tag, parse_rainbow_tag,
    parse_shorthand_tag,
};
use chromatag::{Color, Config, ConfigError, Formats, Marker, TagKinds, TagParseError, Transformer};

// ============================================================================
// Config
// ============================================================================

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config, Config::DEFAULT);
    assert_eq!(config.marker, Marker::SECTION);
    assert_eq!(config.alternate, '&');
    assert_eq!(config.tags, TagKinds::all());
}

#[test]
fn builder_methods() {
    let config = Config::default()
        .with_marker('$')
        .with_alternate('%')
        .with_tags(TagKinds::STANDARD | TagKinds::HEX);

    assert_eq!(config.marker.char(), '$');
    assert_eq!(config.alternate, '%');
    assert!(config.tags.contains(TagKinds::HEX));
    assert!(!config.tags.contains(TagKinds::GRADIENT));
    assert!(config.validate().is_ok());
}

#[test]
fn validate_collision() {
    let config = Config::default().with_marker('&');
    assert_eq!(config.validate(), Err(ConfigError::MarkerCollision('&')));
}

#[test]
fn validate_reserved() {
    for c in ['a', '7', ' ', '<', '>', '/', '#', ':'] {
        let config = Config::default().with_alternate(c);
        assert_eq!(config.validate(), Err(ConfigError::ReservedMarker(c)), "{c:?}");
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        ConfigError::MarkerCollision('&').to_string(),
        "marker and alternate marker are both '&'"
    );
    assert_eq!(
        ConfigError::ReservedMarker('<').to_string(),
        "'<' cannot be used as a marker"
    );
}

#[test]
fn transformer_keeps_config() {
    let config = Config::default().with_alternate('!');
    let transformer = Transformer::new(config).unwrap();
    assert_eq!(transformer.config(), &config);
    assert_eq!(transformer.transform("!a&a"), "§a&a");
}

// ============================================================================
// Tag Kinds
// ============================================================================

#[test]
fn tag_kinds_default_is_all() {
    assert_eq!(TagKinds::default(), TagKinds::all());
    assert_eq!(
        TagKinds::all(),
        TagKinds::STANDARD
            | TagKinds::SHORTHAND
            | TagKinds::HEX
            | TagKinds::GRADIENT
            | TagKinds::RAINBOW
    );
}

#[test]
fn effects_only() {
    let transformer = Transformer::new(Config::default().with_tags(TagKinds::EFFECTS)).unwrap();
    let out = transformer.transform("&a<b><g:#fff:#fff>x</g>");
    assert_eq!(
        out,
        format!("&a<b>{}x", Marker::SECTION.escape(Color::WHITE))
    );
}

// ============================================================================
// Formats
// ============================================================================

#[test]
fn format_codes() {
    assert_eq!(Formats::from_code('k'), Some(Formats::OBFUSCATED));
    assert_eq!(Formats::from_code('L'), Some(Formats::BOLD));
    assert_eq!(Formats::from_code('m'), Some(Formats::STRIKETHROUGH));
    assert_eq!(Formats::from_code('n'), Some(Formats::UNDERLINE));
    assert_eq!(Formats::from_code('o'), Some(Formats::ITALIC));
    assert_eq!(Formats::from_code('a'), None);
    assert_eq!(Formats::from_code('r'), None);
}

#[test]
fn format_codes_roundtrip_order() {
    assert_eq!(Formats::all().codes().collect::<String>(), "klmno");
}

#[test]
fn code_kinds() {
    assert_eq!(CodeKind::of('f'), Some(CodeKind::Color));
    assert_eq!(CodeKind::of('K'), Some(CodeKind::Format(Formats::OBFUSCATED)));
    assert_eq!(CodeKind::of('r'), Some(CodeKind::Reset));
    assert_eq!(CodeKind::of('g'), None);
    assert!(is_standard_code('E'));
    assert!(!is_standard_code('x'));
}

// ============================================================================
// Tag Grammars
// ============================================================================

#[test]
fn close_tags() {
    assert_eq!(GRADIENT_CLOSE, ["</gradient>", "</g>"]);
    assert_eq!(RAINBOW_CLOSE, ["</rainbow>", "</r>"]);
}

#[test]
fn gradient_tag_short_and_long() {
    let (short, short_len) = parse_gradient_tag("<g:#f00:#00f>").unwrap();
    let (long, long_len) = parse_gradient_tag("<gradient:#ff0000:#0000ff>").unwrap();
    assert_eq!(short.stops, long.stops);
    assert_eq!(short_len, 13);
    assert_eq!(long_len, 26);
}

#[test]
fn gradient_tag_errors() {
    assert_eq!(
        parse_gradient_tag("<g:#123456>"),
        Err(TagParseError::TooFewStops(1))
    );
    assert!(matches!(
        parse_gradient_tag("<g:#12:#345>"),
        Err(TagParseError::Color(_))
    ));
    assert!(matches!(
        parse_gradient_tag("<g:red:blue>"),
        Err(TagParseError::Grammar(_))
    ));
}

#[test]
fn rainbow_tag_values() {
    let (spec, len) = parse_rainbow_tag("<rainbow#4:0.3:0.6:loop>rest").unwrap();
    assert_eq!(spec.speed, 4);
    assert_eq!(spec.saturation, 0.3);
    assert_eq!(spec.brightness, 0.6);
    assert!(spec.looping);
    assert_eq!(len, 24);
}

#[test]
fn hex_and_shorthand_tags() {
    assert_eq!(
        parse_hex_tag("<#55FF55>hi"),
        Some((Color::rgb(0x55, 0xFF, 0x55), 9))
    );
    assert_eq!(parse_hex_tag("<#5F5>"), None);
    assert_eq!(parse_shorthand_tag("<Gold>"), Some(('g', 6)));
    assert_eq!(parse_shorthand_tag("<#55FF55>"), None);
    assert_eq!(parse_shorthand_tag("<a b>"), None);
}
