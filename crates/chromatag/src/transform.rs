//! Markup to color code transformation.
//!
//! [`Transformer`] renders the token stream of a [`Lexer`] into the host's
//! native codes. The free functions [`transform`] and [`strip`] use a shared
//! default instance.

use chroma::Marker;
use once_cell::sync::Lazy;

use crate::config::Config;
use crate::effects::{self, Piece};
use crate::error::ConfigError;
use crate::format::CodeKind;
use crate::parser::{Lexer, Token};
use crate::span::TaggedSpan;

static DEFAULT_TRANSFORMER: Lazy<Transformer> = Lazy::new(Transformer::default);

/// Transform markup with the default configuration.
///
/// Never fails: markup that does not parse is kept as literal text.
///
/// # Examples
///
/// ```
/// assert_eq!(chromatag::transform("&aGreen"), "§aGreen");
/// assert_eq!(chromatag::transform("<#00FF00>!"), "§x§0§0§F§F§0§0!");
/// assert_eq!(chromatag::transform("&z <oops"), "&z <oops");
/// ```
pub fn transform(input: &str) -> String {
    DEFAULT_TRANSFORMER.transform(input)
}

/// Remove all markup with the default configuration, keeping visible text.
///
/// ```
/// assert_eq!(chromatag::strip("<g:#f00:#00f>Hi</g> &aok"), "Hi ok");
/// ```
pub fn strip(input: &str) -> String {
    DEFAULT_TRANSFORMER.strip(input)
}

/// A configured markup engine.
///
/// Holds no state besides its [`Config`], so one instance can be shared
/// freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Transformer {
    config: Config,
}

impl Transformer {
    /// Create a transformer after validating `config`.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn marker(&self) -> Marker {
        self.config.marker
    }

    /// Scan `input` without rendering it.
    pub fn tokens<'a>(&'a self, input: &'a str) -> Lexer<'a> {
        Lexer::new(input, &self.config)
    }

    /// Render markup into native codes.
    pub fn transform(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 2);

        for token in self.tokens(input) {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Code(code) => self.marker().write_code(&mut out, code),
                Token::Hex(color) => self.marker().write_escape(&mut out, color),
                Token::Span(span) => self.render_span(&mut out, &span),
            }
        }

        out
    }

    /// Remove markup, keeping only the text a reader would see.
    pub fn strip(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());

        for token in self.tokens(input) {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Code(_) | Token::Hex(_) => {}
                Token::Span(span) => {
                    for inner in Lexer::inline(span.text, &self.config) {
                        if let Token::Text(text) = inner {
                            out.push_str(text);
                        }
                    }
                }
            }
        }

        out
    }

    fn render_span(&self, out: &mut String, span: &TaggedSpan<'_>) {
        let pieces = self.body_pieces(span.text);
        let len = effects::glyph_count(&pieces);
        let colors = span.effect.colors(len);

        log::debug!("{} over {} units", span.effect.name(), len);
        effects::paint(out, &pieces, &colors, self.marker());
    }

    /// Resolve the inline codes of a span body.
    ///
    /// Format codes become sticky, `r` clears them, and color codes are
    /// dropped because the effect decides the color of every unit.
    fn body_pieces<'a>(&'a self, body: &'a str) -> Vec<Piece<'a>> {
        let mut pieces = Vec::with_capacity(body.len());

        for token in Lexer::inline(body, &self.config) {
            match token {
                Token::Text(text) => pieces.extend(effects::glyphs(text)),
                Token::Code(code) => match CodeKind::of(code) {
                    Some(CodeKind::Format(formats)) => pieces.push(Piece::Format(formats)),
                    Some(CodeKind::Reset) => pieces.push(Piece::Reset),
                    Some(CodeKind::Color) | None => {}
                },
                Token::Hex(_) => {}
                Token::Span(inner) => pieces.extend(effects::glyphs(inner.text)),
            }
        }

        pieces
    }
}
