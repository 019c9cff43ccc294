//! Single pass scanner for color markup.
//!
//! Converts input text into a stream of tokens. Every grammar is tried at the
//! current position, most specific first, and the scanner never looks at its
//! own output, so one rule can not rewrite what another produced.

use chroma::Color;

use crate::config::{Config, TagKinds};
use crate::format::is_standard_code;
use crate::span::{Effect, TaggedSpan};

use super::tag::{
    GRADIENT_CLOSE, RAINBOW_CLOSE, parse_gradient_tag, parse_hex_tag, parse_rainbow_tag,
    parse_shorthand_tag,
};

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// A single character code, already normalized: `&a` and `<aqua>` both
    /// give `Code('a')`.
    Code(char),
    /// A fixed color: `<#RRGGBB>`.
    Hex(Color),
    /// A gradient or rainbow span with its raw body.
    Span(TaggedSpan<'a>),
}

/// Memo of the earliest close tag at or after some position.
///
/// Without it, a long run of open tags with no close tag would rescan the
/// rest of the input once per open tag.
#[derive(Clone, Copy, Debug, Default)]
struct CloseCache {
    /// `(searched_from, Some((at, len)))` or `(searched_from, None)`.
    entry: Option<(usize, Option<(usize, usize)>)>,
}

impl CloseCache {
    fn find(&mut self, input: &str, from: usize, closes: &[&str]) -> Option<(usize, usize)> {
        if let Some((searched_from, found)) = self.entry {
            if from >= searched_from {
                match found {
                    None => return None,
                    Some((at, len)) if at >= from => return Some((at, len)),
                    Some(_) => {}
                }
            }
        }

        let haystack = &input[from..];
        let found = closes
            .iter()
            .filter_map(|close| haystack.find(close).map(|at| (from + at, close.len())))
            .min_by_key(|(at, _)| *at);

        self.entry = Some((from, found));
        found
    }
}

/// Lexer for color markup.
///
/// # Examples
///
/// ```
/// use chromatag::Config;
/// use chromatag::parser::{Lexer, Token};
///
/// let config = Config::default();
/// let tokens: Vec<_> = Lexer::new("&aHi <#FFFFFF>!", &config).collect();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0], Token::Code('a'));
/// assert_eq!(tokens[1], Token::Text("Hi "));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    config: &'a Config,
    tags: TagKinds,
    gradient_close: CloseCache,
    rainbow_close: CloseCache,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str, config: &'a Config) -> Self {
        Self {
            input,
            pos: 0,
            config,
            tags: config.tags,
            gradient_close: CloseCache::default(),
            rainbow_close: CloseCache::default(),
        }
    }

    /// Lexer for the body of an effect span: inline codes only.
    pub fn inline(input: &'a str, config: &'a Config) -> Self {
        let mut lexer = Self::new(input, config);
        lexer.tags = config.tags & TagKinds::INLINE;
        lexer
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn enabled(&self, kind: TagKinds) -> bool {
        self.tags.contains(kind)
    }

    /// Could a token other than text start with `c`?
    fn is_special(&self, c: char) -> bool {
        (c == '<' && self.tags.intersects(TagKinds::all() - TagKinds::STANDARD))
            || (self.enabled(TagKinds::STANDARD) && self.config.is_marker(c))
    }

    /// Try every grammar at the current position.
    fn try_token(&mut self) -> Option<Token<'a>> {
        let rest = self.remaining();
        let first = rest.chars().next()?;

        if first == '<' {
            self.try_tag(rest)
        } else if self.enabled(TagKinds::STANDARD) && self.config.is_marker(first) {
            self.try_code(rest, first)
        } else {
            None
        }
    }

    /// `&a` or `§a`.
    fn try_code(&mut self, rest: &'a str, marker: char) -> Option<Token<'a>> {
        let code = rest[marker.len_utf8()..].chars().next()?;
        if !is_standard_code(code) {
            return None;
        }
        self.pos += marker.len_utf8() + code.len_utf8();
        Some(Token::Code(code))
    }

    /// Any of the `<...>` grammars.
    fn try_tag(&mut self, rest: &'a str) -> Option<Token<'a>> {
        if self.enabled(TagKinds::GRADIENT) && rest.starts_with("<g") {
            match parse_gradient_tag(rest) {
                Ok((spec, open_len)) => {
                    if let Some(token) =
                        self.close_span(Effect::Gradient(spec), open_len, &GRADIENT_CLOSE)
                    {
                        return Some(token);
                    }
                }
                Err(err) => log::trace!("not a gradient at {}: {}", self.pos, err),
            }
        }

        if self.enabled(TagKinds::RAINBOW) && rest.starts_with("<r") {
            match parse_rainbow_tag(rest) {
                Ok((spec, open_len)) => {
                    if let Some(token) =
                        self.close_span(Effect::Rainbow(spec), open_len, &RAINBOW_CLOSE)
                    {
                        return Some(token);
                    }
                }
                Err(err) => log::trace!("not a rainbow at {}: {}", self.pos, err),
            }
        }

        if self.enabled(TagKinds::HEX) {
            if let Some((color, len)) = parse_hex_tag(rest) {
                self.pos += len;
                return Some(Token::Hex(color));
            }
        }

        if self.enabled(TagKinds::SHORTHAND) {
            if let Some((code, len)) = parse_shorthand_tag(rest) {
                self.pos += len;
                return Some(Token::Code(code));
            }
        }

        None
    }

    /// Find the close tag for an effect whose open tag spans `open_len`
    /// bytes, and consume the whole span.
    fn close_span(
        &mut self,
        effect: Effect,
        open_len: usize,
        closes: &[&str],
    ) -> Option<Token<'a>> {
        let body_start = self.pos + open_len;
        let cache = match effect {
            Effect::Gradient(_) => &mut self.gradient_close,
            Effect::Rainbow(_) => &mut self.rainbow_close,
        };

        let Some((body_end, close_len)) = cache.find(self.input, body_start, closes) else {
            log::trace!("unclosed {} at {}", effect.name(), self.pos);
            return None;
        };

        let text = &self.input[body_start..body_end];
        self.pos = body_end + close_len;
        Some(Token::Span(TaggedSpan::new(effect, text)))
    }

    /// Consume text up to the next character that could start a token.
    ///
    /// Always consumes at least one character, so a special character that
    /// did not start a token becomes text.
    fn consume_text(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let first = self.peek()?;
        self.pos += first.len_utf8();

        while let Some(c) = self.peek() {
            if self.is_special(c) {
                break;
            }
            self.pos += c.len_utf8();
        }

        Some(&self.input[start..self.pos])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if let Some(token) = self.try_token() {
            return Some(token);
        }

        self.consume_text().map(Token::Text)
    }
}
