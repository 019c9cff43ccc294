//! Parser for color markup.
//!
//! This module contains the lexer and the tag grammars it dispatches to.

mod lexer;
mod tag;

pub use lexer::{Lexer, Token};
pub use tag::{
    GRADIENT_CLOSE, RAINBOW_CLOSE, parse_gradient_tag, parse_hex_tag, parse_rainbow_tag,
    parse_shorthand_tag,
};
