//! Token definitions for polynomial lines
//!
//! The legal alphabet of a polynomial literal is digits, `-`, `+`, `(`, `)`
//! and `,`. The tokens are defined with the logos derive macro; anything
//! outside the alphabet fails tokenization, which rejects the whole line
//! before grammar parsing starts.

use logos::Logos;
use std::ops::Range;

/// All possible tokens in a polynomial line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    /// A maximal run of decimal digits
    #[regex("[0-9]+")]
    Digits,
}

/// A token together with the byte range of its source text
pub type Spanned = (Token, Range<usize>);

/// Tokenize a whole line, keeping spans.
///
/// Returns `None` if the line contains any character outside the legal
/// polynomial alphabet.
pub fn scan(line: &str) -> Option<Vec<Spanned>> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => return None,
        }
    }

    Some(tokens)
}
