//! Grammar parser for polynomial lines
//!
//!     The accepted grammar, over the token alphabet from [token](crate::calc::token):
//!
//!         Poly    := Coeff | MonoSum
//!         Coeff   := ['-'] Digit+                -- signed 64-bit
//!         MonoSum := Mono ('+' Mono)*
//!         Mono    := '(' Poly ',' Exp ')'
//!         Exp     := Digit+                      -- 0..=i32::MAX
//!
//!     Parsing happens in two steps. A lexical screen rejects the line if it
//!     contains an illegal character or unbalanced parentheses. Then a single
//!     left-to-right recursive descent walks the token stream with no
//!     backtracking: each sub-parse returns the cursor just past what it
//!     consumed, and the caller decides from the next token whether to
//!     continue a sum, hand control back up, or fail.
//!
//!     `Poly` and `Mono` are mutually recursive because a monomial's
//!     coefficient is itself a full polynomial, which is how additional
//!     variables nest.
//!
//!     Failures carry no detail; every one of them means the same thing to
//!     the caller (`WRONG POLY`), so the internal channel is `Option`.
//!     Partially built values are owned by the failing call and dropped on
//!     the way out, at any recursion depth.

use crate::calc::number;
use crate::calc::poly::{Mono, Poly};
use crate::calc::token::{scan, Spanned, Token};

/// Parse one full line as a polynomial literal.
pub fn parse_poly(line: &str) -> Option<Poly> {
    let tokens = scan(line)?;
    if !balanced(&tokens) {
        return None;
    }

    let (value, cursor) = poly(line, &tokens, 0)?;
    // trailing garbage after a valid polynomial is an error
    if cursor != tokens.len() {
        return None;
    }
    Some(value)
}

/// One linear scan: the depth counter must never go negative and must end
/// at zero.
fn balanced(tokens: &[Spanned]) -> bool {
    let mut depth: i64 = 0;
    for (token, _) in tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// `Poly := Coeff | MonoSum`, starting at `at`.
///
/// On success the cursor points at the terminator the caller expects: the
/// end of the stream or a `,` owned by an enclosing monomial.
fn poly(src: &str, tokens: &[Spanned], at: usize) -> Option<(Poly, usize)> {
    match tokens.get(at)? {
        (Token::Minus, _) | (Token::Digits, _) => coefficient(src, tokens, at),
        (Token::LParen, _) => mono_sum(src, tokens, at),
        _ => None,
    }
}

/// `Coeff := ['-'] Digit+`, terminated by `,` or end of line.
fn coefficient(src: &str, tokens: &[Spanned], at: usize) -> Option<(Poly, usize)> {
    let (span, next) = match (&tokens[at], tokens.get(at + 1)) {
        ((Token::Minus, minus), Some((Token::Digits, digits))) => {
            (minus.start..digits.end, at + 2)
        }
        ((Token::Minus, _), _) => return None,
        ((Token::Digits, digits), _) => (digits.clone(), at + 1),
        _ => return None,
    };
    let value = number::coeff(&src[span])?;

    // a bare coefficient ends the (sub)polynomial immediately
    match tokens.get(next) {
        None | Some((Token::Comma, _)) => Some((Poly::from_coeff(value), next)),
        Some(_) => None,
    }
}

/// `MonoSum := Mono ('+' Mono)*`, starting at the opening `(`.
fn mono_sum(src: &str, tokens: &[Spanned], mut at: usize) -> Option<(Poly, usize)> {
    let mut monos = Vec::new();

    loop {
        if !matches!(tokens.get(at), Some((Token::LParen, _))) {
            return None;
        }
        let (mono, next) = mono(src, tokens, at + 1)?;
        monos.push(mono);
        at = next;

        match tokens.get(at) {
            None | Some((Token::Comma, _)) => break,
            Some((Token::Plus, _)) => at += 1,
            Some(_) => return None,
        }
    }

    Some((Poly::from_monos(monos), at))
}

/// `Mono := Poly ',' Exp ')'`, entered just past the opening `(`.
///
/// Returns the cursor just past the closing `)`.
fn mono(src: &str, tokens: &[Spanned], at: usize) -> Option<(Mono, usize)> {
    let (coeff, at) = poly(src, tokens, at)?;

    // poly stops at `,` or end of stream; only `,` is legal inside a mono
    if !matches!(tokens.get(at), Some((Token::Comma, _))) {
        return None;
    }
    let at = at + 1;

    let exp = match tokens.get(at)? {
        (Token::Digits, digits) => number::exponent(&src[digits.clone()])?,
        _ => return None,
    };
    match tokens.get(at + 1)? {
        (Token::RParen, _) => Some((Mono::new(coeff, exp), at + 2)),
        _ => None,
    }
}
