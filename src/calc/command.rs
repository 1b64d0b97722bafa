//! Command recognizer
//!
//!     A line that starts with a letter must be one of the fixed calculator
//!     commands. Zero-argument commands match only on exact equality with
//!     their keyword. The three parametrized commands match by keyword
//!     prefix, then require exactly one space and a fully consumed,
//!     range-checked argument.
//!
//!     Prefix matching is deliberately narrow: the keyword counts as matched
//!     only when followed by whitespace, end of line, or a character that
//!     could begin its argument. That keeps `DEGREE` an unknown command
//!     instead of a malformed `DEG`, while `DEG_BY5` (missing separator) is
//!     still reported as a bad `DEG_BY` argument rather than an unknown
//!     command.

use serde::Serialize;

use crate::calc::number;
use crate::calc::parser::ParseError;
use crate::calc::poly::Coeff;

/// A calculator command, with its validated argument where one exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    Print,
    Pop,
    /// Degree with respect to the given variable index
    DegBy(usize),
    /// Evaluation at the given coefficient value
    At(Coeff),
    /// Composition with the given number of stack arguments
    Compose(usize),
}

const PLAIN: &[(&str, Command)] = &[
    ("ZERO", Command::Zero),
    ("IS_COEFF", Command::IsCoeff),
    ("IS_ZERO", Command::IsZero),
    ("CLONE", Command::Clone),
    ("ADD", Command::Add),
    ("MUL", Command::Mul),
    ("NEG", Command::Neg),
    ("SUB", Command::Sub),
    ("IS_EQ", Command::IsEq),
    ("DEG", Command::Deg),
    ("PRINT", Command::Print),
    ("POP", Command::Pop),
];

/// Recognize a line already known to start with a letter.
pub fn recognize(line: &str) -> Result<Command, ParseError> {
    if let Some((_, command)) = PLAIN.iter().find(|(keyword, _)| *keyword == line) {
        return Ok(command.clone());
    }

    if keyword_matches(line, "DEG_BY", false) {
        return argument(line, "DEG_BY")
            .and_then(number::unsigned_arg)
            .map(Command::DegBy)
            .ok_or(ParseError::DegByWrongVariable);
    }
    if keyword_matches(line, "AT", true) {
        return argument(line, "AT")
            .and_then(number::signed_arg)
            .map(Command::At)
            .ok_or(ParseError::AtWrongValue);
    }
    if keyword_matches(line, "COMPOSE", false) {
        return argument(line, "COMPOSE")
            .and_then(number::unsigned_arg)
            .map(Command::Compose)
            .ok_or(ParseError::ComposeWrongParameter);
    }

    Err(ParseError::WrongCommand)
}

/// A parametrized keyword matches when followed by whitespace, end of line,
/// or a character that could begin its argument.
fn keyword_matches(line: &str, keyword: &str, signed: bool) -> bool {
    if !line.starts_with(keyword) {
        return false;
    }
    match line.as_bytes().get(keyword.len()) {
        None => true,
        Some(b) if b.is_ascii_whitespace() => true,
        Some(b) if b.is_ascii_digit() => true,
        Some(b'-') => signed,
        Some(_) => false,
    }
}

/// Cut out the argument text: exactly one space after the keyword, nothing
/// less and nothing more. Shape and range checks belong to the converters.
fn argument<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let arg = line[keyword.len()..].strip_prefix(' ')?;
    if arg.is_empty() {
        None
    } else {
        Some(arg)
    }
}
