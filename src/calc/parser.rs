//! Line classification and parse results
//!
//!     The single entry point is [`parse_line`]: a line whose first character
//!     is alphabetic goes to the command recognizer, every other line goes to
//!     the grammar parser. The dispatch is exhaustive and needs no state.
//!
//!     Failure is the `Err` channel of the result. The error names one
//!     message from the fixed diagnostic catalog; the caller prepends the
//!     1-based line number when emitting `ERROR <line-number> <message>`.
//!     Keeping the line number out of the core keeps each parse a pure
//!     function of its line.

use serde::Serialize;
use std::fmt;

use crate::calc::command::{self, Command};
use crate::calc::grammar;
use crate::calc::poly::Poly;

/// The result of classifying one accepted input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParsedLine {
    Command(Command),
    Poly(Poly),
}

/// A rejected line, carrying its catalog message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    WrongCommand,
    WrongPoly,
    DegByWrongVariable,
    AtWrongValue,
    ComposeWrongParameter,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ParseError::WrongCommand => "WRONG COMMAND",
            ParseError::WrongPoly => "WRONG POLY",
            ParseError::DegByWrongVariable => "DEG BY WRONG VARIABLE",
            ParseError::AtWrongValue => "AT WRONG VALUE",
            ParseError::ComposeWrongParameter => "COMPOSE WRONG PARAMETER",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ParseError {}

/// Classify and parse one input line.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    if line.chars().next().is_some_and(char::is_alphabetic) {
        command::recognize(line).map(ParsedLine::Command)
    } else {
        grammar::parse_poly(line)
            .map(ParsedLine::Poly)
            .ok_or(ParseError::WrongPoly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::poly::Mono;

    #[test]
    fn test_routing() {
        // letters route to commands, everything else to the grammar
        assert_eq!(parse_line("POP"), Ok(ParsedLine::Command(Command::Pop)));
        assert_eq!(parse_line("p"), Err(ParseError::WrongCommand));
        assert_eq!(parse_line("1x"), Err(ParseError::WrongPoly));
        assert_eq!(parse_line("-"), Err(ParseError::WrongPoly));
        assert_eq!(parse_line("("), Err(ParseError::WrongPoly));
        assert_eq!(parse_line(""), Err(ParseError::WrongPoly));
    }

    #[test]
    fn test_accepted_polynomials() {
        assert_eq!(
            parse_line("5"),
            Ok(ParsedLine::Poly(Poly::from_coeff(5)))
        );
        assert_eq!(
            parse_line("(1,2)+(3,0)"),
            Ok(ParsedLine::Poly(Poly::Monos(vec![
                Mono::new(Poly::from_coeff(3), 0),
                Mono::new(Poly::from_coeff(1), 2),
            ])))
        );
    }

    #[test]
    fn test_accepted_commands_with_arguments() {
        assert_eq!(
            parse_line("DEG_BY 2"),
            Ok(ParsedLine::Command(Command::DegBy(2)))
        );
        assert_eq!(parse_line("AT -7"), Ok(ParsedLine::Command(Command::At(-7))));
    }

    #[test]
    fn test_catalog_messages() {
        assert_eq!(ParseError::WrongCommand.to_string(), "WRONG COMMAND");
        assert_eq!(ParseError::WrongPoly.to_string(), "WRONG POLY");
        assert_eq!(
            ParseError::DegByWrongVariable.to_string(),
            "DEG BY WRONG VARIABLE"
        );
        assert_eq!(ParseError::AtWrongValue.to_string(), "AT WRONG VALUE");
        assert_eq!(
            ParseError::ComposeWrongParameter.to_string(),
            "COMPOSE WRONG PARAMETER"
        );
    }
}
