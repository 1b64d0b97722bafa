//! Line-level parsing tests
//!
//! Each case feeds one raw input line through the public entry point and
//! checks the parsed value or the exact diagnostic message.

use polycalc::calc::{parse_line, Command, Mono, ParseError, ParsedLine, Poly};
use rstest::rstest;

fn coeff(v: i64) -> Poly {
    Poly::from_coeff(v)
}

// ===== Accepted polynomial lines =====

#[rstest]
#[case("5", coeff(5))]
#[case("-5", coeff(-5))]
#[case("0", coeff(0))]
#[case("007", coeff(7))]
#[case("(5,0)", coeff(5))]
#[case("-9223372036854775808", coeff(i64::MIN))]
#[case("9223372036854775807", coeff(i64::MAX))]
fn accepts_coefficient_polynomials(#[case] line: &str, #[case] expected: Poly) {
    assert_eq!(parse_line(line), Ok(ParsedLine::Poly(expected)));
}

#[test]
fn accepts_a_two_term_sum() {
    assert_eq!(
        parse_line("(1,2)+(3,0)"),
        Ok(ParsedLine::Poly(Poly::Monos(vec![
            Mono::new(coeff(3), 0),
            Mono::new(coeff(1), 2),
        ])))
    );
}

#[test]
fn accepts_nested_variables() {
    assert_eq!(
        parse_line("((1,3),2)"),
        Ok(ParsedLine::Poly(Poly::Monos(vec![Mono::new(
            Poly::Monos(vec![Mono::new(coeff(1), 3)]),
            2
        )])))
    );
}

#[test]
fn accepts_the_maximal_exponent() {
    assert_eq!(
        parse_line("(1,2147483647)"),
        Ok(ParsedLine::Poly(Poly::Monos(vec![Mono::new(
            coeff(1),
            i32::MAX
        )])))
    );
}

// ===== Accepted command lines =====

#[rstest]
#[case("ZERO", Command::Zero)]
#[case("IS_COEFF", Command::IsCoeff)]
#[case("IS_ZERO", Command::IsZero)]
#[case("CLONE", Command::Clone)]
#[case("ADD", Command::Add)]
#[case("MUL", Command::Mul)]
#[case("NEG", Command::Neg)]
#[case("SUB", Command::Sub)]
#[case("IS_EQ", Command::IsEq)]
#[case("DEG", Command::Deg)]
#[case("PRINT", Command::Print)]
#[case("POP", Command::Pop)]
#[case("DEG_BY 2", Command::DegBy(2))]
#[case("AT -7", Command::At(-7))]
#[case("COMPOSE 3", Command::Compose(3))]
fn accepts_the_command_vocabulary(#[case] line: &str, #[case] expected: Command) {
    assert_eq!(parse_line(line), Ok(ParsedLine::Command(expected)));
}

// ===== Rejected lines, by exact diagnostic =====

#[rstest]
#[case("DEGREE", "WRONG COMMAND")]
#[case("hello", "WRONG COMMAND")]
#[case("ZERO ", "WRONG COMMAND")]
#[case("zero", "WRONG COMMAND")]
#[case("DEG_BYE", "WRONG COMMAND")]
#[case("ATTACK", "WRONG COMMAND")]
#[case("DEG_BY5", "DEG BY WRONG VARIABLE")]
#[case("DEG_BY", "DEG BY WRONG VARIABLE")]
#[case("DEG_BY  2", "DEG BY WRONG VARIABLE")]
#[case("DEG_BY -1", "DEG BY WRONG VARIABLE")]
#[case("DEG_BY 2147483648", "DEG BY WRONG VARIABLE")]
#[case("AT", "AT WRONG VALUE")]
#[case("AT +7", "AT WRONG VALUE")]
#[case("AT 9223372036854775808", "AT WRONG VALUE")]
#[case("AT -9223372036854775809", "AT WRONG VALUE")]
#[case("COMPOSE abc", "COMPOSE WRONG PARAMETER")]
#[case("COMPOSE", "COMPOSE WRONG PARAMETER")]
#[case("COMPOSE -1", "COMPOSE WRONG PARAMETER")]
#[case("(1,2)+", "WRONG POLY")]
#[case("5+", "WRONG POLY")]
#[case("5 ", "WRONG POLY")]
#[case(" 5", "WRONG POLY")]
#[case("-", "WRONG POLY")]
#[case(")", "WRONG POLY")]
#[case("+5", "WRONG POLY")]
#[case("9223372036854775808", "WRONG POLY")]
#[case("(1,2147483648)", "WRONG POLY")]
#[case("(1,2)x", "WRONG POLY")]
#[case("((1,2)", "WRONG POLY")]
#[case("", "WRONG POLY")]
fn rejects_with_the_catalog_message(#[case] line: &str, #[case] message: &str) {
    let error = parse_line(line).expect_err("line must be rejected");
    assert_eq!(error.to_string(), message);
}

// ===== Classification =====

#[test]
fn first_letter_routes_to_commands_even_when_invalid() {
    // a letter line never produces a polynomial diagnostic
    assert_eq!(parse_line("x1"), Err(ParseError::WrongCommand));
    assert_eq!(parse_line("P"), Err(ParseError::WrongCommand));
}

#[test]
fn other_first_characters_route_to_the_grammar() {
    for line in ["1x", "-x", "(x", ",", "+"] {
        assert_eq!(parse_line(line), Err(ParseError::WrongPoly), "{line}");
    }
}
