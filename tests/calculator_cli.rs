//! End-to-end tests for the polycalc binary
//!
//! Each test drives the compiled binary with a calculator script and checks
//! stdout (command answers) and stderr (the diagnostic stream) exactly.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn polycalc() -> Command {
    Command::cargo_bin("polycalc").expect("binary builds")
}

#[test]
fn evaluates_a_session() {
    polycalc()
        .write_stdin("(1,2)+(3,0)\nPRINT\nDEG\nAT 2\nPRINT\n")
        .assert()
        .success()
        .stdout("(3,0)+(1,2)\n2\n7\n")
        .stderr("");
}

#[test]
fn compose_and_queries() {
    let script = "\
(1,1)+(1,0)
(1,2)+(1,0)
COMPOSE 1
PRINT
IS_COEFF
DEG_BY 0
POP
";
    polycalc()
        .write_stdin(script)
        .assert()
        .success()
        .stdout("(2,0)+(2,1)+(1,2)\n0\n2\n")
        .stderr("");
}

#[test]
fn reports_errors_with_line_numbers() {
    let script = "\
hello
# a comment line, ignored

(1,2)+
DEG_BY5
COMPOSE abc
ADD
";
    polycalc()
        .write_stdin(script)
        .assert()
        .success()
        .stdout("")
        .stderr(
            "ERROR 1 WRONG COMMAND\n\
             ERROR 4 WRONG POLY\n\
             ERROR 5 DEG BY WRONG VARIABLE\n\
             ERROR 6 COMPOSE WRONG PARAMETER\n\
             ERROR 7 STACK UNDERFLOW\n",
        );
}

#[test]
fn rejected_lines_leave_the_stack_unchanged() {
    // the bad line between the two pushes must not disturb the ADD
    polycalc()
        .write_stdin("1\n(1,2)*\n2\nADD\nPRINT\n")
        .assert()
        .success()
        .stdout("3\n")
        .stderr("ERROR 2 WRONG POLY\n");
}

#[test]
fn parse_only_dumps_json() {
    polycalc()
        .arg("--parse-only")
        .write_stdin("5\nPOP\nDEG_BY 2\n")
        .assert()
        .success()
        .stdout(
            "{\"Poly\":{\"Coeff\":5}}\n\
             {\"Command\":\"Pop\"}\n\
             {\"Command\":{\"DegBy\":2}}\n",
        )
        .stderr("");
}

#[test]
fn reads_input_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "ZERO\nIS_ZERO\n").expect("write script");

    polycalc()
        .arg(file.path())
        .assert()
        .success()
        .stdout("1\n")
        .stderr("");
}

#[test]
fn missing_input_file_is_fatal() {
    polycalc()
        .arg("no-such-file.calc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.calc"));
}
