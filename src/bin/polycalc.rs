//! Command-line interface for polycalc
//! The binary reads calculator input line by line, parses each line into a
//! command or a polynomial, and executes it against a polynomial stack.
//!
//! Usage:
//!   polycalc [path]          - Run the calculator on a file (stdin by default)
//!   polycalc --parse-only    - Print accepted lines as JSON instead of executing

use clap::{Arg, ArgAction, Command};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use polycalc::calc::{execute, parse_line, ExecError, ParsedLine, PolyStack};

fn main() {
    let matches = Command::new("polycalc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A stack calculator for sparse multivariate polynomials")
        .arg(
            Arg::new("path")
                .help("Read input lines from a file instead of stdin")
                .index(1),
        )
        .arg(
            Arg::new("parse-only")
                .long("parse-only")
                .help("Print each accepted line as JSON instead of executing it")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let reader: Box<dyn BufRead> = match matches.get_one::<String>("path") {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("polycalc: {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    if let Err(e) = run(reader, matches.get_flag("parse-only")) {
        eprintln!("polycalc: {}", e);
        std::process::exit(1);
    }
}

/// The calculator loop.
///
/// Lines are counted 1-based over all physical lines. Empty lines and `#`
/// comment lines are skipped without effect. A rejected line prints one
/// diagnostic to stderr and processing continues.
fn run(reader: Box<dyn BufRead>, parse_only: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut stack = PolyStack::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("ERROR {} {}", number, e);
                continue;
            }
        };

        if parse_only {
            writeln!(out, "{}", serde_json::to_string(&parsed)?)?;
            continue;
        }

        match parsed {
            ParsedLine::Poly(p) => stack.push(p),
            ParsedLine::Command(command) => match execute(&command, &mut stack, &mut out) {
                Ok(()) => {}
                Err(ExecError::StackUnderflow) => {
                    eprintln!("ERROR {} STACK UNDERFLOW", number);
                }
                Err(ExecError::Io(e)) => return Err(e),
            },
        }
    }

    Ok(())
}
