//! Calculator core
//!
//!     This module holds the complete processing pipeline from one raw input
//!     line to an effect on the calculator:
//!
//!         1. Classification: the first character of a line decides its route.
//!            A letter means a command, anything else means a polynomial
//!            literal. See [parser](parser).
//!
//!         2. Command recognition: a fixed vocabulary of stack commands, three
//!            of which carry a validated integer argument. See
//!            [command](command).
//!
//!         3. Grammar parsing: a polynomial line is screened for illegal
//!            characters and unbalanced parentheses, then consumed by a
//!            mutually recursive descent over `Poly := Coeff | MonoSum` and
//!            `Mono := '(' Poly ',' Exp ')'`. See [grammar](grammar) and
//!            [token](token).
//!
//!         4. Execution: an accepted command runs against the polynomial
//!            stack; an accepted polynomial is pushed. See [executor](executor)
//!            and [stack](stack).
//!
//!     A line either yields a fully valid result or is discarded whole. Every
//!     rejection maps to exactly one message from a fixed catalog, emitted by
//!     the caller as `ERROR <line-number> <message>`. No rejection is fatal;
//!     processing continues with the next line.

pub mod command;
pub mod executor;
pub mod grammar;
pub mod number;
pub mod parser;
pub mod poly;
pub mod stack;
pub mod token;

mod arith;

pub use command::Command;
pub use executor::{execute, ExecError};
pub use parser::{parse_line, ParseError, ParsedLine};
pub use poly::{Coeff, Exp, Mono, Poly};
pub use stack::PolyStack;
