//! Command execution
//!
//!     Executes one parsed command against the polynomial stack. Query
//!     commands write their answer to the caller-supplied writer; stack
//!     commands mutate the stack. A command that needs more operands than
//!     the stack holds fails with [`ExecError::StackUnderflow`] and leaves
//!     the stack untouched; the caller reports it as
//!     `ERROR <line-number> STACK UNDERFLOW`.

use std::fmt;
use std::io::{self, Write};

use crate::calc::command::Command;
use crate::calc::poly::Poly;
use crate::calc::stack::PolyStack;

#[derive(Debug)]
pub enum ExecError {
    /// Not enough polynomials on the stack for the command
    StackUnderflow,
    /// The output writer failed
    Io(io::Error),
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::StackUnderflow => f.write_str("STACK UNDERFLOW"),
            ExecError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExecError {}

impl From<io::Error> for ExecError {
    fn from(e: io::Error) -> Self {
        ExecError::Io(e)
    }
}

/// Execute one command.
pub fn execute<W: Write>(
    command: &Command,
    stack: &mut PolyStack,
    out: &mut W,
) -> Result<(), ExecError> {
    match command {
        Command::Zero => stack.push(Poly::zero()),
        Command::IsCoeff => {
            let answer = top(stack)?.is_coeff();
            writeln!(out, "{}", answer as u8)?;
        }
        Command::IsZero => {
            let answer = top(stack)?.is_zero();
            writeln!(out, "{}", answer as u8)?;
        }
        Command::Clone => {
            let copy = top(stack)?.clone();
            stack.push(copy);
        }
        Command::Add => {
            let (p, q) = pop_two(stack)?;
            stack.push(p.add(&q));
        }
        Command::Mul => {
            let (p, q) = pop_two(stack)?;
            stack.push(p.mul(&q));
        }
        Command::Neg => {
            let p = pop_one(stack)?;
            stack.push(p.neg());
        }
        Command::Sub => {
            // the popped top minus the polynomial under it
            let (p, q) = pop_two(stack)?;
            stack.push(p.sub(&q));
        }
        Command::IsEq => {
            let (first, second) = stack.top_two().ok_or(ExecError::StackUnderflow)?;
            writeln!(out, "{}", (first == second) as u8)?;
        }
        Command::Deg => {
            let degree = top(stack)?.deg();
            writeln!(out, "{}", degree)?;
        }
        Command::DegBy(var) => {
            let degree = top(stack)?.deg_by(*var);
            writeln!(out, "{}", degree)?;
        }
        Command::At(x) => {
            let p = pop_one(stack)?;
            stack.push(p.at(*x));
        }
        Command::Print => {
            let p = top(stack)?;
            writeln!(out, "{}", p)?;
        }
        Command::Pop => {
            pop_one(stack)?;
        }
        Command::Compose(count) => {
            if stack.len() < count.saturating_add(1) {
                return Err(ExecError::StackUnderflow);
            }
            let p = pop_one(stack)?;
            let args = stack.pop_many(*count).ok_or(ExecError::StackUnderflow)?;
            stack.push(p.compose(&args));
        }
    }
    Ok(())
}

fn top<'a>(stack: &'a PolyStack) -> Result<&'a Poly, ExecError> {
    stack.top().ok_or(ExecError::StackUnderflow)
}

fn pop_one(stack: &mut PolyStack) -> Result<Poly, ExecError> {
    stack.pop().ok_or(ExecError::StackUnderflow)
}

fn pop_two(stack: &mut PolyStack) -> Result<(Poly, Poly), ExecError> {
    match stack.pop_many(2) {
        Some(mut pair) => {
            // pop_many is deepest-first
            let first = pair.pop().ok_or(ExecError::StackUnderflow)?;
            let second = pair.pop().ok_or(ExecError::StackUnderflow)?;
            Ok((first, second))
        }
        None => Err(ExecError::StackUnderflow),
    }
}
