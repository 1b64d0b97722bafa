//! # polycalc
//!
//! A stack calculator for sparse multivariate polynomials.
//!
//! The library turns raw input lines into validated commands or polynomial
//! values and executes them against a polynomial stack. See the [calc](calc)
//! module for the processing pipeline.

pub mod calc;
