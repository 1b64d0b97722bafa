//! Validated integer conversion
//!
//!     Every number in the input goes through one of the converters below.
//!     Each converter owns an exact contract: the first character must be a
//!     digit (or a leading minus where signedness allows it), the whole
//!     substring must be consumed, and the value must fit the target range.
//!     Anything else is a failure, reported as `None` so the caller can map
//!     it to the right diagnostic.
//!
//!     Two range classes exist:
//!         - signed 64-bit, for polynomial coefficients and the `AT` argument,
//!         - unsigned bounded to `0..=i32::MAX`, for exponents, the `DEG_BY`
//!           index and the `COMPOSE` count.
//!
//!     Unary `+`, whitespace padding and empty substrings are rejected.
//!     Leading zeros are plain digit runs and convert normally.

use crate::calc::poly::{Coeff, Exp};

/// Convert a coefficient fragment cut out by the grammar parser.
///
/// The fragment is an optional `-` followed by digits; the converter only
/// enforces the signed 64-bit range.
pub fn coeff(fragment: &str) -> Option<Coeff> {
    fragment.parse::<Coeff>().ok()
}

/// Convert an exponent fragment cut out by the grammar parser.
///
/// The fragment is a pure digit run; values above `i32::MAX` are out of
/// range.
pub fn exponent(fragment: &str) -> Option<Exp> {
    fragment.parse::<Exp>().ok()
}

/// Convert a signed command argument, consuming the string to its end.
pub fn signed_arg(s: &str) -> Option<Coeff> {
    match s.as_bytes().first() {
        Some(b'-') => {}
        Some(b) if b.is_ascii_digit() => {}
        _ => return None,
    }
    // str::parse would also take a leading '+', which the first-byte check
    // above already ruled out.
    s.parse::<Coeff>().ok()
}

/// Convert an unsigned command argument, consuming the string to its end.
///
/// The value must fit in `0..=i32::MAX`.
pub fn unsigned_arg(s: &str) -> Option<usize> {
    if !s.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return None;
    }
    let value = s.parse::<u64>().ok()?;
    if value > i32::MAX as u64 {
        return None;
    }
    Some(value as usize)
}
