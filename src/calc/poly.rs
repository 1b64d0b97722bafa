//! Polynomial values
//!
//!     A polynomial is either a bare coefficient or a non-empty list of
//!     monomials. A monomial pairs an exponent with a coefficient that is
//!     itself a full polynomial; the recursion models the next variable, so
//!     `(1,2)` read at depth zero is `x_0^2` with coefficient `1`, and a
//!     nested `((1,3),2)` is `x_1^3 * x_0^2`.
//!
//! Canonical Form
//!
//!     Every `Poly` handed out by this module is canonical:
//!         - `Monos` is non-empty and strictly ascending by exponent,
//!         - no monomial carries a zero coefficient,
//!         - a lone constant monomial at exponent zero is collapsed to a
//!           bare coefficient.
//!
//!     [`Poly::from_monos`] establishes the form from an arbitrary monomial
//!     list and is the single entry point used by the grammar parser and the
//!     arithmetic operations. Because all values are canonical, derived
//!     structural equality is semantic equality.

use serde::Serialize;
use std::fmt;

/// Coefficient type, fixed-width signed
pub type Coeff = i64;

/// Exponent type; legal values are `0..=i32::MAX`
pub type Exp = i32;

/// A sparse multivariate polynomial in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Poly {
    /// A constant polynomial
    Coeff(Coeff),
    /// A sum of monomials, ascending by exponent
    Monos(Vec<Mono>),
}

/// One term of a polynomial
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mono {
    pub exp: Exp,
    pub coeff: Poly,
}

impl Mono {
    pub fn new(coeff: Poly, exp: Exp) -> Self {
        Self { exp, coeff }
    }
}

impl Poly {
    /// The zero polynomial
    pub fn zero() -> Self {
        Poly::Coeff(0)
    }

    pub fn from_coeff(c: Coeff) -> Self {
        Poly::Coeff(c)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Coeff(0))
    }

    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Coeff(_))
    }

    /// Build a canonical polynomial from an arbitrary list of monomials.
    ///
    /// Takes ownership of every monomial. Terms with equal exponents are
    /// merged by polynomial addition, zero terms are dropped, and an empty
    /// or constant result degrades to a bare coefficient.
    pub fn from_monos(mut monos: Vec<Mono>) -> Self {
        monos.retain(|m| !m.coeff.is_zero());
        monos.sort_by_key(|m| m.exp);

        let mut merged: Vec<Mono> = Vec::with_capacity(monos.len());
        for mono in monos {
            match merged.last_mut() {
                Some(last) if last.exp == mono.exp => {
                    last.coeff = last.coeff.add(&mono.coeff);
                }
                _ => merged.push(mono),
            }
        }
        // merging may have cancelled terms down to zero
        merged.retain(|m| !m.coeff.is_zero());

        if merged.is_empty() {
            return Poly::zero();
        }
        if merged.len() == 1 && merged[0].exp == 0 {
            if let Poly::Coeff(c) = merged[0].coeff {
                return Poly::Coeff(c);
            }
        }
        Poly::Monos(merged)
    }
}

/// Renders the same shape the grammar accepts: a bare coefficient or
/// `(coeff,exp)` terms joined by `+`, ascending by exponent.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poly::Coeff(c) => write!(f, "{}", c),
            Poly::Monos(monos) => {
                for (i, mono) in monos.iter().enumerate() {
                    if i > 0 {
                        f.write_str("+")?;
                    }
                    write!(f, "({},{})", mono.coeff, mono.exp)?;
                }
                Ok(())
            }
        }
    }
}
