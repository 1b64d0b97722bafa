//! Polynomial arithmetic
//!
//!     Operations over canonical [`Poly`](crate::calc::poly::Poly) values.
//!     Every operation consumes canonical inputs and produces canonical
//!     output, going through [`Poly::from_monos`] wherever terms can merge
//!     or cancel. Coefficient arithmetic wraps on overflow, matching the
//!     fixed-width coefficient type.

use crate::calc::poly::{Coeff, Exp, Mono, Poly};

/// `base^exp` over wrapping 64-bit coefficients, by squaring.
fn coeff_pow(mut base: Coeff, mut exp: u32) -> Coeff {
    let mut acc: Coeff = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp >>= 1;
    }
    acc
}

impl Poly {
    pub fn add(&self, other: &Poly) -> Poly {
        match (self, other) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_add(*b)),
            (Poly::Coeff(c), Poly::Monos(monos)) | (Poly::Monos(monos), Poly::Coeff(c)) => {
                if *c == 0 {
                    return Poly::Monos(monos.clone());
                }
                let mut combined = monos.clone();
                combined.push(Mono::new(Poly::Coeff(*c), 0));
                Poly::from_monos(combined)
            }
            (Poly::Monos(a), Poly::Monos(b)) => {
                let mut combined = a.clone();
                combined.extend(b.iter().cloned());
                Poly::from_monos(combined)
            }
        }
    }

    pub fn neg(&self) -> Poly {
        match self {
            Poly::Coeff(c) => Poly::Coeff(c.wrapping_neg()),
            Poly::Monos(monos) => Poly::Monos(
                monos
                    .iter()
                    .map(|m| Mono::new(m.coeff.neg(), m.exp))
                    .collect(),
            ),
        }
    }

    pub fn sub(&self, other: &Poly) -> Poly {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Poly) -> Poly {
        match (self, other) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_mul(*b)),
            (Poly::Coeff(c), Poly::Monos(monos)) | (Poly::Monos(monos), Poly::Coeff(c)) => {
                let scaled = monos
                    .iter()
                    .map(|m| Mono::new(m.coeff.mul(&Poly::Coeff(*c)), m.exp))
                    .collect();
                // scaling can wrap a coefficient to zero; from_monos cleans up
                Poly::from_monos(scaled)
            }
            (Poly::Monos(a), Poly::Monos(b)) => {
                let mut products = Vec::with_capacity(a.len() * b.len());
                for ma in a {
                    for mb in b {
                        products.push(Mono::new(
                            ma.coeff.mul(&mb.coeff),
                            ma.exp.saturating_add(mb.exp),
                        ));
                    }
                }
                Poly::from_monos(products)
            }
        }
    }

    /// Degree with all variables read as one, `-1` for the zero polynomial.
    pub fn deg(&self) -> Exp {
        match self {
            Poly::Coeff(0) => -1,
            Poly::Coeff(_) => 0,
            Poly::Monos(monos) => monos
                .iter()
                .map(|m| m.exp.saturating_add(m.coeff.deg()))
                .max()
                .unwrap_or(-1),
        }
    }

    /// Degree with respect to variable `var`, `-1` for the zero polynomial.
    ///
    /// Variable `0` is the outermost one; deeper variables live in the
    /// coefficient polynomials.
    pub fn deg_by(&self, var: usize) -> Exp {
        match self {
            Poly::Coeff(0) => -1,
            Poly::Coeff(_) => 0,
            Poly::Monos(monos) => {
                if var == 0 {
                    // canonical form is ascending by exponent
                    monos.last().map(|m| m.exp).unwrap_or(-1)
                } else {
                    monos
                        .iter()
                        .map(|m| m.coeff.deg_by(var - 1))
                        .max()
                        .unwrap_or(-1)
                }
            }
        }
    }

    /// Substitute `x` for the outermost variable.
    ///
    /// The result is a polynomial in the remaining variables.
    pub fn at(&self, x: Coeff) -> Poly {
        match self {
            Poly::Coeff(c) => Poly::Coeff(*c),
            Poly::Monos(monos) => {
                let mut acc = Poly::zero();
                for mono in monos {
                    let factor = Poly::Coeff(coeff_pow(x, mono.exp as u32));
                    acc = acc.add(&mono.coeff.mul(&factor));
                }
                acc
            }
        }
    }

    /// `self^exp` by squaring. `exp` is a legal exponent, so non-negative.
    pub fn pow(&self, exp: Exp) -> Poly {
        let mut exp = exp as u32;
        let mut base = self.clone();
        let mut acc = Poly::from_coeff(1);
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        acc
    }

    /// Substitute `args[i]` for variable `i`; variables with no argument are
    /// substituted with the zero polynomial.
    pub fn compose(&self, args: &[Poly]) -> Poly {
        match self {
            Poly::Coeff(c) => Poly::Coeff(*c),
            Poly::Monos(monos) => {
                let zero = Poly::zero();
                let (arg, rest) = match args.split_first() {
                    Some((first, rest)) => (first, rest),
                    None => (&zero, &[][..]),
                };
                let mut acc = Poly::zero();
                for mono in monos {
                    let inner = mono.coeff.compose(rest);
                    acc = acc.add(&inner.mul(&arg.pow(mono.exp)));
                }
                acc
            }
        }
    }
}
