//! The polynomial stack

use crate::calc::poly::Poly;

/// An owned stack of polynomial values
#[derive(Debug, Default)]
pub struct PolyStack {
    items: Vec<Poly>,
}

impl PolyStack {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, poly: Poly) {
        self.items.push(poly);
    }

    pub fn pop(&mut self) -> Option<Poly> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&Poly> {
        self.items.last()
    }

    /// The two topmost polynomials, topmost first.
    pub fn top_two(&self) -> Option<(&Poly, &Poly)> {
        match self.items.as_slice() {
            [.., second, first] => Some((first, second)),
            _ => None,
        }
    }

    /// Pop the `n` topmost polynomials at once.
    ///
    /// The result is in stack order, deepest first. Pops nothing when fewer
    /// than `n` are available.
    pub fn pop_many(&mut self, n: usize) -> Option<Vec<Poly>> {
        if self.items.len() < n {
            return None;
        }
        let split = self.items.len() - n;
        Some(self.items.split_off(split))
    }
}
