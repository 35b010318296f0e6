//! Milnor basis monomials and Fp-linear combinations of them.

use std::collections::hash_map::Entry;

use fp::prime::ValidPrime;
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Exponents of the polynomial generators. Canonical form has no trailing
/// zero; the empty vector is the constant monomial.
pub type PPart = Vec<u32>;

/// Indices of the exterior generators present, strictly increasing.
pub type QPart = Vec<u32>;

/// Remove trailing zeroes so that exponent vectors are in canonical form.
pub(crate) fn trim_trailing_zeroes(l: &mut Vec<u32>) {
    while let Some(0) = l.last() {
        l.pop();
    }
}

/// A basis monomial Q_{e_1} ... Q_{e_k} P(r_1, r_2, ...) of the Milnor
/// basis. At p = 2 the exterior part is empty and P is written Sq.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MilnorBasisElement {
    pub q_part: QPart,
    pub p_part: PPart,
}

impl MilnorBasisElement {
    /// The unit monomial Q() P().
    pub fn unit() -> Self {
        Self::default()
    }

    pub fn new(q_part: QPart, mut p_part: PPart) -> Self {
        trim_trailing_zeroes(&mut p_part);
        Self { q_part, p_part }
    }

    pub fn from_p_part(p_part: PPart) -> Self {
        Self::new(Vec::new(), p_part)
    }

    pub fn is_unit(&self) -> bool {
        self.q_part.is_empty() && self.p_part.is_empty()
    }

    /// Topological degree. In the generic case the polynomial generators
    /// weigh q(p^i - 1)/(p - 1) with q = 2p - 2 and the exterior generators
    /// weigh 2p^i - 1; at p = 2 the generator xi_i weighs 2^i - 1.
    pub fn degree(&self, p: ValidPrime, generic: bool) -> i32 {
        let p = *p as i64;
        let q: i64 = if generic { 2 * (p - 1) } else { 1 };
        let mut total: i64 = 0;
        let mut xi_degree: i64 = 1;
        for &r in &self.p_part {
            total += q * xi_degree * r as i64;
            xi_degree = xi_degree * p + 1;
        }
        for &e in &self.q_part {
            total += 2 * p.pow(e) - 1;
        }
        total as i32
    }
}

impl std::fmt::Display for MilnorBasisElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unit() {
            return write!(f, "1");
        }
        let mut parts = Vec::new();
        if !self.q_part.is_empty() {
            parts.push(self.q_part.iter().map(|i| format!("Q_{i}")).join(" "));
        }
        if !self.p_part.is_empty() {
            parts.push(format!("P({})", self.p_part.iter().join(", ")));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// An Fp-linear combination of Milnor basis monomials. Coefficients are
/// stored reduced and nonzero; a term whose coefficient cancels is removed
/// rather than kept at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilnorElement {
    terms: FxHashMap<MilnorBasisElement, u32>,
}

impl MilnorElement {
    pub fn zero() -> Self {
        Self::default()
    }

    /// The combination consisting of m with coefficient 1.
    pub fn from_basis_element(m: MilnorBasisElement) -> Self {
        let mut result = Self::zero();
        result.terms.insert(m, 1);
        result
    }

    /// Add c * m, reducing mod p and dropping the term if it cancels.
    pub fn add_basis_element(&mut self, p: ValidPrime, m: MilnorBasisElement, c: u32) {
        let c = c % *p;
        if c == 0 {
            return;
        }
        match self.terms.entry(m) {
            Entry::Occupied(mut entry) => {
                let sum = p.sum(*entry.get(), c);
                if sum == 0 {
                    entry.remove();
                } else {
                    *entry.get_mut() = sum;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(c);
            }
        }
    }

    pub fn coefficient(&self, m: &MilnorBasisElement) -> u32 {
        self.terms.get(m).copied().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MilnorBasisElement, u32)> + '_ {
        self.terms.iter().map(|(m, &c)| (m, c))
    }
}

impl std::fmt::Display for MilnorElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let result = self
            .terms
            .iter()
            .sorted()
            .map(|(m, &c)| {
                if c == 1 {
                    format!("{m}")
                } else {
                    format!("{c} * {m}")
                }
            })
            .join(" + ");
        write!(f, "{result}")
    }
}
