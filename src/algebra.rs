//! The algebra descriptor and the validating entry points.

use anyhow::{ensure, Result};
use fp::prime::ValidPrime;

use crate::basis;
use crate::element::{MilnorBasisElement, MilnorElement, PPart, QPart};
use crate::multiply;
use crate::profile::FullProfile;

/// An immutable description of the mod p Steenrod algebra or one of its
/// sub-Hopf-algebras: the prime, whether the algebra is generic (odd p; it
/// may also be forced at p = 2), and the profile. The descriptor is
/// constructed once and read by every product and basis call.
#[derive(Debug, Clone)]
pub struct MilnorAlgebra {
    p: ValidPrime,
    generic: bool,
    profile: FullProfile,
}

impl MilnorAlgebra {
    /// The full Steenrod algebra at p, generic exactly when p is odd.
    pub fn new(p: ValidPrime) -> Self {
        Self {
            p,
            generic: *p != 2,
            profile: FullProfile::unrestricted(),
        }
    }

    pub fn with_profile(p: ValidPrime, generic: bool, profile: FullProfile) -> Self {
        Self {
            p,
            generic,
            profile,
        }
    }

    pub fn prime(&self) -> ValidPrime {
        self.p
    }

    pub fn generic(&self) -> bool {
        self.generic
    }

    pub fn profile(&self) -> &FullProfile {
        &self.profile
    }

    /// The degree of P(1), which divides the degree of every polynomial
    /// part.
    pub fn q(&self) -> i32 {
        if self.generic {
            2 * (*self.p as i32 - 1)
        } else {
            1
        }
    }

    /// The product of two basis monomials as a linear combination of basis
    /// monomials. Malformed monomials are rejected here, before any
    /// enumeration begins; the product itself is total.
    ///
    /// The profile plays no role: profiles cut out sub-Hopf-algebras, so
    /// products of monomials of the subalgebra stay inside it.
    pub fn product(
        &self,
        m1: &MilnorBasisElement,
        m2: &MilnorBasisElement,
    ) -> Result<MilnorElement> {
        self.validate(m1)?;
        self.validate(m2)?;
        Ok(if self.generic {
            multiply::multiply_full(self.p, m1, m2)
        } else {
            multiply::multiply_even(self.p, &m1.p_part, &m2.p_part)
        })
    }

    fn validate(&self, m: &MilnorBasisElement) -> Result<()> {
        ensure!(
            m.q_part.windows(2).all(|w| w[0] < w[1]),
            "exterior indices must be strictly increasing: {m}"
        );
        ensure!(
            m.p_part.last() != Some(&0),
            "exponent vector must not end in zero: {m}"
        );
        ensure!(
            self.generic || m.q_part.is_empty(),
            "exterior generators only exist in the generic case: {m}"
        );
        Ok(())
    }

    pub fn basis(&self, n: i32) -> impl Iterator<Item = MilnorBasisElement> + '_ {
        basis::basis(self, n)
    }

    pub fn basis_even(&self, n: i32) -> impl Iterator<Item = PPart> + Clone + '_ {
        basis::basis_even(self, n)
    }

    pub fn basis_q_part(&self, q_deg: i32) -> impl Iterator<Item = QPart> + Clone + '_ {
        basis::basis_q_part(self, q_deg)
    }

    /// The number of basis monomials in degree n.
    pub fn dimension(&self, n: i32) -> usize {
        self.basis(n).count()
    }
}
