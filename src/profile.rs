//! Profiles: restrictions describing a sub-Hopf-algebra by bounding which
//! generators and exponents survive. Profiles are constructed once and never
//! mutated; every enumeration borrows them read-only.

use fp::prime::ValidPrime;

/// Truncation bound meaning "no restriction at this index".
pub const UNBOUNDED: u32 = u32::MAX;

/// A profile function, either as an explicit list of bounds or as a rule
/// computed from the index. The bound at index i limits the generator xi_i
/// (respectively tau_i): exponents must stay below p^bound, and a bound of
/// at most 1 kills the exterior generator outright.
#[derive(Debug, Clone)]
pub enum Profile {
    Explicit {
        bounds: Vec<u32>,
        /// Whether indices past the end of the list are truncated to 0
        /// rather than unbounded.
        truncated: bool,
        /// When false, no filtering is in effect regardless of the bounds.
        restricted: bool,
    },
    Rule(fn(u32) -> u32),
}

impl Profile {
    pub fn unrestricted() -> Self {
        Self::Explicit {
            bounds: Vec::new(),
            truncated: false,
            restricted: false,
        }
    }

    pub fn explicit(bounds: Vec<u32>, truncated: bool) -> Self {
        Self::Explicit {
            bounds,
            truncated,
            restricted: true,
        }
    }

    /// The truncation bound at index i.
    pub fn bound(&self, i: u32) -> u32 {
        match self {
            Self::Explicit {
                bounds, truncated, ..
            } => match bounds.get(i as usize) {
                Some(&k) => k,
                None if *truncated => 0,
                None => UNBOUNDED,
            },
            Self::Rule(f) => f(i),
        }
    }

    /// p^bound(i): exponents at index i must be strictly smaller than this.
    /// Saturates to UNBOUNDED when the power does not fit in a u32.
    pub fn exponent_bound(&self, p: ValidPrime, i: u32) -> u32 {
        let k = self.bound(i);
        if k >= 32 {
            return UNBOUNDED;
        }
        let mut result: u32 = 1;
        for _ in 0..k {
            match result.checked_mul(*p) {
                Some(r) => result = r,
                None => return UNBOUNDED,
            }
        }
        result
    }

    pub fn is_restricted(&self) -> bool {
        match self {
            Self::Explicit { restricted, .. } => *restricted,
            Self::Rule(_) => true,
        }
    }

    /// Whether an exponent vector lies inside the bounds.
    pub fn allows_p_part(&self, p: ValidPrime, p_part: &[u32]) -> bool {
        if !self.is_restricted() {
            return true;
        }
        p_part
            .iter()
            .enumerate()
            .all(|(i, &exp)| exp < self.exponent_bound(p, i as u32))
    }

    /// Whether every exterior generator in q_part survives. A bound of at
    /// most 1 at an index kills that generator.
    pub fn allows_q_part(&self, q_part: &[u32]) -> bool {
        if !self.is_restricted() {
            return true;
        }
        q_part.iter().all(|&i| self.bound(i) > 1)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::unrestricted()
    }
}

/// Independent restrictions for the exterior and polynomial generators.
#[derive(Debug, Clone, Default)]
pub struct FullProfile {
    pub odd_part: Profile,
    pub even_part: Profile,
}

impl FullProfile {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn new(odd_part: Profile, even_part: Profile) -> Self {
        Self {
            odd_part,
            even_part,
        }
    }
}
