//! Degree-indexed enumeration of the Milnor basis under a profile.

use itertools::{Either, Itertools};

use crate::algebra::MilnorAlgebra;
use crate::combinatorics::{tau_degrees, xi_degrees, RestrictedPartitions, WeightedIntegerVectors};
use crate::element::{trim_trailing_zeroes, MilnorBasisElement, PPart, QPart};

/// The exponent vectors of degree n in the even subalgebra, in the
/// normalization where |xi_1| = 1. In the non-generic case this is the
/// whole basis of topological degree n.
pub fn basis_even(
    algebra: &MilnorAlgebra,
    n: i32,
) -> impl Iterator<Item = PPart> + Clone + '_ {
    let p = algebra.prime();
    let profile = &algebra.profile().even_part;
    WeightedIntegerVectors::new(n, xi_degrees(n, p))
        .map(|mut exponents| {
            trim_trailing_zeroes(&mut exponents);
            exponents
        })
        .filter(move |exponents| profile.allows_p_part(p, exponents))
}

/// The Q parts of degree q_deg: increasing lists of exterior generator
/// indices whose degrees sum to q_deg. These are the partitions of q_deg
/// into distinct exterior degrees.
pub fn basis_q_part(
    algebra: &MilnorAlgebra,
    q_deg: i32,
) -> impl Iterator<Item = QPart> + Clone + '_ {
    let profile = &algebra.profile().odd_part;
    RestrictedPartitions::new(q_deg, tau_degrees(q_deg, algebra.prime()))
        .filter(move |q_part| profile.allows_q_part(q_part))
}

/// The whole basis in degree n in the generic case: for every split of n
/// into a Q-part degree and a multiple of q = 2p - 2, the Q parts of the
/// one paired with the even parts of the other. Degree 0 yields exactly
/// the unit monomial.
pub fn basis_generic(
    algebra: &MilnorAlgebra,
    n: i32,
) -> impl Iterator<Item = MilnorBasisElement> + '_ {
    let p = algebra.prime();
    let q = algebra.q();

    // Every exterior degree is 1 mod q, so a Q part of degree n mod q
    // needs at least that many generators, and distinct generators of
    // those degrees cannot sum below the geometric series
    // 1 + p + ... + p^(residue - 2). Splits are visited in decreasing
    // Q-part degree, so the first one below the bound ends the
    // enumeration.
    let residue = n % q;
    let mut min_q_deg: i64 = 0;
    let mut power: i64 = 1;
    for _ in 1..residue {
        min_q_deg += power;
        power *= *p as i64;
        if min_q_deg > n as i64 {
            break;
        }
    }

    (0..=n / q)
        .map(move |p_deg| (p_deg, n - p_deg * q))
        .take_while(move |&(_, q_deg)| q_deg as i64 >= min_q_deg)
        .flat_map(move |(p_deg, q_deg)| {
            basis_q_part(algebra, q_deg).cartesian_product(basis_even(algebra, p_deg))
        })
        .map(|(q_part, p_part)| MilnorBasisElement { q_part, p_part })
}

/// The basis of the algebra in degree n, dispatching on the generic flag.
pub fn basis(
    algebra: &MilnorAlgebra,
    n: i32,
) -> impl Iterator<Item = MilnorBasisElement> + '_ {
    if algebra.generic() {
        Either::Left(basis_generic(algebra, n))
    } else {
        Either::Right(basis_even(algebra, n).map(MilnorBasisElement::from_p_part))
    }
}
