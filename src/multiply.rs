//! Products of Milnor basis monomials: the matrix formula for the even
//! subalgebra and the commutation rule that reduces the generic case to it.

use fp::prime::{integer_power, minus_one_to_the_n, multinomial, ValidPrime};

use crate::element::{trim_trailing_zeroes, MilnorBasisElement, MilnorElement};
use crate::matrix::MilnorMatrices;

/// The product P(r) * P(s) in the even subalgebra. At p = 2 this is the
/// product of the whole algebra.
///
/// Each matrix contributes the product over its antidiagonals of the
/// multinomial coefficient of the diagonal's entries; the term it produces
/// is P of the diagonal sums. A diagonal with a vanishing coefficient kills
/// the whole matrix, so the remaining diagonals are skipped.
pub fn multiply_even(p: ValidPrime, r: &[u32], s: &[u32]) -> MilnorElement {
    let mut result = MilnorElement::zero();
    let rows = r.len() + 1;
    let cols = s.len() + 1;
    let diagonals = r.len() + s.len();
    let mut matrices = MilnorMatrices::new(p, r, s);
    let mut diagonal = Vec::with_capacity(rows.max(cols));
    while let Some(m) = matrices.next_matrix() {
        let mut coef = 1;
        let mut diagonal_sums = Vec::with_capacity(diagonals);
        for n in 1..=diagonals {
            let i_min = (n + 1).saturating_sub(cols);
            let i_max = (n + 1).min(rows);
            diagonal.clear();
            for i in i_min..i_max {
                diagonal.push(m[i][n - i]);
            }
            diagonal_sums.push(diagonal.iter().sum());
            coef = p.product(coef, multinomial(p, &mut diagonal));
            if coef == 0 {
                break;
            }
        }
        if coef != 0 {
            result.add_basis_element(p, MilnorBasisElement::from_p_part(diagonal_sums), coef);
        }
    }
    result
}

/// Commute the exterior generators of the right factor through m1: the
/// product m1 * Q_{f_1} ... Q_{f_t} as a sum of monomials in normal form.
///
/// One index at a time, the relation
///   P(R) Q_k = Q_k P(R) + Q_{k+1} P(R - p^k e_1) + Q_{k+2} P(R - p^k e_2) + ...
/// replaces each term of the running element, where a term dies when the
/// exponent cannot absorb p^k or the exterior generator is already present
/// (Q_j Q_j = 0). Sliding Q_{k+i} into position costs a transposition sign
/// for each larger index it passes.
pub fn multiply_q_part(p: ValidPrime, m1: &MilnorBasisElement, f: &[u32]) -> MilnorElement {
    let mut result = MilnorElement::from_basis_element(m1.clone());
    for &k in f {
        let p_to_the_k = integer_power(*p, k);
        let mut next = MilnorElement::zero();
        for (term, coef) in result.iter() {
            for i in 0..=term.p_part.len() {
                let target = k + i as u32;
                if term.q_part.contains(&target) {
                    continue;
                }
                if i > 0 && term.p_part[i - 1] < p_to_the_k {
                    continue;
                }

                let mut p_part = term.p_part.clone();
                if i > 0 {
                    p_part[i - 1] -= p_to_the_k;
                    trim_trailing_zeroes(&mut p_part);
                }

                let larger = term.q_part.iter().filter(|&&e| e > target).count();
                let mut q_part = term.q_part.clone();
                q_part.insert(q_part.len() - larger, target);

                let sign = minus_one_to_the_n(*p, larger as u32);
                next.add_basis_element(
                    p,
                    MilnorBasisElement { q_part, p_part },
                    p.product(sign, coef),
                );
            }
        }
        result = next;
    }
    result
}

/// The full product m1 * m2 in the generic case: commute m2's exterior
/// generators through m1, then multiply the polynomial parts with the even
/// formula. Once the exterior generators are past m1's polynomial part no
/// further Q-P interaction occurs, so the two steps compose.
pub fn multiply_full(
    p: ValidPrime,
    m1: &MilnorBasisElement,
    m2: &MilnorBasisElement,
) -> MilnorElement {
    let m1_times_f = multiply_q_part(p, m1, &m2.q_part);
    if m2.p_part.is_empty() {
        return m1_times_f;
    }
    let mut result = MilnorElement::zero();
    for (term, coef) in m1_times_f.iter() {
        let even = multiply_even(p, &term.p_part, &m2.p_part);
        for (prod, c) in even.iter() {
            let m = MilnorBasisElement {
                q_part: term.q_part.clone(),
                p_part: prod.p_part.clone(),
            };
            result.add_basis_element(p, m, p.product(coef, c));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mbe(q_part: &[u32], p_part: &[u32]) -> MilnorBasisElement {
        MilnorBasisElement::new(q_part.to_vec(), p_part.to_vec())
    }

    #[test]
    fn test_even_unit() {
        let p = ValidPrime::new(2);
        let product = multiply_even(p, &[], &[]);
        assert_eq!(product.len(), 1);
        assert_eq!(product.coefficient(&MilnorBasisElement::unit()), 1);
    }

    #[test]
    fn test_sq1_sq1_is_zero() {
        let p = ValidPrime::new(2);
        assert!(multiply_even(p, &[1], &[1]).is_zero());
    }

    #[test]
    fn test_sq2_sq2() {
        let p = ValidPrime::new(2);
        let product = multiply_even(p, &[2], &[2]);
        assert_eq!(format!("{product}"), "P(1, 1)");
    }

    #[test]
    fn test_sq2_sq1() {
        let p = ValidPrime::new(2);
        let product = multiply_even(p, &[2], &[1]);
        assert_eq!(format!("{product}"), "P(0, 1) + P(3)");
    }

    #[test]
    fn test_p1_p1_mod_3() {
        let p = ValidPrime::new(3);
        let product = multiply_even(p, &[1], &[1]);
        assert_eq!(format!("{product}"), "2 * P(2)");
    }

    #[test]
    fn test_exterior_square_is_zero() {
        let p = ValidPrime::new(3);
        let q0 = mbe(&[0], &[]);
        assert!(multiply_full(p, &q0, &q0).is_zero());
    }

    #[test]
    fn test_exterior_anticommute() {
        let p = ValidPrime::new(3);
        let q0 = mbe(&[0], &[]);
        let q1 = mbe(&[1], &[]);
        let forward = multiply_full(p, &q0, &q1);
        let backward = multiply_full(p, &q1, &q0);
        let q01 = mbe(&[0, 1], &[]);
        assert_eq!(forward.coefficient(&q01), 1);
        assert_eq!(backward.coefficient(&q01), 2);
    }

    #[test]
    fn test_p1_commutes_past_q0() {
        // P(1) Q_0 = Q_0 P(1) + Q_1
        let p = ValidPrime::new(3);
        let product = multiply_full(p, &mbe(&[], &[1]), &mbe(&[0], &[]));
        assert_eq!(format!("{product}"), "Q_0 P(1) + Q_1");
    }

    #[test]
    fn test_q0_times_p1() {
        let p = ValidPrime::new(3);
        let product = multiply_full(p, &mbe(&[0], &[]), &mbe(&[], &[1]));
        assert_eq!(format!("{product}"), "Q_0 P(1)");
    }
}
