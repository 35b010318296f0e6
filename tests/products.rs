use expect_test::expect;
use fp::prime::ValidPrime;
use milnor::multiply::{multiply_even, multiply_full};
use milnor::{MilnorAlgebra, MilnorBasisElement, MilnorElement};
use rstest::rstest;

fn mbe(q_part: &[u32], p_part: &[u32]) -> MilnorBasisElement {
    MilnorBasisElement::new(q_part.to_vec(), p_part.to_vec())
}

/// Left-multiply each term of an element by a basis monomial, extending
/// linearly.
fn basis_times_element(
    p: ValidPrime,
    m: &MilnorBasisElement,
    elt: &MilnorElement,
) -> MilnorElement {
    let mut result = MilnorElement::zero();
    for (term, c) in elt.iter() {
        for (product, c2) in multiply_full(p, m, term).iter() {
            result.add_basis_element(p, product.clone(), p.product(c, c2));
        }
    }
    result
}

/// Right-multiply each term of an element by a basis monomial, extending
/// linearly.
fn element_times_basis(
    p: ValidPrime,
    elt: &MilnorElement,
    m: &MilnorBasisElement,
) -> MilnorElement {
    let mut result = MilnorElement::zero();
    for (term, c) in elt.iter() {
        for (product, c2) in multiply_full(p, term, m).iter() {
            result.add_basis_element(p, product.clone(), p.product(c, c2));
        }
    }
    result
}

#[test]
fn test_even_identity() {
    for p in [2, 3, 5] {
        let p = ValidPrime::new(p);
        let product = multiply_even(p, &[], &[]);
        assert_eq!(product.len(), 1);
        assert_eq!(product.coefficient(&MilnorBasisElement::unit()), 1);
    }
}

#[test]
fn test_sq1_squares_to_zero() {
    let p = ValidPrime::new(2);
    assert!(multiply_even(p, &[1], &[1]).is_zero());
}

#[test]
fn test_golden_products_mod_2() {
    let p = ValidPrime::new(2);
    expect![["P(0, 1) + P(3)"]].assert_eq(&format!("{}", multiply_even(p, &[2], &[1])));
    expect![["P(1, 1)"]].assert_eq(&format!("{}", multiply_even(p, &[2], &[2])));
    expect![["P(3)"]].assert_eq(&format!("{}", multiply_even(p, &[1], &[2])));
    expect![["P(1, 2) + P(7)"]].assert_eq(&format!("{}", multiply_even(p, &[4], &[3])));
}

#[test]
fn test_golden_products_mod_3() {
    let p = ValidPrime::new(3);
    expect![["2 * P(2)"]].assert_eq(&format!("{}", multiply_even(p, &[1], &[1])));
    expect![["Q_0 P(1) + Q_1"]].assert_eq(&format!(
        "{}",
        multiply_full(p, &mbe(&[], &[1]), &mbe(&[0], &[]))
    ));
    expect![["Q_0 P(1)"]].assert_eq(&format!(
        "{}",
        multiply_full(p, &mbe(&[0], &[]), &mbe(&[], &[1]))
    ));
    expect![["2 * Q_0 Q_1"]].assert_eq(&format!(
        "{}",
        multiply_full(p, &mbe(&[1], &[]), &mbe(&[0], &[]))
    ));
}

#[test]
fn test_exterior_generators_square_to_zero() {
    let p = ValidPrime::new(3);
    for e in 0..4 {
        let q = mbe(&[e], &[]);
        assert!(multiply_full(p, &q, &q).is_zero());
    }
}

#[rstest]
#[case(2, 16)]
#[case(3, 10)]
#[case(5, 8)]
fn test_even_product_commutes(#[case] p: u32, #[case] max_degree: i32) {
    let p = ValidPrime::new(p);
    let algebra = MilnorAlgebra::new(p);
    for d1 in 0..=max_degree {
        for d2 in d1..=max_degree {
            for r in algebra.basis_even(d1) {
                for s in algebra.basis_even(d2) {
                    let forward = multiply_even(p, &r, &s);
                    let backward = multiply_even(p, &s, &r);
                    assert_eq!(
                        forward, backward,
                        "P({r:?}) * P({s:?}) differs from P({s:?}) * P({r:?})"
                    );
                    for (_, c) in forward.iter() {
                        assert!(c > 0 && c < *p, "stored coefficient {c} out of range");
                    }
                }
            }
        }
    }
}

#[rstest]
#[case(2, 12)]
#[case(3, 14)]
fn test_full_product_associative(#[case] p: u32, #[case] max_degree: i32) {
    let p_ = ValidPrime::new(p);
    let algebra = MilnorAlgebra::new(p_);
    let mut monomials = Vec::new();
    for d in 0..=max_degree {
        monomials.extend(algebra.basis(d).map(|m| (d, m)));
    }
    for (d1, m1) in &monomials {
        for (d2, m2) in &monomials {
            if d1 + d2 > max_degree {
                continue;
            }
            for (d3, m3) in &monomials {
                if d1 + d2 + d3 > max_degree {
                    continue;
                }
                let left = element_times_basis(p_, &multiply_full(p_, m1, m2), m3);
                let right = basis_times_element(p_, m1, &multiply_full(p_, m2, m3));
                assert_eq!(left, right, "({m1} {m2}) {m3} != {m1} ({m2} {m3})");
            }
        }
    }
}

#[rstest]
#[case(2, 14)]
#[case(3, 16)]
fn test_products_are_homogeneous(#[case] p: u32, #[case] max_degree: i32) {
    let p_ = ValidPrime::new(p);
    let algebra = MilnorAlgebra::new(p_);
    let generic = algebra.generic();
    for d1 in 0..=max_degree {
        for d2 in 0..=max_degree - d1 {
            for m1 in algebra.basis(d1) {
                for m2 in algebra.basis(d2) {
                    let product = algebra.product(&m1, &m2).unwrap();
                    for (term, c) in product.iter() {
                        assert_eq!(term.degree(p_, generic), d1 + d2);
                        assert!(c > 0 && c < *p_);
                    }
                }
            }
        }
    }
}

#[test]
fn test_unit_is_two_sided() {
    let p = ValidPrime::new(3);
    let algebra = MilnorAlgebra::new(p);
    let unit = MilnorBasisElement::unit();
    for d in 0..=12 {
        for m in algebra.basis(d) {
            let left = multiply_full(p, &unit, &m);
            let right = multiply_full(p, &m, &unit);
            assert_eq!(left.coefficient(&m), 1);
            assert_eq!(right.coefficient(&m), 1);
            assert_eq!(left.len(), 1);
            assert_eq!(right.len(), 1);
        }
    }
}
