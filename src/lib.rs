//! Structure constants of the Milnor basis of the mod p Steenrod algebra.
//!
//! Two operations are provided: the product of two basis monomials as an
//! Fp-linear combination of basis monomials, and the enumeration of every
//! basis monomial of a given degree, optionally restricted to a
//! sub-Hopf-algebra by a profile. The product follows Milnor's formula: in
//! the even subalgebra each term comes from an integer matrix weighted by
//! multinomial coefficients of its antidiagonals, and in the generic case
//! the exterior generators of the right factor are first commuted through
//! the left factor one at a time.
//!
//! Every call is independent and stateless: nothing is cached and nothing
//! is shared but the read-only algebra descriptor.

#![warn(clippy::default_trait_access)]
#![warn(clippy::if_not_else)]
#![warn(clippy::needless_continue)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::explicit_into_iter_loop)]

pub mod algebra;
pub mod basis;
pub mod combinatorics;
pub mod element;
pub mod matrix;
pub mod multiply;
pub mod profile;

pub use algebra::MilnorAlgebra;
pub use element::{MilnorBasisElement, MilnorElement, PPart, QPart};
pub use profile::{FullProfile, Profile};
