//! Arithmetic modulo a prime: a validated prime type and the binomial and
//! multinomial coefficients that drive Steenrod algebra calculations.

pub mod prime;
