//! Monomial basis for 2D polynomial surfaces.
//!
//! Each basis term is `x^i * y^j`. Powers are integer powers, so `v^0 = 1` for
//! every `v`, including `0`.

use crate::domain::Term;

/// Compute `base^exp` for a non-negative integer exponent.
pub fn int_pow(base: f64, exp: usize) -> f64 {
    match i32::try_from(exp) {
        Ok(e) => base.powi(e),
        Err(_) => base.powf(exp as f64),
    }
}

/// Evaluate the term `x^i * y^j`.
pub fn monomial(x: f64, y: f64, term: Term) -> f64 {
    int_pow(x, term.i) * int_pow(y, term.j)
}
