//! The secret-sharing polynomial a trusted dealer builds and evaluates to split
//! the Paillier decryption key across `l` servers.
use rug::{Assign, Integer};

use crate::key_gen::PrivateKey;
use crate::rand_state::RandomState;
use crate::utils::IntegerExt;
use crate::{utils, Share};

/// A degree-`(w-1)` polynomial over `Z/(n*m)Z` with constant term `d`.
///
/// Exists only during the dealing phase: construct it from a [`PrivateKey`],
/// evaluate it once per server via [`Polynomial::eval`], then let it drop (or
/// call [`Polynomial::clear`] explicitly) so its coefficients — `d` among them —
/// don't linger in memory.
pub struct Polynomial {
    coeffs: Vec<Integer>,
    modulus: Integer,
}

impl Polynomial {
    /// Builds the sharing polynomial for `sk`: `c_0 = d`, `c_1..c_{w-1}` uniform
    /// in `[0, n*m)`.
    pub fn build(sk: &PrivateKey, rng: &mut RandomState) -> Self {
        let mut coeffs = Vec::with_capacity(sk.w() as usize);
        coeffs.push(sk.d().clone());
        for _ in 1..sk.w() {
            coeffs.push(utils::sample_uniform(rng, sk.nm()));
        }
        Self {
            coeffs,
            modulus: sk.nm().clone(),
        }
    }

    /// Evaluates the polynomial at the 1-indexed point `i+1` via Horner's method,
    /// so that `eval(0)` never touches the constant term directly at `x = 0`
    /// (which would reveal `d`).
    ///
    /// `i` is the server's 0-based index, `i < l`.
    pub fn eval(&self, i: u32) -> Share {
        let x = Integer::from(i + 1);
        self.coeffs
            .iter()
            .rev()
            .fold(Integer::new(), |acc, c| (acc * &x + c).modulo(&self.modulus))
    }

    /// Zeroes every coefficient without releasing the container. Called
    /// automatically on `Drop`.
    pub fn clear(&mut self) {
        for c in &mut self.coeffs {
            c.assign(0);
        }
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// p(x) = 2 + 2x + 2x^2 mod 1000, p(1)=6, p(2)=14, p(3)=26
    #[test]
    fn polynomial_evaluation() {
        let poly = Polynomial {
            coeffs: vec![Integer::from(2), Integer::from(2), Integer::from(2)],
            modulus: Integer::from(1000),
        };
        assert_eq!(poly.eval(0), 6);
        assert_eq!(poly.eval(1), 14);
        assert_eq!(poly.eval(2), 26);
    }
}
