//! Random polynomials over GF(256) used as the sharing basis.
//!
//! Holds only transient secret coefficients; every `Polynomial` wipes its
//! buffer on drop (`ZeroizeOnDrop`), matching the teacher crate's
//! `share.rs` discipline and the spec's requirement that the dealer not
//! retain coefficients after shares are emitted.

extern crate alloc;
use alloc::vec::Vec;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::MAX_DEGREE;
use crate::error::{Error, Result};
use crate::field::Elem;

/// `P(x) = a0 + a1*x + ... + ad*x^d`, `d <= 254`. `a0` carries the secret
/// byte; `a1..=ad` are uniformly random *nonzero* field elements, which
/// rules out the accidental degree collapse a zero high coefficient would
/// cause.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Polynomial {
    coeffs: Vec<Elem>,
}

impl Polynomial {
    /// Degree of the polynomial (`coeffs.len() - 1`).
    pub fn degree(&self) -> u8 {
        (self.coeffs.len() - 1) as u8
    }

    /// Draws a random degree-`d` polynomial with constant term `secret`.
    /// Every non-constant coefficient is sampled uniformly and rejected if
    /// zero, so `a1..=ad` are each drawn from `[1, 255]`.
    pub fn create<R: RngCore + CryptoRng>(secret: u8, degree: u8, rng: &mut R) -> Result<Self> {
        if degree > MAX_DEGREE {
            return Err(Error::InvalidParam);
        }
        let mut coeffs = Vec::with_capacity(degree as usize + 1);
        coeffs.push(Elem(secret));
        for _ in 0..degree {
            coeffs.push(Elem(random_nonzero(rng)));
        }
        Ok(Polynomial { coeffs })
    }

    /// Evaluates `P(x)` via Horner's method, starting from `a_d` down to
    /// `a_0`. Defined for all `x`, though the dealer never calls this with
    /// `x = 0` (that would return the secret itself).
    pub fn evaluate(&self, x: u8) -> u8 {
        let x = Elem(x);
        let mut result = *self.coeffs.last().expect("polynomial always has >= 1 coefficient");
        for coeff in self.coeffs.iter().rev().skip(1) {
            result = result * x + *coeff;
        }
        result.0
    }

    /// Lagrange-interpolates the constant term (value at `x = 0`) from `n`
    /// `(x, y)` points. Callers must guarantee `xs` has no duplicates and no
    /// zeros, and `n >= K`; under those preconditions the result is the
    /// unique degree-`(n-1)` polynomial's value at 0.
    pub fn interpolate(xs: &[u8], ys: &[u8]) -> Result<u8> {
        if xs.len() != ys.len() || xs.is_empty() {
            return Err(Error::InvalidShares);
        }
        let n = xs.len();
        let mut acc = Elem(0);
        for j in 0..n {
            let xj = Elem(xs[j]);
            let yj = Elem(ys[j]);
            let mut numerator = Elem(1);
            let mut denominator = Elem(1);
            for m in 0..n {
                if m == j {
                    continue;
                }
                let xm = Elem(xs[m]);
                numerator = numerator * xm;
                denominator = denominator * (xm - xj);
            }
            let lambda = numerator.div(denominator);
            acc = acc + yj * lambda;
        }
        Ok(acc.0)
    }

    /// Overwrites every coefficient in a compiler-opaque way and truncates
    /// the backing storage. After this call the polynomial is degree 0 with
    /// a zero constant term.
    pub fn wipe(&mut self) {
        self.coeffs.zeroize();
        self.coeffs.clear();
        self.coeffs.push(Elem(0));
    }
}

/// Draws a single uniformly random nonzero byte. Thin wrapper around
/// [`crate::rng::fill_nonzero`] for the single-coefficient case.
pub(crate) fn random_nonzero<R: RngCore + CryptoRng>(rng: &mut R) -> u8 {
    let mut buf = [0u8; 1];
    crate::rng::fill_nonzero(rng, &mut buf);
    buf[0]
}
