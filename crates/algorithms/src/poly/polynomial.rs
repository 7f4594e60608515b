//! polynomial.rs - Elements of R_q = Z_q[X]/(X^256 + 1)

use core::ops::{Add, Sub};

use lattikem_internal::WrappingOps;
use zeroize::Zeroize;

use super::ntt::{base_multiplier, inv_ntt, ntt, ZETAS};
use super::params::{MONT_SQUARED, N};
use super::reduce::{barrett_reduce, csubq, montgomery_reduce};
use crate::error::{validate, Result};

/// A polynomial with 256 signed 16-bit coefficients.
///
/// Coefficients are not kept reduced. Addition and subtraction wrap at 16
/// bits and callers reduce explicitly where the protocol requires it, the
/// same way the reference implementation does. Whether the coefficients are
/// in the NTT domain is tracked by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    coeffs: [i16; N],
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Polynomial {
    /// The zero polynomial
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Creates a polynomial from exactly `N` coefficients
    pub fn from_coeffs(coeffs: &[i16]) -> Result<Self> {
        validate::length("polynomial coefficients", coeffs.len(), N)?;
        let mut poly = Self::zero();
        poly.coeffs.copy_from_slice(coeffs);
        Ok(poly)
    }

    /// Wraps a coefficient array
    pub const fn from_array(coeffs: [i16; N]) -> Self {
        Self { coeffs }
    }

    /// Borrow the coefficients
    pub fn coeffs(&self) -> &[i16; N] {
        &self.coeffs
    }

    /// Mutably borrow the coefficients
    pub fn coeffs_mut(&mut self) -> &mut [i16; N] {
        &mut self.coeffs
    }

    /// Coefficient-wise wrapping sum, no reduction
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.add_assign(other);
        out
    }

    /// Coefficient-wise wrapping difference, no reduction
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.sub_assign(other);
        out
    }

    /// In-place `self += other`
    pub fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = a.wadd(*b);
        }
    }

    /// In-place `self -= other`
    pub fn sub_assign(&mut self, other: &Self) {
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = a.wsub(*b);
        }
    }

    /// Barrett-reduce every coefficient into {0, ..., q}
    pub fn barrett_reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Montgomery-reduce every coefficient, multiplying it by 2^-16
    pub fn montgomery_reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = montgomery_reduce(*c as i32);
        }
    }

    /// Multiply every coefficient by 2^16, moving it into Montgomery form
    pub fn to_montgomery(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = montgomery_reduce(*c as i32 * MONT_SQUARED as i32);
        }
    }

    /// Conditionally subtract q from every coefficient
    pub fn csubq(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = csubq(*c);
        }
    }

    /// Forward NTT followed by a Barrett reduction
    pub fn ntt(&mut self) {
        ntt(&mut self.coeffs);
        self.barrett_reduce();
    }

    /// Inverse NTT. The result carries a factor 2^16.
    pub fn inv_ntt(&mut self) {
        inv_ntt(&mut self.coeffs);
    }

    /// Product of two polynomials in the NTT domain, times 2^-16.
    ///
    /// Pairs of coefficients 4i, 4i+1 are multiplied modulo X^2 - ζ_i and
    /// the next pair modulo X^2 + ζ_i.
    pub fn base_mul(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        for i in 0..N / 4 {
            let zeta = ZETAS[64 + i];
            for (half, z) in [(0usize, zeta), (2, zeta.wrapping_neg())] {
                let at = 4 * i + half;
                let r = base_multiplier(
                    [self.coeffs[at], self.coeffs[at + 1]],
                    [other.coeffs[at], other.coeffs[at + 1]],
                    z,
                );
                out.coeffs[at] = r[0];
                out.coeffs[at + 1] = r[1];
            }
        }
        out
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::params::Q;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn random_poly(rng: &mut ChaChaRng, bound: i16) -> Polynomial {
        let mut p = Polynomial::zero();
        for c in p.coeffs_mut().iter_mut() {
            *c = rng.gen_range(-bound..=bound);
        }
        p
    }

    fn schoolbook(a: &Polynomial, b: &Polynomial) -> [i64; N] {
        let mut r = [0i64; N];
        for i in 0..N {
            for j in 0..N {
                let prod = a.coeffs()[i] as i64 * b.coeffs()[j] as i64;
                if i + j < N {
                    r[i + j] += prod;
                } else {
                    r[i + j - N] -= prod;
                }
            }
        }
        r
    }

    #[test]
    fn test_from_coeffs_length_checked() {
        assert!(Polynomial::from_coeffs(&[0; N]).is_ok());
        assert!(Polynomial::from_coeffs(&[0; N - 1]).is_err());
    }

    #[test]
    fn test_add_sub_inverse() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        let a = random_poly(&mut rng, Q - 1);
        let b = random_poly(&mut rng, Q - 1);
        assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn test_ntt_multiplication_matches_schoolbook() {
        let mut rng = ChaChaRng::seed_from_u64(1);
        let a = random_poly(&mut rng, Q - 1);
        let b = random_poly(&mut rng, 3);

        let mut a_hat = a.clone();
        let mut b_hat = b.clone();
        a_hat.ntt();
        b_hat.ntt();
        let mut prod = a_hat.base_mul(&b_hat);
        prod.barrett_reduce();
        prod.inv_ntt();

        let expected = schoolbook(&a, &b);
        for (got, want) in prod.coeffs().iter().zip(expected.iter()) {
            assert_eq!((*got as i64 - want).rem_euclid(Q as i64), 0);
        }
    }

    #[test]
    fn test_to_montgomery_scales_by_r() {
        let mut p = Polynomial::zero();
        p.coeffs_mut()[0] = 1;
        p.coeffs_mut()[1] = -5;
        p.to_montgomery();
        assert_eq!((p.coeffs()[0] as i32).rem_euclid(Q as i32), 2285);
        assert_eq!(
            (p.coeffs()[1] as i32).rem_euclid(Q as i32),
            (-5 * 2285i32).rem_euclid(Q as i32)
        );
    }

    #[test]
    fn test_zeroize_clears_coefficients() {
        let mut rng = ChaChaRng::seed_from_u64(3);
        let mut p = random_poly(&mut rng, Q - 1);
        p.zeroize();
        assert_eq!(p, Polynomial::zero());
    }
}
