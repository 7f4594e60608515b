//! Expansion of a public seed into the k×k matrix A.

use alloc::vec::Vec;

use lattikem_algorithms::poly::params::N;
use lattikem_algorithms::poly::sampling::rej_uniform_into;
use lattikem_algorithms::xof::{ExtendableOutputFunction, ShakeXof128};
use lattikem_algorithms::Polynomial;
use lattikem_params::utils::hash::SHAKE128_RATE;
use tracing::trace;

use super::params::{KyberParams, KYBER_GEN_MATRIX_BYTES, KYBER_SYM_BYTES};
use super::polyvec::PolyVec;
use crate::error::{validate, Result};

/// Samples one uniform polynomial from SHAKE-128(seed ‖ x ‖ y).
///
/// The result is interpreted directly as an NTT-domain polynomial.
pub(crate) fn sample_cell(seed: &[u8], x: u8, y: u8) -> Result<Polynomial> {
    let mut xof = ShakeXof128::new();
    xof.update(seed)?;
    xof.update(&[x, y])?;
    sample_uniform(&mut xof, x, y)
}

/// Rejection-samples 256 coefficients from an absorbed XOF: one
/// 672-byte squeeze, then one rate-sized block at a time until the
/// polynomial is full. Later blocks append at the current count.
fn sample_uniform<X: ExtendableOutputFunction>(xof: &mut X, x: u8, y: u8) -> Result<Polynomial> {
    let mut buf = [0u8; KYBER_GEN_MATRIX_BYTES];
    xof.squeeze(&mut buf)?;

    let mut poly = Polynomial::zero();
    let mut ctr = rej_uniform_into(poly.coeffs_mut(), &buf);

    let mut block = [0u8; SHAKE128_RATE];
    while ctr < N {
        trace!(x, y, ctr, "matrix cell needs another XOF block");
        xof.squeeze(&mut block)?;
        ctr += rej_uniform_into(&mut poly.coeffs_mut()[ctr..], &block);
    }

    Ok(poly)
}

/// Deterministically generates A (or its transpose) from a 32-byte seed.
///
/// Cell (i, j) absorbs the index bytes j, i; the transposed matrix absorbs
/// i, j, so `gen_matrix(seed, true)[i][j] == gen_matrix(seed, false)[j][i]`.
pub fn gen_matrix<P: KyberParams>(seed: &[u8], transposed: bool) -> Result<Vec<PolyVec<P>>> {
    validate::length("matrix seed", seed.len(), KYBER_SYM_BYTES)?;

    let mut a = Vec::with_capacity(P::K);
    for i in 0..P::K {
        let mut row = PolyVec::<P>::zero();
        for (j, poly) in row.polys.iter_mut().enumerate() {
            let (x, y) = if transposed { (i, j) } else { (j, i) };
            *poly = sample_cell(seed, x as u8, y as u8)?;
        }
        a.push(row);
    }
    Ok(a)
}
