//! sampling.rs - Centered binomial noise and uniform rejection sampling

use alloc::vec;
use alloc::vec::Vec;

use lattikem_internal::{load24_le, load32_le};
use zeroize::Zeroize;

use super::params::{N, Q};
use super::polynomial::Polynomial;
use crate::error::{validate, Result};
use crate::xof::{ExtendableOutputFunction, ShakeXof256};

/// Bytes of PRF output consumed by one CBD(eta) polynomial
pub const fn cbd_bytes(eta: u8) -> usize {
    eta as usize * N / 4
}

/// Trait for sampling polynomials from a Centered Binomial Distribution (CBD)
pub trait CbdSampler {
    /// Maps `eta·N/4` uniform bytes to a polynomial with coefficients in
    /// {-eta, ..., eta}
    fn sample_cbd(buf: &[u8], eta: u8) -> Result<Polynomial>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl CbdSampler for DefaultSamplers {
    fn sample_cbd(buf: &[u8], eta: u8) -> Result<Polynomial> {
        validate::parameter(eta == 2 || eta == 3, "eta", "supported values are 2 and 3")?;
        validate::length("cbd input", buf.len(), cbd_bytes(eta))?;

        let mut poly = Polynomial::zero();
        let coeffs = poly.coeffs_mut();

        match eta {
            2 => {
                for (i, chunk) in buf.chunks_exact(4).enumerate() {
                    let t = load32_le(chunk);
                    let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
                    for j in 0..8 {
                        let a = ((d >> (4 * j)) & 0x3) as i16;
                        let b = ((d >> (4 * j + 2)) & 0x3) as i16;
                        coeffs[8 * i + j] = a - b;
                    }
                }
            }
            _ => {
                for (i, chunk) in buf.chunks_exact(3).enumerate() {
                    let t = load24_le(chunk);
                    let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
                    for j in 0..4 {
                        let a = ((d >> (6 * j)) & 0x7) as i16;
                        let b = ((d >> (6 * j + 3)) & 0x7) as i16;
                        coeffs[4 * i + j] = a - b;
                    }
                }
            }
        }

        Ok(poly)
    }
}

/// Samples a noise polynomial from CBD(eta) with SHAKE-256(seed ‖ nonce)
/// as the byte source.
pub fn get_noise_poly(seed: &[u8], nonce: u8, eta: u8) -> Result<Polynomial> {
    validate::parameter(eta == 2 || eta == 3, "eta", "supported values are 2 and 3")?;

    let mut prf = ShakeXof256::new();
    prf.update(seed)?;
    prf.update(&[nonce])?;
    let mut buf = vec![0u8; cbd_bytes(eta)];
    prf.squeeze(&mut buf)?;

    let poly = DefaultSamplers::sample_cbd(&buf, eta);
    buf.zeroize();
    poly
}

/// Parses 12-bit candidates from `buf` (two per three bytes) and writes the
/// ones below q into `out`. Stops when `out` is full or fewer than three
/// bytes remain; returns how many values were written.
pub fn rej_uniform_into(out: &mut [i16], buf: &[u8]) -> usize {
    let mut ctr = 0;
    for chunk in buf.chunks_exact(3) {
        if ctr >= out.len() {
            break;
        }
        let d1 = (chunk[0] as u16) | ((chunk[1] as u16 & 0x0F) << 8);
        let d2 = ((chunk[1] >> 4) as u16) | ((chunk[2] as u16) << 4);

        if d1 < Q as u16 {
            out[ctr] = d1 as i16;
            ctr += 1;
        }
        if ctr < out.len() && d2 < Q as u16 {
            out[ctr] = d2 as i16;
            ctr += 1;
        }
    }
    ctr
}

/// Rejection-samples up to `req_len` values in {0, ..., q - 1} from `buf`.
/// Returns the accepted values and their count.
pub fn rej_uniform(buf: &[u8], req_len: usize) -> (Vec<i16>, usize) {
    let mut vals = vec![0i16; req_len];
    let count = rej_uniform_into(&mut vals, buf);
    vals.truncate(count);
    (vals, count)
}
