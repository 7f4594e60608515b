//! serialize.rs - Polynomial coefficient packing and compression
//!
//! All byte layouts are little-endian bit streams: coefficient `i` occupies
//! bits `i·d .. (i+1)·d` of the output. This covers the 12-bit encoding of
//! full coefficients, the 1-bit message encoding and every compressed width.

use alloc::vec::Vec;

use lattikem_internal::wrapping::{as_u16, low_u8};
use lattikem_internal::WrappingOps;

use super::params::{
    COMPRESS_MUL, HALF_Q, MSG_BYTES, N, POLY_BYTES, Q, SUPPORTED_COMPRESSION_BITS,
};
use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};

/// Trait for packing coefficient values into a byte array
pub trait CoefficientPacker {
    /// Packs the low `bits_per_coeff` bits of every value
    fn pack_coeffs(values: &[u16; N], bits_per_coeff: u32) -> Result<Vec<u8>>;
}

/// Trait for unpacking coefficient values from a byte array
pub trait CoefficientUnpacker {
    /// Unpacks `N` values of `bits_per_coeff` bits each
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: u32) -> Result<[u16; N]>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

fn check_width(bits_per_coeff: u32) -> Result<()> {
    validate::parameter(
        (1..=16).contains(&bits_per_coeff),
        "bits_per_coeff",
        "must be in range [1, 16]",
    )
}

/// Size in bytes of `N` coefficients packed at `bits_per_coeff` bits
pub const fn packed_len(bits_per_coeff: u32) -> usize {
    N * bits_per_coeff as usize / 8
}

impl CoefficientPacker for DefaultCoefficientSerde {
    fn pack_coeffs(values: &[u16; N], bits_per_coeff: u32) -> Result<Vec<u8>> {
        check_width(bits_per_coeff)?;

        let mask = (1u32 << bits_per_coeff) - 1;
        let mut out = Vec::with_capacity(packed_len(bits_per_coeff));
        let mut acc: u32 = 0;
        let mut acc_bits = 0;

        for &v in values.iter() {
            acc |= (v as u32 & mask) << acc_bits;
            acc_bits += bits_per_coeff;
            while acc_bits >= 8 {
                out.push(low_u8(acc));
                acc >>= 8;
                acc_bits -= 8;
            }
        }

        Ok(out)
    }
}

impl CoefficientUnpacker for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: u32) -> Result<[u16; N]> {
        check_width(bits_per_coeff)?;
        validate::length("packed coefficients", bytes.len(), packed_len(bits_per_coeff))?;

        let mask = (1u32 << bits_per_coeff) - 1;
        let mut values = [0u16; N];
        let mut acc: u32 = 0;
        let mut acc_bits = 0;
        let mut input = bytes.iter();

        for v in values.iter_mut() {
            while acc_bits < bits_per_coeff {
                let byte = input.next().copied().unwrap_or(0);
                acc |= (byte as u32) << acc_bits;
                acc_bits += 8;
            }
            *v = (acc & mask) as u16;
            acc >>= bits_per_coeff;
            acc_bits -= bits_per_coeff;
        }

        Ok(values)
    }
}

/// Rounds `x · 2^d / q` and keeps the low `d` bits. Expects `x` in {0..q-1}
/// and `d <= 11`.
///
/// The division by q is a multiply and shift so that the running time does
/// not depend on `x`.
#[inline(always)]
pub fn compress_coeff(x: u16, d: u32) -> u16 {
    let n = ((x as u64) << d) + (Q / 2) as u64;
    ((n.wmul(COMPRESS_MUL) >> 32) & ((1 << d) - 1)) as u16
}

/// Rounds `y · q / 2^d`
#[inline(always)]
pub fn decompress_coeff(y: u16, d: u32) -> i16 {
    ((y as u32 * Q as u32 + (1 << (d - 1))) >> d) as i16
}

fn check_compression_width(d: u32) -> Result<()> {
    if SUPPORTED_COMPRESSION_BITS.contains(&d) {
        Ok(())
    } else {
        Err(Error::param(
            "compression_bits",
            "supported widths are 4, 5, 10 and 11",
        ))
    }
}

impl Polynomial {
    fn normalized(&self) -> [u16; N] {
        let mut p = self.clone();
        p.csubq();
        let mut out = [0u16; N];
        for (o, c) in out.iter_mut().zip(p.coeffs().iter()) {
            *o = as_u16(*c);
        }
        out
    }

    /// Serializes with 12 bits per coefficient after a conditional
    /// subtraction of q. Expects coefficients in {0, ..., 2q - 1}.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        DefaultCoefficientSerde::pack_coeffs(&self.normalized(), 12)
    }

    /// Inverse of [`Polynomial::to_bytes`]. `bytes` must be exactly 384 long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("polynomial bytes", bytes.len(), POLY_BYTES)?;
        let values = DefaultCoefficientSerde::unpack_coeffs(bytes, 12)?;
        let mut poly = Self::zero();
        for (c, v) in poly.coeffs_mut().iter_mut().zip(values.iter()) {
            *c = *v as i16;
        }
        Ok(poly)
    }

    /// Encodes 32 message bytes, one bit per coefficient, as 0 or (q + 1) / 2
    pub fn from_msg(msg: &[u8; MSG_BYTES]) -> Self {
        let mut poly = Self::zero();
        for (i, byte) in msg.iter().enumerate() {
            for j in 0..8 {
                let mask = -(((byte >> j) & 1) as i16);
                poly.coeffs_mut()[8 * i + j] = mask & HALF_Q;
            }
        }
        poly
    }

    /// Decodes a message, rounding each coefficient to the nearer of 0 and
    /// q/2
    pub fn to_msg(&self) -> [u8; MSG_BYTES] {
        let values = self.normalized();
        let mut msg = [0u8; MSG_BYTES];
        for (i, byte) in msg.iter_mut().enumerate() {
            for j in 0..8 {
                let bit = compress_coeff(values[8 * i + j], 1);
                *byte |= (bit as u8) << j;
            }
        }
        msg
    }

    /// Compresses every coefficient to `d` bits and packs the result.
    /// Supported widths are 4, 5, 10 and 11.
    pub fn compress(&self, d: u32) -> Result<Vec<u8>> {
        check_compression_width(d)?;
        let mut values = self.normalized();
        for v in values.iter_mut() {
            *v = compress_coeff(*v, d);
        }
        DefaultCoefficientSerde::pack_coeffs(&values, d)
    }

    /// Unpacks `d`-bit values and maps them back into {0, ..., q - 1}
    pub fn decompress(bytes: &[u8], d: u32) -> Result<Self> {
        check_compression_width(d)?;
        let values = DefaultCoefficientSerde::unpack_coeffs(bytes, d)?;
        let mut poly = Self::zero();
        for (c, v) in poly.coeffs_mut().iter_mut().zip(values.iter()) {
            *c = decompress_coeff(*v, d);
        }
        Ok(poly)
    }
}
