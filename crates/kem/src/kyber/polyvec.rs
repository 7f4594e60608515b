//! Polynomial vector operations for Kyber.

use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use lattikem_algorithms::poly::params::POLY_BYTES;
use lattikem_algorithms::poly::serialize::packed_len;
use lattikem_algorithms::Polynomial;
use zeroize::Zeroize;

use super::params::KyberParams;
use crate::error::{validate, Result};

/// A vector of `P::K` polynomials.
#[derive(Debug, PartialEq, Eq)]
pub struct PolyVec<P: KyberParams> {
    /// The polynomials in this vector.
    pub(crate) polys: Vec<Polynomial>,
    _params: PhantomData<P>,
}

impl<P: KyberParams> Zeroize for PolyVec<P> {
    fn zeroize(&mut self) {
        self.polys.iter_mut().for_each(Zeroize::zeroize);
    }
}

impl<P: KyberParams> Clone for PolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: KyberParams> PolyVec<P> {
    /// Creates a new zero PolyVec of dimension K.
    pub fn zero() -> Self {
        Self {
            polys: vec![Polynomial::zero(); P::K],
            _params: PhantomData,
        }
    }

    /// The components
    pub fn polys(&self) -> &[Polynomial] {
        &self.polys
    }

    /// In-place component-wise addition, no reduction.
    pub fn add_assign(&mut self, other: &Self) {
        for (p1, p2) in self.polys.iter_mut().zip(other.polys.iter()) {
            p1.add_assign(p2);
        }
    }

    /// Forward NTT (with Barrett reduction) of every component.
    pub fn ntt(&mut self) {
        self.polys.iter_mut().for_each(Polynomial::ntt);
    }

    /// Inverse NTT of every component.
    pub fn inv_ntt(&mut self) {
        self.polys.iter_mut().for_each(Polynomial::inv_ntt);
    }

    /// Barrett-reduce every coefficient.
    pub fn barrett_reduce(&mut self) {
        self.polys.iter_mut().for_each(Polynomial::barrett_reduce);
    }

    /// Conditionally subtract q from every coefficient.
    pub fn csubq(&mut self) {
        self.polys.iter_mut().for_each(Polynomial::csubq);
    }

    /// Inner product in the NTT domain: the sum of the component-wise base
    /// multiplications, Barrett-reduced. Carries a factor 2^-16.
    pub fn pointwise_mul(&self, other: &Self) -> Polynomial {
        let mut acc = Polynomial::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc.add_assign(&a.base_mul(b));
        }
        acc.barrett_reduce();
        acc
    }

    /// Serializes every component with 12 bits per coefficient.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(P::POLYVEC_BYTES);
        for p in &self.polys {
            out.extend_from_slice(&p.to_bytes()?);
        }
        Ok(out)
    }

    /// Inverse of [`PolyVec::to_bytes`]. `bytes` must be `k·384` long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("polynomial vector bytes", bytes.len(), P::POLYVEC_BYTES)?;
        let mut pv = Self::zero();
        for (p, chunk) in pv.polys.iter_mut().zip(bytes.chunks_exact(POLY_BYTES)) {
            *p = Polynomial::from_bytes(chunk)?;
        }
        Ok(pv)
    }

    /// Compresses every component to `P::DU` bits per coefficient.
    pub fn compress(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(P::POLYVEC_COMPRESSED_BYTES);
        for p in &self.polys {
            out.extend_from_slice(&p.compress(P::DU)?);
        }
        Ok(out)
    }

    /// Inverse of [`PolyVec::compress`], up to rounding.
    pub fn decompress(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "compressed polynomial vector",
            bytes.len(),
            P::POLYVEC_COMPRESSED_BYTES,
        )?;
        let mut pv = Self::zero();
        for (p, chunk) in pv.polys.iter_mut().zip(bytes.chunks_exact(packed_len(P::DU))) {
            *p = Polynomial::decompress(chunk, P::DU)?;
        }
        Ok(pv)
    }
}
