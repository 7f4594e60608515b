//! Kyber key, ciphertext and shared-secret types and the `api::Kem`
//! implementation.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use lattikem_api::error::Result as ApiResult;
use lattikem_api::{Kem, Serialize, SerializeSecret};
use lattikem_internal::constant_time::ct_eq;
use lattikem_params::pqc::kyber::{KYBER1024, KYBER512, KYBER768};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{
    kem_decaps, kem_encaps, kem_encaps_derand, kem_keypair, kem_keypair_derand,
};
use super::params::{KyberParams, KYBER_SS_BYTES};
use crate::error::{validate, Result};

fn is_public_key_len(len: usize) -> bool {
    [KYBER512, KYBER768, KYBER1024]
        .iter()
        .any(|set| set.public_key_size == len)
}

fn is_secret_key_len(len: usize) -> bool {
    [KYBER512, KYBER768, KYBER1024]
        .iter()
        .any(|set| set.secret_key_size == len)
}

fn is_ciphertext_len(len: usize) -> bool {
    [KYBER512, KYBER768, KYBER1024]
        .iter()
        .any(|set| set.ciphertext_size == len)
}

/// Kyber public key: `to_bytes(t̂) ‖ seed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KyberPublicKey(Vec<u8>);

/// Kyber KEM secret key: `sk_cpa ‖ pk ‖ H(pk) ‖ z`. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KyberSecretKey(Vec<u8>);

/// Kyber ciphertext: `compress(u, du) ‖ compress(v, dv)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KyberCiphertext(Vec<u8>);

/// 32-byte shared secret. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KyberSharedSecret([u8; KYBER_SS_BYTES]);

impl KyberPublicKey {
    /// Wraps raw bytes without checking their length.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Unwraps the encoded key
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl KyberSecretKey {
    /// Wraps raw bytes without checking their length.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl KyberCiphertext {
    /// Wraps raw bytes without checking their length.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Unwraps the encoded ciphertext
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl KyberSharedSecret {
    /// Wraps a 32-byte secret.
    pub fn new(bytes: [u8; KYBER_SS_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for KyberSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KyberSecretKey([REDACTED; {}])", self.0.len())
    }
}

impl fmt::Debug for KyberSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KyberSharedSecret([REDACTED])")
    }
}

impl PartialEq for KyberSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for KyberSharedSecret {}

impl AsRef<[u8]> for KyberPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for KyberPublicKey {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for KyberSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for KyberSecretKey {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for KyberCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for KyberCiphertext {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for KyberSharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for KyberSharedSecret {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl Serialize for KyberPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::key(
            is_public_key_len(bytes.len()),
            "Kyber public key",
            "length matches no Kyber level",
        )?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl Serialize for KyberCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::ciphertext(
            is_ciphertext_len(bytes.len()),
            "Kyber",
            "length matches no Kyber level",
        )?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for KyberSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::key(
            is_secret_key_len(bytes.len()),
            "Kyber secret key",
            "length matches no Kyber level",
        )?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl SerializeSecret for KyberSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("Kyber shared secret", bytes.len(), KYBER_SS_BYTES)?;
        let mut ss = [0u8; KYBER_SS_BYTES];
        ss.copy_from_slice(bytes);
        Ok(Self(ss))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_vec())
    }
}

/// Generic Kyber KEM over a parameter set.
///
/// Use the [`Kyber512`](super::Kyber512), [`Kyber768`](super::Kyber768) and
/// [`Kyber1024`](super::Kyber1024) aliases.
#[derive(Debug, Clone, Copy)]
pub struct KyberKem<P: KyberParams> {
    _params: PhantomData<P>,
}

impl<P: KyberParams> KyberKem<P> {
    /// Deterministic key generation from a 32-byte IDCPA seed and the
    /// 32-byte implicit-rejection key `z`.
    pub fn keypair_derand(seed: &[u8], z: &[u8]) -> Result<(KyberPublicKey, KyberSecretKey)> {
        let (pk, mut sk) = kem_keypair_derand::<P>(seed, z)?;
        Ok((KyberPublicKey(pk), KyberSecretKey(core::mem::take(&mut *sk))))
    }

    /// Encapsulation with a caller-supplied 32-byte message instead of fresh
    /// randomness.
    pub fn encapsulate_with_message(
        public_key: &KyberPublicKey,
        msg: &[u8],
    ) -> Result<(KyberCiphertext, KyberSharedSecret)> {
        let (ct, ss) = kem_encaps_derand::<P>(&public_key.0, msg)?;
        Ok((KyberCiphertext(ct), KyberSharedSecret(*ss)))
    }
}

impl<P: KyberParams> Kem for KyberKem<P> {
    type PublicKey = KyberPublicKey;
    type SecretKey = KyberSecretKey;
    type SharedSecret = KyberSharedSecret;
    type Ciphertext = KyberCiphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (pk, mut sk) = kem_keypair::<P, R>(rng)?;
        Ok((KyberPublicKey(pk), KyberSecretKey(core::mem::take(&mut *sk))))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let (ct, ss) = kem_encaps::<P, R>(&public_key.0, rng)?;
        Ok((KyberCiphertext(ct), KyberSharedSecret(*ss)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = kem_decaps::<P>(&ciphertext.0, &secret_key.0)?;
        Ok(KyberSharedSecret(*ss))
    }
}
