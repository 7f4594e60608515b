//! Kyber IND-CCA2 KEM construction using the Fujisaki-Okamoto transform.
//!
//! Secret keys are laid out as `sk_cpa ‖ pk ‖ H(pk) ‖ z`, where `z` keys the
//! implicit-rejection secret returned for ciphertexts that fail the
//! re-encryption check.

use alloc::vec::Vec;

use lattikem_algorithms::hash::{HashFunction, Sha3_256, Sha3_512};
use lattikem_algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use lattikem_internal::constant_time::{ct_assign, ct_eq_choice};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::cpa_pke::{idcpa_dec, idcpa_enc, idcpa_gen_keypair_from_seed};
use super::params::{KyberParams, KYBER_SS_BYTES, KYBER_SYM_BYTES};
use crate::error::{validate, Error, Result};

pub(crate) type IndCcaPublicKeyBytes = Vec<u8>;
pub(crate) type IndCcaSecretKeyBytes = Zeroizing<Vec<u8>>;
pub(crate) type IndCcaCiphertextBytes = Vec<u8>;
pub(crate) type SharedSecretBytes = Zeroizing<[u8; KYBER_SS_BYTES]>;

// H: SHA3-256
fn h_func(data: &[u8]) -> Result<[u8; KYBER_SYM_BYTES]> {
    Ok(Sha3_256::digest(data)?)
}

// G: SHA3-512, split into two 32-byte halves.
fn g_func(
    a: &[u8],
    b: &[u8],
) -> Result<(Zeroizing<[u8; KYBER_SYM_BYTES]>, Zeroizing<[u8; KYBER_SYM_BYTES]>)> {
    let mut hasher = Sha3_512::new();
    hasher.update(a)?.update(b)?;
    let mut digest = hasher.finalize()?;

    let mut first = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    let mut second = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    first.copy_from_slice(&digest[..KYBER_SYM_BYTES]);
    second.copy_from_slice(&digest[KYBER_SYM_BYTES..]);
    digest.zeroize();
    Ok((first, second))
}

// KDF: SHAKE-256(key ‖ H(ct)) squeezed to 32 bytes.
fn kdf(key: &[u8], h_ct: &[u8]) -> Result<SharedSecretBytes> {
    let mut xof = ShakeXof256::new();
    xof.update(key)?;
    xof.update(h_ct)?;
    let mut ss = Zeroizing::new([0u8; KYBER_SS_BYTES]);
    xof.squeeze(&mut ss[..])?;
    Ok(ss)
}

/// Deterministic key generation from the IDCPA seed and the rejection key z.
pub(crate) fn kem_keypair_derand<P: KyberParams>(
    seed: &[u8],
    z: &[u8],
) -> Result<(IndCcaPublicKeyBytes, IndCcaSecretKeyBytes)> {
    validate::length("implicit rejection key", z.len(), KYBER_SYM_BYTES)?;

    let (pk, sk_cpa) = idcpa_gen_keypair_from_seed::<P>(seed)?;
    let h_pk = h_func(&pk)?;

    let mut sk = Zeroizing::new(Vec::with_capacity(P::SECRET_KEY_BYTES));
    sk.extend_from_slice(&sk_cpa);
    sk.extend_from_slice(&pk);
    sk.extend_from_slice(&h_pk);
    sk.extend_from_slice(z);

    debug!(
        algorithm = P::NAME,
        pk_len = pk.len(),
        sk_len = sk.len(),
        "generated KEM key pair"
    );
    Ok((pk, sk))
}

/// IND-CCA2 key generation. Draws one 64-byte block: the IDCPA seed then z.
pub(crate) fn kem_keypair<P: KyberParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(IndCcaPublicKeyBytes, IndCcaSecretKeyBytes)> {
    let mut randomness = Zeroizing::new([0u8; 2 * KYBER_SYM_BYTES]);
    rng.try_fill_bytes(&mut randomness[..])
        .map_err(|_| Error::KeyGeneration {
            algorithm: P::NAME,
            details: "random number generator failure",
        })?;
    let (seed, z) = randomness.split_at(KYBER_SYM_BYTES);
    kem_keypair_derand::<P>(seed, z)
}

/// Encapsulation with a caller-chosen 32-byte message.
pub(crate) fn kem_encaps_derand<P: KyberParams>(
    pk: &[u8],
    msg: &[u8],
) -> Result<(IndCcaCiphertextBytes, SharedSecretBytes)> {
    validate::length("message", msg.len(), KYBER_SYM_BYTES)?;
    validate::length("Kyber public key", pk.len(), P::PUBLIC_KEY_BYTES)?;

    let h_msg = Zeroizing::new(h_func(msg)?);
    let h_pk = h_func(pk)?;
    let (kr1, kr2) = g_func(&h_msg[..], &h_pk)?;

    let ct = idcpa_enc::<P>(pk, &h_msg[..], &kr2[..])?;
    let h_ct = h_func(&ct)?;
    let ss = kdf(&kr1[..], &h_ct)?;

    debug!(algorithm = P::NAME, ct_len = ct.len(), "encapsulated shared secret");
    Ok((ct, ss))
}

/// IND-CCA2 encapsulation with a fresh random message.
pub(crate) fn kem_encaps<P: KyberParams, R: RngCore + CryptoRng>(
    pk: &[u8],
    rng: &mut R,
) -> Result<(IndCcaCiphertextBytes, SharedSecretBytes)> {
    let mut msg = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    rng.try_fill_bytes(&mut msg[..])
        .map_err(|_| Error::Encapsulation {
            algorithm: P::NAME,
            details: "random number generator failure",
        })?;
    kem_encaps_derand::<P>(pk, &msg[..])
}

/// IND-CCA2 decapsulation with implicit rejection.
///
/// Only wrongly sized inputs are errors. A well-sized ciphertext that fails
/// re-encryption yields `KDF(z ‖ H(ct))`; the comparison and the selection
/// both run in constant time.
pub(crate) fn kem_decaps<P: KyberParams>(ct: &[u8], sk: &[u8]) -> Result<SharedSecretBytes> {
    validate::length("Kyber ciphertext", ct.len(), P::CIPHERTEXT_BYTES)?;
    validate::length("Kyber secret key", sk.len(), P::SECRET_KEY_BYTES)?;

    let (sk_cpa, rest) = sk.split_at(P::CPA_SECRET_KEY_BYTES);
    let (pk, rest) = rest.split_at(P::PUBLIC_KEY_BYTES);
    let (h_pk, z) = rest.split_at(KYBER_SYM_BYTES);

    let msg = idcpa_dec::<P>(ct, sk_cpa)?;
    let (mut k, r) = g_func(&msg[..], h_pk)?;

    let mut ct_prime = idcpa_enc::<P>(pk, &msg[..], &r[..])?;
    let equal = ct_eq_choice(&ct_prime, ct);
    ct_assign(&mut k[..], z, !equal);

    let h_ct = h_func(ct)?;
    let ss = kdf(&k[..], &h_ct)?;

    ct_prime.zeroize();

    debug!(algorithm = P::NAME, ct_len = ct.len(), "decapsulated shared secret");
    Ok(ss)
}
