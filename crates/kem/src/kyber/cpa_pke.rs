//! Kyber CPA-secure public key encryption (IDCPA).
//!
//! Byte-level interface: public keys are `to_bytes(t̂) ‖ seed`, secret keys
//! are `to_bytes(ŝ)` and ciphertexts `compress(u, du) ‖ compress(v, dv)`.

use alloc::vec::Vec;

use lattikem_algorithms::hash::{HashFunction, Sha3_512};
use lattikem_algorithms::poly::sampling::get_noise_poly;
use lattikem_algorithms::Polynomial;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::matrix::gen_matrix;
use super::params::{KyberParams, KYBER_SYM_BYTES};
use super::polyvec::PolyVec;
use crate::error::{validate, Error, Result};

/// IND-CPA public key bytes
pub type CpaPublicKeyBytes = Vec<u8>;
/// IND-CPA secret key bytes, wiped on drop
pub type CpaSecretKeyBytes = Zeroizing<Vec<u8>>;

/// Samples a vector of CBD(eta) polynomials with consecutive nonces
/// starting at `first_nonce`.
fn noise_vec<P: KyberParams>(seed: &[u8], first_nonce: u8, eta: u8) -> Result<PolyVec<P>> {
    let mut pv = PolyVec::<P>::zero();
    for (i, p) in pv.polys.iter_mut().enumerate() {
        *p = get_noise_poly(seed, first_nonce + i as u8, eta)?;
    }
    Ok(pv)
}

/// Splits a public key into the packed vector t̂ and the matrix seed.
fn unpack_pk<P: KyberParams>(pk: &[u8]) -> Result<(PolyVec<P>, &[u8])> {
    validate::length("IND-CPA public key", pk.len(), P::PUBLIC_KEY_BYTES)?;
    let (packed, seed) = pk.split_at(P::POLYVEC_BYTES);
    Ok((PolyVec::from_bytes(packed)?, seed))
}

/// Deterministic key generation from a 32-byte seed.
///
/// `G(seed)` is split into the public matrix seed and the noise seed.
/// s uses nonces 0..k and e uses k..2k, both from CBD(eta1).
pub fn idcpa_gen_keypair_from_seed<P: KyberParams>(
    seed: &[u8],
) -> Result<(CpaPublicKeyBytes, CpaSecretKeyBytes)> {
    validate::length("IND-CPA key generation seed", seed.len(), KYBER_SYM_BYTES)?;

    let digest = Zeroizing::new(Sha3_512::digest(seed)?);
    let (public_seed, noise_seed) = digest.split_at(KYBER_SYM_BYTES);

    let a = gen_matrix::<P>(public_seed, false)?;
    let mut s = noise_vec::<P>(noise_seed, 0, P::ETA1)?;
    let mut e = noise_vec::<P>(noise_seed, P::K as u8, P::ETA1)?;
    s.ntt();
    e.ntt();

    let mut t = PolyVec::<P>::zero();
    for (row, ti) in a.iter().zip(t.polys.iter_mut()) {
        *ti = row.pointwise_mul(&s);
        ti.to_montgomery();
    }
    t.add_assign(&e);
    t.barrett_reduce();

    let mut pk = t.to_bytes()?;
    pk.extend_from_slice(public_seed);
    let sk = Zeroizing::new(s.to_bytes()?);

    s.zeroize();
    e.zeroize();

    debug!(
        algorithm = P::NAME,
        pk_len = pk.len(),
        sk_len = sk.len(),
        "generated IND-CPA key pair"
    );
    Ok((pk, sk))
}

/// Key generation with 32 bytes of fresh randomness from `rng`.
pub fn idcpa_gen_keypair<P: KyberParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(CpaPublicKeyBytes, CpaSecretKeyBytes)> {
    let mut seed = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    rng.try_fill_bytes(&mut seed[..])
        .map_err(|_| Error::KeyGeneration {
            algorithm: P::NAME,
            details: "random number generator failure",
        })?;
    idcpa_gen_keypair_from_seed::<P>(&seed[..])
}

/// Encrypts a 32-byte message under `pk` with 32 bytes of coins.
///
/// r uses nonces 0..k from CBD(eta1), e1 uses k..2k and e2 uses 2k, both
/// from CBD(eta2).
pub fn idcpa_enc<P: KyberParams>(pk: &[u8], msg: &[u8], coins: &[u8]) -> Result<Vec<u8>> {
    validate::length("message", msg.len(), KYBER_SYM_BYTES)?;
    validate::length("coins", coins.len(), KYBER_SYM_BYTES)?;
    let (t_hat, seed) = unpack_pk::<P>(pk)?;

    let mut msg_arr = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    msg_arr.copy_from_slice(msg);
    let mut m = Polynomial::from_msg(&msg_arr);

    let at = gen_matrix::<P>(seed, true)?;
    let mut r = noise_vec::<P>(coins, 0, P::ETA1)?;
    let mut e1 = noise_vec::<P>(coins, P::K as u8, P::ETA2)?;
    let mut e2 = get_noise_poly(coins, 2 * P::K as u8, P::ETA2)?;
    r.ntt();

    let mut u = PolyVec::<P>::zero();
    for (row, ui) in at.iter().zip(u.polys.iter_mut()) {
        *ui = row.pointwise_mul(&r);
    }
    let mut v = t_hat.pointwise_mul(&r);

    u.inv_ntt();
    v.inv_ntt();

    u.add_assign(&e1);
    v.add_assign(&e2);
    v.add_assign(&m);
    u.barrett_reduce();
    v.barrett_reduce();

    let mut ct = u.compress()?;
    ct.extend_from_slice(&v.compress(P::DV)?);

    r.zeroize();
    e1.zeroize();
    e2.zeroize();
    m.zeroize();
    v.zeroize();

    debug!(algorithm = P::NAME, ct_len = ct.len(), "IND-CPA encryption");
    Ok(ct)
}

/// Decrypts an IND-CPA ciphertext with the packed secret vector.
pub fn idcpa_dec<P: KyberParams>(ct: &[u8], sk: &[u8]) -> Result<Zeroizing<[u8; KYBER_SYM_BYTES]>> {
    validate::length("IND-CPA ciphertext", ct.len(), P::CIPHERTEXT_BYTES)?;
    validate::length("IND-CPA secret key", sk.len(), P::CPA_SECRET_KEY_BYTES)?;

    let (ct_u, ct_v) = ct.split_at(P::POLYVEC_COMPRESSED_BYTES);
    let mut u = PolyVec::<P>::decompress(ct_u)?;
    let v = Polynomial::decompress(ct_v, P::DV)?;
    let mut s = PolyVec::<P>::from_bytes(sk)?;

    u.ntt();
    let mut mp = s.pointwise_mul(&u);
    mp.inv_ntt();

    let mut diff = v.sub(&mp);
    diff.barrett_reduce();
    let msg = Zeroizing::new(diff.to_msg());

    s.zeroize();
    mp.zeroize();
    diff.zeroize();

    debug!(algorithm = P::NAME, ct_len = ct.len(), "IND-CPA decryption");
    Ok(msg)
}
