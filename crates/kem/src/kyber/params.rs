//! Kyber parameter definitions.

use lattikem_params::pqc::kyber::{self as global_params, KyberParameterSet};

pub use global_params::{KYBER_GEN_MATRIX_BYTES, KYBER_SS_BYTES, KYBER_SYM_BYTES};

/// Trait defining parameters for a specific Kyber variant.
///
/// Every size is derived from the pinned parameter table in
/// `lattikem-params`.
pub trait KyberParams: Send + Sync + 'static {
    /// Row of the parameter table
    const SET: KyberParameterSet;

    /// Algorithm name string.
    const NAME: &'static str;

    /// Security parameter k (dimension of vectors/matrices).
    const K: usize = Self::SET.k;
    /// Noise parameter eta1 for s, e and r.
    const ETA1: u8 = Self::SET.eta1;
    /// Noise parameter eta2 for e1 and e2.
    const ETA2: u8 = Self::SET.eta2;
    /// Compression bits for the vector part of the ciphertext.
    const DU: u32 = Self::SET.du as u32;
    /// Compression bits for the polynomial part of the ciphertext.
    const DV: u32 = Self::SET.dv as u32;

    /// Serialized polynomial vector, 12 bits per coefficient
    const POLYVEC_BYTES: usize = Self::SET.polyvec_bytes();
    /// Compressed vector part of a ciphertext
    const POLYVEC_COMPRESSED_BYTES: usize = Self::SET.polyvec_compressed_bytes();
    /// Compressed polynomial part of a ciphertext
    const POLY_COMPRESSED_BYTES: usize = Self::SET.poly_compressed_bytes();

    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize = Self::SET.public_key_size;
    /// Size of the IND-CPA secret key in bytes.
    const CPA_SECRET_KEY_BYTES: usize = Self::SET.cpa_secret_key_size;
    /// Size of the KEM secret key in bytes.
    const SECRET_KEY_BYTES: usize = Self::SET.secret_key_size;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize = Self::SET.ciphertext_size;
}

/// Kyber-512 parameters (k = 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kyber512Params;

impl KyberParams for Kyber512Params {
    const SET: KyberParameterSet = global_params::KYBER512;
    const NAME: &'static str = "Kyber-512";
}

/// Kyber-768 parameters (k = 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kyber768Params;

impl KyberParams for Kyber768Params {
    const SET: KyberParameterSet = global_params::KYBER768;
    const NAME: &'static str = "Kyber-768";
}

/// Kyber-1024 parameters (k = 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kyber1024Params;

impl KyberParams for Kyber1024Params {
    const SET: KyberParameterSet = global_params::KYBER1024;
    const NAME: &'static str = "Kyber-1024";
}
