//! Run-time selection of a Kyber security level.
//!
//! [`KyberLevel`] names a parameter set and [`Kyber`] dispatches the raw-byte
//! operations to the matching typed implementation. The level is fixed when
//! the `Kyber` value is constructed.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use lattikem_params::pqc::kyber::{KyberParameterSet, KYBER1024, KYBER512, KYBER768};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::ind_cca::{kem_decaps, kem_encaps, kem_encaps_derand, kem_keypair};
use super::params::{Kyber1024Params, Kyber512Params, Kyber768Params, KYBER_SS_BYTES};
use crate::error::{Error, Result};

/// Kyber security level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KyberLevel {
    /// k = 2, NIST level 1
    Kyber512,
    /// k = 3, NIST level 3
    Kyber768,
    /// k = 4, NIST level 5
    Kyber1024,
}

impl KyberLevel {
    /// All levels, smallest first
    pub const ALL: [KyberLevel; 3] = [
        KyberLevel::Kyber512,
        KyberLevel::Kyber768,
        KyberLevel::Kyber1024,
    ];

    /// The pinned parameter table row
    pub const fn params(self) -> KyberParameterSet {
        match self {
            KyberLevel::Kyber512 => KYBER512,
            KyberLevel::Kyber768 => KYBER768,
            KyberLevel::Kyber1024 => KYBER1024,
        }
    }

    /// Lowercase identifier, e.g. `"kyber768"`
    pub const fn as_str(self) -> &'static str {
        match self {
            KyberLevel::Kyber512 => "kyber512",
            KyberLevel::Kyber768 => "kyber768",
            KyberLevel::Kyber1024 => "kyber1024",
        }
    }

    /// Module rank k
    pub const fn k(self) -> usize {
        self.params().k
    }

    /// Noise parameter for s, e and r
    pub const fn eta1(self) -> u8 {
        self.params().eta1
    }

    /// Noise parameter for e1 and e2
    pub const fn eta2(self) -> u8 {
        self.params().eta2
    }

    /// Compression width of the vector part of a ciphertext
    pub const fn du(self) -> usize {
        self.params().du
    }

    /// Compression width of the polynomial part of a ciphertext
    pub const fn dv(self) -> usize {
        self.params().dv
    }

    /// Encoded public key length
    pub const fn public_key_bytes(self) -> usize {
        self.params().public_key_size
    }

    /// Encoded IND-CPA secret key length
    pub const fn cpa_secret_key_bytes(self) -> usize {
        self.params().cpa_secret_key_size
    }

    /// Encoded KEM secret key length, including pk, H(pk) and z
    pub const fn secret_key_bytes(self) -> usize {
        self.params().secret_key_size
    }

    /// Ciphertext length
    pub const fn ciphertext_bytes(self) -> usize {
        self.params().ciphertext_size
    }

    /// Shared secret length, 32 at every level
    pub const fn shared_secret_bytes(self) -> usize {
        KYBER_SS_BYTES
    }
}

impl fmt::Display for KyberLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KyberLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        KyberLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownLevel(name.to_string()))
    }
}

impl TryFrom<&str> for KyberLevel {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

// Binds `$p` to the parameter type of `$level` for the duration of `$body`.
macro_rules! with_params {
    ($level:expr, $p:ident => $body:expr) => {
        match $level {
            KyberLevel::Kyber512 => {
                type $p = Kyber512Params;
                $body
            }
            KyberLevel::Kyber768 => {
                type $p = Kyber768Params;
                $body
            }
            KyberLevel::Kyber1024 => {
                type $p = Kyber1024Params;
                $body
            }
        }
    };
}

/// Kyber KEM over raw byte buffers at a run-time chosen level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kyber {
    level: KyberLevel,
}

impl Kyber {
    /// Fixes the level for the lifetime of the value.
    pub fn new(level: KyberLevel) -> Self {
        Self { level }
    }

    /// The level chosen at construction
    pub fn level(&self) -> KyberLevel {
        self.level
    }

    /// Generates `(public key, secret key)` with randomness from `rng`.
    pub fn gen_keypair_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
        with_params!(self.level, P => kem_keypair::<P, R>(rng))
    }

    /// Encapsulates to `pk`. With `msg` set the result is deterministic,
    /// otherwise a fresh 32-byte message is drawn from `rng`.
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        pk: &[u8],
        msg: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<(Vec<u8>, Zeroizing<[u8; KYBER_SS_BYTES]>)> {
        match msg {
            Some(m) => with_params!(self.level, P => kem_encaps_derand::<P>(pk, m)),
            None => with_params!(self.level, P => kem_encaps::<P, R>(pk, rng)),
        }
    }

    /// Recovers the shared secret. A tampered ciphertext of the right size
    /// yields the implicit-rejection secret rather than an error.
    pub fn decrypt(&self, ct: &[u8], sk: &[u8]) -> Result<Zeroizing<[u8; KYBER_SS_BYTES]>> {
        with_params!(self.level, P => kem_decaps::<P>(ct, sk))
    }
}

#[cfg(feature = "std")]
impl Kyber {
    /// [`Kyber::gen_keypair_with_rng`] using the operating system RNG.
    pub fn gen_keypair(&self) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
        self.gen_keypair_with_rng(&mut rand::rngs::OsRng)
    }

    /// [`Kyber::encrypt_with_rng`] using the operating system RNG.
    pub fn encrypt(
        &self,
        pk: &[u8],
        msg: Option<&[u8]>,
    ) -> Result<(Vec<u8>, Zeroizing<[u8; KYBER_SS_BYTES]>)> {
        self.encrypt_with_rng(pk, msg, &mut rand::rngs::OsRng)
    }
}

impl From<KyberLevel> for Kyber {
    fn from(level: KyberLevel) -> Self {
        Self::new(level)
    }
}
