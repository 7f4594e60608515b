//! Kyber Key Encapsulation Mechanism (KEM).
//!
//! The module is layered bottom-up: polynomial vectors and the public matrix,
//! the CPA-secure encryption scheme (IDCPA), and the Fujisaki-Okamoto
//! transform that turns it into an IND-CCA2 KEM with implicit rejection.

mod params;
mod polyvec;
mod matrix;
mod cpa_pke;
mod ind_cca;
mod kem;
mod level;

// Concrete Kyber variants
mod kyber512;
mod kyber768;
mod kyber1024;

pub use self::kyber512::Kyber512;
pub use self::kyber768::Kyber768;
pub use self::kyber1024::Kyber1024;

pub use self::kem::{KyberCiphertext, KyberKem, KyberPublicKey, KyberSecretKey, KyberSharedSecret};
pub use self::level::{Kyber, KyberLevel};
pub use self::params::{
    Kyber1024Params, Kyber512Params, Kyber768Params, KyberParams, KYBER_SS_BYTES, KYBER_SYM_BYTES,
};

/// The building blocks below the KEM, exposed for testing and for callers
/// that need the IND-CPA scheme on its own.
pub mod primitives {
    pub use super::cpa_pke::{idcpa_dec, idcpa_enc, idcpa_gen_keypair, idcpa_gen_keypair_from_seed};
    pub use super::matrix::gen_matrix;
    pub use super::polyvec::PolyVec;
    pub use lattikem_algorithms::poly::sampling::rej_uniform as idcpa_rej_uniform;
}
