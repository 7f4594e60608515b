//! # lattikem
//!
//! A pure Rust implementation of the Kyber lattice key encapsulation
//! mechanism.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! lattikem = "0.3"
//! ```
//!
//! ```no_run
//! use lattikem::prelude::*;
//!
//! # fn main() -> lattikem::api::Result<()> {
//! let mut rng = rand::rngs::OsRng;
//! let (pk, sk) = Kyber768::keypair(&mut rng)?;
//! let (ct, ss_sender) = Kyber768::encapsulate(&mut rng, &pk)?;
//! let ss_receiver = Kyber768::decapsulate(&sk, &ct)?;
//! assert_eq!(ss_sender, ss_receiver);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `kem` (default): the Kyber KEM
//! - `algorithms`: the ring arithmetic and hash adapters on their own
//! - `serde`: `Serialize`/`Deserialize` for [`kem::KyberLevel`]
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`lattikem-api`]: public traits and the core error type
//! - [`lattikem-internal`]: fixed-width arithmetic and constant-time helpers
//! - [`lattikem-params`]: the Kyber parameter tables
//! - [`lattikem-algorithms`]: reduction, NTT, polynomials, sampling, SHA-3
//! - [`lattikem-kem`]: IND-CPA encryption and the CCA-secure KEM

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use lattikem_api as api;
pub use lattikem_internal as internal;
pub use lattikem_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use lattikem_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use lattikem_kem as kem;

/// Common imports for lattikem users
pub mod prelude {
    pub use crate::api::{Error, Result};
    pub use crate::api::{Kem, Serialize, SerializeSecret};

    #[cfg(feature = "kem")]
    pub use crate::kem::{
        Kyber, Kyber1024, Kyber512, Kyber768, KyberCiphertext, KyberLevel, KyberPublicKey,
        KyberSecretKey, KyberSharedSecret,
    };
}
