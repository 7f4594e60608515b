//! Kyber key encapsulation for the lattikem library
//!
//! Three ways in, all producing the same bytes:
//!
//! - the [`lattikem_api::Kem`] implementations [`Kyber512`], [`Kyber768`]
//!   and [`Kyber1024`], typed over their parameter sets;
//! - [`Kyber`], which picks the level at run time from a [`KyberLevel`]
//!   and works on raw byte buffers;
//! - [`kyber::primitives`], the IND-CPA scheme and matrix generator the KEM
//!   is built from.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod kyber;

// Re-exports
pub use error::{Error, Result};
pub use kyber::{
    Kyber, Kyber1024, Kyber512, Kyber768, KyberCiphertext, KyberKem, KyberLevel, KyberPublicKey,
    KyberSecretKey, KyberSharedSecret,
};
