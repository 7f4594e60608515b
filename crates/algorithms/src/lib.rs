//! Ring arithmetic and symmetric primitives for lattikem
//!
//! This crate provides the layers of the Kyber construction that do not
//! depend on a parameter set:
//!
//! - [`hash`]: SHA3-256 / SHA3-512 behind the [`HashFunction`] trait
//! - [`xof`]: SHAKE-128 / SHAKE-256 behind the [`ExtendableOutputFunction`] trait
//! - [`poly`]: Montgomery and Barrett reduction, the NTT, polynomial algebra,
//!   packing/compression and the noise and rejection samplers
//!
//! All coefficient arithmetic follows the 16/32-bit wraparound of the Kyber
//! reference code, so outputs are bit-exact with other implementations.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha3_256, Sha3_512};

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};

// Polynomial ring engine
pub mod poly;
pub use poly::polynomial::Polynomial;
