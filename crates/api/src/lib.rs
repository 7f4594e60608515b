//! Public API traits and types for the lattikem library
//!
//! This crate provides the public API surface shared by every lattikem crate:
//! the `Kem` trait, byte-serialization contracts, and the core error type that
//! all lower-level errors convert into.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
