//! Internal utilities shared by the lattikem crates.
//!
//! Nothing in here is cryptographic on its own. The crate collects the small
//! fixed-width arithmetic, byte-order and constant-time helpers that every
//! higher layer must agree on bit for bit.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
pub mod wrapping;

pub use constant_time::{ct_assign, ct_eq, ct_eq_choice};
pub use endian::{load24_le, load32_le};
pub use wrapping::WrappingOps;
