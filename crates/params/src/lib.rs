//! Constant values for the lattikem library
//!
//! Parameter tables are plain `const` data so every crate sees the same
//! numbers at compile time.

#![no_std]

pub mod pqc;
pub mod utils;
