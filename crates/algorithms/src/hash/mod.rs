//! Fixed-output hash functions
//!
//! Kyber uses SHA3-256 as `H` and SHA3-512 as `G`. Both are exposed through
//! the [`HashFunction`] trait so the KEM layer never names the backing crate.

pub mod sha3;

pub use self::sha3::{Sha3_256, Sha3_512};

use crate::error::Result;

/// Trait for cryptographic hash functions
pub trait HashFunction: Sized {
    /// Fixed-size digest type
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hash computation, returns the digest and resets the state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize;

    /// Returns the block size (rate) of the hash function in bytes
    fn block_size() -> usize;

    /// Returns the name of the hash function
    fn name() -> &'static str;

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
