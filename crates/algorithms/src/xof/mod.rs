//! Extendable Output Functions (XOF)
//!
//! Kyber needs SHAKE-128 as a streaming source for matrix generation (more
//! output may be requested after the first squeeze) and SHAKE-256 for noise
//! expansion and the final key derivation.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{validate, Result};

pub mod shake;

// Re-exports
pub use shake::{ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Absorbs more input. Fails once squeezing has started.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Switches the sponge from absorbing to squeezing. Idempotent.
    fn finalize(&mut self) -> Result<()>;

    /// Squeezes the next `output.len()` bytes of the stream, finalizing first
    /// if needed. Consecutive calls continue the same stream.
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out)?;
        Ok(out)
    }

    /// Resets the XOF to an empty absorbing state
    fn reset(&mut self) -> Result<()>;

    /// Returns the security level in bits
    fn security_level() -> usize;

    /// Convenience method to generate output in a single call
    fn generate(data: &[u8], len: usize) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        validate::parameter(
            len > 0,
            "output_length",
            "XOF output length must be greater than 0",
        )?;

        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze_into_vec(len)
    }
}
