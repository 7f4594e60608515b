//! SHAKE extendable output functions (FIPS 202)
//!
//! Thin streaming wrappers over the RustCrypto sponge: absorb with
//! `update`, then read as many bytes as needed with repeated `squeeze` calls.

use ::sha3::digest::{ExtendableOutput, Update, XofReader};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};

/// Sponge phase. Absorbing holds the hasher, squeezing holds the reader.
enum Sponge<H, R> {
    Absorbing(H),
    Squeezing(R),
}

macro_rules! impl_shake_xof {
    ($name:ident, $hasher:ty, $reader:ty, $level:expr, $id:expr) => {
        #[doc = concat!($id, " extendable output function")]
        pub struct $name {
            sponge: Sponge<$hasher, $reader>,
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    sponge: Sponge::Absorbing(<$hasher>::default()),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                match &mut self.sponge {
                    Sponge::Absorbing(hasher) => {
                        hasher.update(data);
                        Ok(())
                    }
                    Sponge::Squeezing(_) => Err(Error::Processing {
                        operation: $id,
                        details: "cannot absorb after squeezing has started",
                    }),
                }
            }

            fn finalize(&mut self) -> Result<()> {
                if let Sponge::Absorbing(hasher) = &mut self.sponge {
                    let reader = core::mem::take(hasher).finalize_xof();
                    self.sponge = Sponge::Squeezing(reader);
                }
                Ok(())
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                self.finalize()?;
                match &mut self.sponge {
                    Sponge::Squeezing(reader) => {
                        reader.read(output);
                        Ok(())
                    }
                    Sponge::Absorbing(_) => Err(Error::Processing {
                        operation: $id,
                        details: "sponge was not finalized",
                    }),
                }
            }

            fn reset(&mut self) -> Result<()> {
                self.sponge = Sponge::Absorbing(<$hasher>::default());
                Ok(())
            }

            fn security_level() -> usize {
                $level
            }
        }
    };
}

impl_shake_xof!(
    ShakeXof128,
    ::sha3::Shake128,
    ::sha3::Shake128Reader,
    128,
    "SHAKE-128"
);
impl_shake_xof!(
    ShakeXof256,
    ::sha3::Shake256,
    ::sha3::Shake256Reader,
    256,
    "SHAKE-256"
);
