//! SHA-3 hash functions (FIPS 202) backed by the RustCrypto `sha3` crate.

use ::sha3::Digest;

use crate::error::Result;
use crate::hash::HashFunction;

use lattikem_params::utils::hash::{
    SHA3_256_BLOCK_SIZE, SHA3_256_OUTPUT_SIZE, SHA3_512_BLOCK_SIZE, SHA3_512_OUTPUT_SIZE,
};

macro_rules! impl_sha3_variant {
    ($name:ident, $inner:ty, $out:expr, $rate:expr, $id:expr) => {
        #[doc = concat!($id, " hash function")]
        #[derive(Clone, Default)]
        pub struct $name {
            inner: $inner,
        }

        impl HashFunction for $name {
            type Output = [u8; $out];

            fn new() -> Self {
                Self {
                    inner: <$inner>::new(),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                Digest::update(&mut self.inner, data);
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let digest = Digest::finalize_reset(&mut self.inner);
                let mut out = [0u8; $out];
                out.copy_from_slice(&digest);
                Ok(out)
            }

            #[inline(always)]
            fn output_size() -> usize {
                $out
            }

            #[inline(always)]
            fn block_size() -> usize {
                $rate
            }

            #[inline(always)]
            fn name() -> &'static str {
                $id
            }
        }
    };
}

impl_sha3_variant!(
    Sha3_256,
    ::sha3::Sha3_256,
    SHA3_256_OUTPUT_SIZE,
    SHA3_256_BLOCK_SIZE,
    "SHA3-256"
);
impl_sha3_variant!(
    Sha3_512,
    ::sha3::Sha3_512,
    SHA3_512_OUTPUT_SIZE,
    SHA3_512_BLOCK_SIZE,
    "SHA3-512"
);
