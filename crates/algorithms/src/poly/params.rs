//! params.rs - Ring constants for Z_q[X]/(X^256 + 1)

use lattikem_params::pqc::kyber::{KYBER_N, KYBER_Q};

/// Polynomial degree
pub const N: usize = KYBER_N;

/// Coefficient modulus q as a signed 16-bit value
pub const Q: i16 = KYBER_Q as i16;

/// q^-1 mod 2^16, as a signed value
pub const QINV: i16 = -3327;

/// 2^16 mod q, the Montgomery factor R
pub const MONT: i16 = 2285;

/// 2^32 mod q. Multiplying by this and reducing maps a into a·R.
pub const MONT_SQUARED: i16 = 1353;

/// floor(2^26 / q) + 1, the Barrett multiplier
pub const BARRETT_V: i32 = 20159;

/// ceil(2^32 / q). `(n · COMPRESS_MUL) >> 32 == n / q` for every n below 2^23
pub const COMPRESS_MUL: u64 = 1290168;

/// (q + 1) / 2, the encoding of a set message bit
pub const HALF_Q: i16 = (Q + 1) / 2;

/// Bytes of a polynomial packed at 12 bits per coefficient
pub const POLY_BYTES: usize = 3 * N / 2;

/// Bytes of a message encoded one bit per coefficient
pub const MSG_BYTES: usize = N / 8;

/// Compression widths supported by the packing routines
pub const SUPPORTED_COMPRESSION_BITS: [u32; 4] = [4, 5, 10, 11];

const _: () = {
    assert!(POLY_BYTES == lattikem_params::pqc::kyber::KYBER_POLY_BYTES);
    assert!(MSG_BYTES == lattikem_params::pqc::kyber::KYBER_SYM_BYTES);
    assert!((Q as i32).wrapping_mul(QINV as i32) & 0xFFFF == 1);
};
