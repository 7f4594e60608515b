//! reduce.rs - Montgomery and Barrett reduction modulo q
//!
//! Every routine here works on the signed 16/32-bit representation used by
//! the NTT and reproduces its wraparound exactly.

use lattikem_internal::wrapping::{low_i16, sign_mask_i16, widen_i16, widening_mul_i16};
use lattikem_internal::WrappingOps;

use super::params::{BARRETT_V, Q, QINV};

/// Montgomery reduction.
///
/// For `a` in {-q·2^15, ..., q·2^15 - 1} returns a 16-bit value congruent to
/// `a · 2^-16 mod q`, in {-q + 1, ..., q - 1}.
#[inline(always)]
pub fn montgomery_reduce(a: i32) -> i16 {
    let u = low_i16(a).wmul(QINV);
    let t = a.wsub(widening_mul_i16(u, Q));
    low_i16(t.wshr(16))
}

/// Barrett reduction.
///
/// Returns a value congruent to `a mod q` in {0, ..., q}.
#[inline(always)]
pub fn barrett_reduce(a: i16) -> i16 {
    let t = low_i16(BARRETT_V.wmul(widen_i16(a)).wshr(26));
    a.wsub(t.wmul(Q))
}

/// Multiplication followed by Montgomery reduction: `a · b · 2^-16 mod q`.
#[inline(always)]
pub fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce(widening_mul_i16(a, b))
}

/// Conditionally subtract q. Maps {0, ..., 2q - 1} onto {0, ..., q - 1}.
#[inline(always)]
pub fn csubq(a: i16) -> i16 {
    let a = a.wsub(Q);
    a.wadd(sign_mask_i16(a) & Q)
}
