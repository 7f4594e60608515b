//! Fixed-width wrapping arithmetic.
//!
//! Kyber's reference arithmetic relies on two's-complement wraparound at
//! 16 and 32 bits before any explicit reduction. All of that behavior lives
//! here so the reduction kernel, the NTT butterflies, the packers and the
//! samplers share one definition of "what happens on overflow".

/// Wrapping add/sub/mul/shift with the semantics of the implementing type's
/// bit width. Shifts take the shift amount modulo the width; right shifts on
/// signed types are arithmetic.
pub trait WrappingOps: Copy {
    /// `self + rhs` modulo 2^width.
    fn wadd(self, rhs: Self) -> Self;
    /// `self - rhs` modulo 2^width.
    fn wsub(self, rhs: Self) -> Self;
    /// `self * rhs` modulo 2^width.
    fn wmul(self, rhs: Self) -> Self;
    /// `self << bits` modulo 2^width.
    fn wshl(self, bits: u32) -> Self;
    /// `self >> bits`, arithmetic for signed types.
    fn wshr(self, bits: u32) -> Self;
}

macro_rules! impl_wrapping_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl WrappingOps for $t {
                #[inline(always)]
                fn wadd(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
                #[inline(always)]
                fn wsub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
                #[inline(always)]
                fn wmul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
                #[inline(always)]
                fn wshl(self, bits: u32) -> Self {
                    self.wrapping_shl(bits)
                }
                #[inline(always)]
                fn wshr(self, bits: u32) -> Self {
                    self.wrapping_shr(bits)
                }
            }
        )*
    };
}

impl_wrapping_ops!(i16, u16, i32, u32, i64, u64);

/// Keep the low 16 bits of a 32-bit value, reinterpreted as signed.
#[inline(always)]
pub const fn low_i16(a: i32) -> i16 {
    a as i16
}

/// Keep the low 16 bits of a 32-bit value.
#[inline(always)]
pub const fn low_u16(a: u32) -> u16 {
    a as u16
}

/// Keep the low 8 bits of a 32-bit value.
#[inline(always)]
pub const fn low_u8(a: u32) -> u8 {
    a as u8
}

/// Reinterpret a signed 16-bit value as its unsigned bit pattern.
#[inline(always)]
pub const fn as_u16(a: i16) -> u16 {
    a as u16
}

/// Sign-extend a 16-bit value into 32 bits.
#[inline(always)]
pub const fn widen_i16(a: i16) -> i32 {
    a as i32
}

/// Full 16x16 -> 32-bit signed product. Cannot overflow.
#[inline(always)]
pub const fn widening_mul_i16(a: i16, b: i16) -> i32 {
    (a as i32) * (b as i32)
}

/// All ones if `a` is negative, zero otherwise.
#[inline(always)]
pub const fn sign_mask_i16(a: i16) -> i16 {
    a >> 15
}
