//! Little-endian loads used by the noise samplers

/// Load 4 bytes as a little-endian u32.
///
/// # Panics
/// Panics if `bytes` is shorter than 4 bytes; callers iterate with
/// `chunks_exact(4)`.
#[inline(always)]
pub fn load32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Load 3 bytes as a little-endian u32 with the top byte clear.
///
/// # Panics
/// Panics if `bytes` is shorter than 3 bytes; callers iterate with
/// `chunks_exact(3)`.
#[inline(always)]
pub fn load24_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}
