//! Lane reads shared by every algorithm.
//!
//! All multi-byte lanes are little-endian regardless of the target.
//! Rotations are the inherent `rotate_left` / `rotate_right` methods
//! of the integer types.

/// Reads the first four bytes as a little-endian `u32`.
///
/// Panics if fewer than four bytes are available; every caller has
/// already checked the length.
#[inline]
pub(crate) fn read_u32_le(bytes: &[u8]) -> u32 {
    let mut lane = [0; 4];
    lane.copy_from_slice(&bytes[..4]);
    u32::from_le_bytes(lane)
}

/// Reads the first eight bytes as a little-endian `u64`.
///
/// Panics if fewer than eight bytes are available; every caller has
/// already checked the length.
#[inline]
pub(crate) fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut lane = [0; 8];
    lane.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(lane)
}

/// Packs up to four trailing bytes into the low end of a `u32`.
#[inline]
pub(crate) fn read_partial_u32_le(bytes: &[u8]) -> u32 {
    debug_assert!(bytes.len() <= 4);
    let mut lane = [0; 4];
    lane[..bytes.len()].copy_from_slice(bytes);
    u32::from_le_bytes(lane)
}

/// Packs up to eight trailing bytes into the low end of a `u64`.
#[inline]
pub(crate) fn read_partial_u64_le(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    let mut lane = [0; 8];
    lane[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(lane)
}

pub(crate) trait Halves {
    type Output;

    fn upper_half(self) -> Self::Output;
    fn lower_half(self) -> Self::Output;
}

impl Halves for u64 {
    type Output = u32;

    #[inline]
    fn upper_half(self) -> Self::Output {
        (self >> 32) as _
    }

    #[inline]
    fn lower_half(self) -> Self::Output {
        self as _
    }
}

impl Halves for u128 {
    type Output = u64;

    #[inline]
    fn upper_half(self) -> Self::Output {
        (self >> 64) as _
    }

    #[inline]
    fn lower_half(self) -> Self::Output {
        self as _
    }
}
