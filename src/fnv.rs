//! The Fowler–Noll–Vo hashes, FNV-1 and FNV-1a, at 32 and 64 bits.
//!
//! FNV works a byte at a time, so the streaming form needs no
//! buffering and [`Fnv1a32`][] / [`Fnv1a64`][] accept any sequence
//! of writes.

use core::hash::Hasher;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::{IntoU32, IntoU64};

const OFFSET_BASIS_32: u32 = 0x811c_9dc5;
const PRIME_32: u32 = 0x0100_0193;

const OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME_64: u64 = 0x0000_0100_0000_01b3;

/// FNV-1 with 32-bit output: multiply, then XOR.
#[must_use]
pub fn fnv1_32(data: &[u8]) -> u32 {
    data.iter().fold(OFFSET_BASIS_32, |hash, &byte| {
        hash.wrapping_mul(PRIME_32) ^ byte.into_u32()
    })
}

/// FNV-1a with 32-bit output: XOR, then multiply.
#[must_use]
pub fn fnv1a_32(data: &[u8]) -> u32 {
    fnv1a_32_continue(OFFSET_BASIS_32, data)
}

/// FNV-1 with 64-bit output.
#[must_use]
pub fn fnv1_64(data: &[u8]) -> u64 {
    data.iter().fold(OFFSET_BASIS_64, |hash, &byte| {
        hash.wrapping_mul(PRIME_64) ^ byte.into_u64()
    })
}

/// FNV-1a with 64-bit output.
#[must_use]
pub fn fnv1a_64(data: &[u8]) -> u64 {
    fnv1a_64_continue(OFFSET_BASIS_64, data)
}

#[inline]
fn fnv1a_32_continue(hash: u32, data: &[u8]) -> u32 {
    data.iter().fold(hash, |hash, &byte| {
        (hash ^ byte.into_u32()).wrapping_mul(PRIME_32)
    })
}

#[inline]
fn fnv1a_64_continue(hash: u64, data: &[u8]) -> u64 {
    data.iter().fold(hash, |hash, &byte| {
        (hash ^ byte.into_u64()).wrapping_mul(PRIME_64)
    })
}

/// Calculates FNV-1a/32 through [`core::hash::Hasher`][].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
pub struct Fnv1a32 {
    hash: u32,
}

impl Fnv1a32 {
    /// Starts from the offset basis.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hash: OFFSET_BASIS_32,
        }
    }

    /// The hash of everything written so far.
    #[must_use]
    pub const fn finish_32(&self) -> u32 {
        self.hash
    }
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a32 {
    fn write(&mut self, data: &[u8]) {
        self.hash = fnv1a_32_continue(self.hash, data);
    }

    fn finish(&self) -> u64 {
        self.hash.into()
    }
}

/// Calculates FNV-1a/64 through [`core::hash::Hasher`][].
///
/// ```
/// use std::{collections::HashSet, hash::BuildHasherDefault};
/// use hash_depot::fnv::Fnv1a64;
///
/// let mut set: HashSet<_, BuildHasherDefault<Fnv1a64>> = Default::default();
/// set.insert("the answer");
/// assert!(set.contains("the answer"));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
pub struct Fnv1a64 {
    hash: u64,
}

impl Fnv1a64 {
    /// Starts from the offset basis.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hash: OFFSET_BASIS_64,
        }
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a64 {
    fn write(&mut self, data: &[u8]) {
        self.hash = fnv1a_64_continue(self.hash, data);
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // From the test suite published alongside the reference code.
    const INPUTS: [&[u8]; 3] = [b"", b"a", b"foobar"];

    #[test]
    fn fnv1_32_matches_reference() {
        let expected = [0x811c_9dc5, 0x050c_5d7e, 0x31f0_b262];
        for (input, expected) in INPUTS.into_iter().zip(expected) {
            assert_eq!(fnv1_32(input), expected, "{input:?}");
        }
    }

    #[test]
    fn fnv1a_32_matches_reference() {
        let expected = [0x811c_9dc5, 0xe40c_292c, 0xbf9c_f968];
        for (input, expected) in INPUTS.into_iter().zip(expected) {
            assert_eq!(fnv1a_32(input), expected, "{input:?}");
        }
    }

    #[test]
    fn fnv1_64_matches_reference() {
        let expected = [
            0xcbf2_9ce4_8422_2325,
            0xaf63_bd4c_8601_b7be,
            0x340d_8765_a4dd_a9c2,
        ];
        for (input, expected) in INPUTS.into_iter().zip(expected) {
            assert_eq!(fnv1_64(input), expected, "{input:?}");
        }
    }

    #[test]
    fn fnv1a_64_matches_reference() {
        let expected = [
            0xcbf2_9ce4_8422_2325,
            0xaf63_dc4c_8601_ec8c,
            0x8594_4171_f739_67e8,
        ];
        for (input, expected) in INPUTS.into_iter().zip(expected) {
            assert_eq!(fnv1a_64(input), expected, "{input:?}");
        }
    }

    #[test]
    fn hashers_agree_with_oneshot_for_split_writes() {
        let mut h32 = Fnv1a32::new();
        let mut h64 = Fnv1a64::default();
        for part in [&b"foo"[..], b"", b"b", b"ar"] {
            h32.write(part);
            h64.write(part);
        }

        assert_eq!(h32.finish_32(), fnv1a_32(b"foobar"));
        assert_eq!(h32.finish(), u64::from(fnv1a_32(b"foobar")));
        assert_eq!(h64.finish(), fnv1a_64(b"foobar"));
    }
}
