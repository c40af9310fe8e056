//! The implementation of XXH32.

use crate::{
    bits::read_u32_le,
    engine::{Buffered, Streaming},
    stripe_accumulator::{Lane, StripeAccumulator},
    IntoU32,
};

// Keeping these constants in this form to match the C code.
const PRIME32_1: u32 = 0x9E3779B1;
const PRIME32_2: u32 = 0x85EBCA77;
const PRIME32_3: u32 = 0xC2B2AE3D;
const PRIME32_4: u32 = 0x27D4EB2F;
const PRIME32_5: u32 = 0x165667B1;

/// The stripe-level state of XXH32.
pub type StripeAccumulator32 = StripeAccumulator<u32>;

/// A sealed streaming XXH32 computation.
///
/// ```
/// use hash_depot::xxhash32::State;
///
/// let mut state = State::with_seed(0);
/// state.update(b"Hello, ").unwrap();
/// // The fragment above was not a whole stripe, so it was the last one.
/// assert!(state.update(b"world!").is_err());
/// assert_eq!(state.result(), hash_depot::hash32(b"Hello, ", 0));
/// ```
pub type State = Streaming<StripeAccumulator32>;

/// Calculates the 32-bit hash through [`core::hash::Hasher`][].
///
/// ```
/// use core::hash::Hasher as _;
/// use hash_depot::XxHash32;
///
/// let mut hasher = XxHash32::with_seed(0);
/// hasher.write(b"Hello, ");
/// hasher.write(b"world!\0");
/// assert_eq!(hasher.finish(), 0x9e5e_7e93);
/// ```
pub type XxHash32 = Buffered<StripeAccumulator32>;

impl Lane for u32 {
    const BYTES: usize = 4;

    fn initial_accumulators(seed: u32) -> [u32; 4] {
        [
            seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
            seed.wrapping_add(PRIME32_2),
            seed,
            seed.wrapping_sub(PRIME32_1),
        ]
    }

    #[inline]
    fn read(bytes: &[u8]) -> u32 {
        read_u32_le(bytes)
    }

    #[inline]
    fn round(acc: u32, lane: u32) -> u32 {
        round(acc, lane)
    }

    fn converge(accumulators: [u32; 4]) -> u32 {
        let [acc1, acc2, acc3, acc4] = accumulators;

        let acc1 = acc1.rotate_left(1);
        let acc2 = acc2.rotate_left(7);
        let acc3 = acc3.rotate_left(12);
        let acc4 = acc4.rotate_left(18);

        acc1.wrapping_add(acc2)
            .wrapping_add(acc3)
            .wrapping_add(acc4)
    }

    fn small_input(seed: u32) -> u32 {
        seed.wrapping_add(PRIME32_5)
    }

    fn add_length(acc: u32, len: u64) -> u32 {
        // "Note that, if input length is so large that it requires
        // more than 32-bits, only the lower 32-bits are added to the
        // accumulator."
        acc.wrapping_add(len as u32)
    }

    fn consume_tail(mut acc: u32, mut tail: &[u8]) -> u32 {
        while let Some((chunk, rest)) = tail.split_first_chunk::<4>() {
            let lane = u32::from_le_bytes(*chunk);

            acc = acc.wrapping_add(lane.wrapping_mul(PRIME32_3));
            acc = acc.rotate_left(17).wrapping_mul(PRIME32_4);

            tail = rest;
        }

        for &byte in tail {
            let lane = byte.into_u32();

            acc = acc.wrapping_add(lane.wrapping_mul(PRIME32_5));
            acc = acc.rotate_left(11).wrapping_mul(PRIME32_1);
        }

        acc
    }

    fn avalanche(mut acc: u32) -> u32 {
        acc ^= acc >> 15;
        acc = acc.wrapping_mul(PRIME32_2);
        acc ^= acc >> 13;
        acc = acc.wrapping_mul(PRIME32_3);
        acc ^= acc >> 16;
        acc
    }
}

const fn round(mut acc: u32, lane: u32) -> u32 {
    acc = acc.wrapping_add(lane.wrapping_mul(PRIME32_2));
    acc = acc.rotate_left(13);
    acc.wrapping_mul(PRIME32_1)
}

impl XxHash32 {
    /// The hash of everything written so far.
    #[must_use]
    #[inline]
    pub fn finish_32(&self) -> u32 {
        self.digest()
    }
}
