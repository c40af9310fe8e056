//! The implementation of XXH64.

use crate::{
    bits::read_u64_le,
    engine::{Buffered, Streaming},
    stripe_accumulator::{Lane, StripeAccumulator},
    IntoU64,
};

// Keeping these constants in this form to match the C code.
const PRIME64_1: u64 = 0x9E3779B185EBCA87;
const PRIME64_2: u64 = 0xC2B2AE3D27D4EB4F;
const PRIME64_3: u64 = 0x165667B19E3779F9;
const PRIME64_4: u64 = 0x85EBCA77C2B2AE63;
const PRIME64_5: u64 = 0x27D4EB2F165667C5;

/// The stripe-level state of XXH64.
pub type StripeAccumulator64 = StripeAccumulator<u64>;

/// A sealed streaming XXH64 computation.
///
/// Every fragment but the last must be a multiple of 32 bytes.
pub type State = Streaming<StripeAccumulator64>;

/// Calculates the 64-bit hash through [`core::hash::Hasher`][].
///
/// ```
/// use std::{collections::HashMap, hash::BuildHasherDefault};
/// use hash_depot::XxHash64;
///
/// let mut hash: HashMap<_, _, BuildHasherDefault<XxHash64>> = Default::default();
/// hash.insert(42, "the answer");
/// assert_eq!(hash.get(&42), Some(&"the answer"));
/// ```
pub type XxHash64 = Buffered<StripeAccumulator64>;

impl Lane for u64 {
    const BYTES: usize = 8;

    fn initial_accumulators(seed: u64) -> [u64; 4] {
        [
            seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
            seed.wrapping_add(PRIME64_2),
            seed,
            seed.wrapping_sub(PRIME64_1),
        ]
    }

    #[inline]
    fn read(bytes: &[u8]) -> u64 {
        read_u64_le(bytes)
    }

    #[inline]
    fn round(acc: u64, lane: u64) -> u64 {
        round(acc, lane)
    }

    fn converge(accumulators: [u64; 4]) -> u64 {
        let [acc1, acc2, acc3, acc4] = accumulators;

        let mut acc = {
            let acc1 = acc1.rotate_left(1);
            let acc2 = acc2.rotate_left(7);
            let acc3 = acc3.rotate_left(12);
            let acc4 = acc4.rotate_left(18);

            acc1.wrapping_add(acc2)
                .wrapping_add(acc3)
                .wrapping_add(acc4)
        };

        acc = merge_accumulator(acc, acc1);
        acc = merge_accumulator(acc, acc2);
        acc = merge_accumulator(acc, acc3);
        acc = merge_accumulator(acc, acc4);

        acc
    }

    fn small_input(seed: u64) -> u64 {
        seed.wrapping_add(PRIME64_5)
    }

    fn add_length(acc: u64, len: u64) -> u64 {
        acc.wrapping_add(len)
    }

    fn consume_tail(mut acc: u64, mut tail: &[u8]) -> u64 {
        while let Some((chunk, rest)) = tail.split_first_chunk::<8>() {
            let lane = u64::from_le_bytes(*chunk);

            acc ^= round(0, lane);
            acc = acc.rotate_left(27).wrapping_mul(PRIME64_1);
            acc = acc.wrapping_add(PRIME64_4);
            tail = rest;
        }

        while let Some((chunk, rest)) = tail.split_first_chunk::<4>() {
            let lane = u32::from_le_bytes(*chunk).into_u64();

            acc ^= lane.wrapping_mul(PRIME64_1);
            acc = acc.rotate_left(23).wrapping_mul(PRIME64_2);
            acc = acc.wrapping_add(PRIME64_3);

            tail = rest;
        }

        for &byte in tail {
            let lane = byte.into_u64();

            acc ^= lane.wrapping_mul(PRIME64_5);
            acc = acc.rotate_left(11).wrapping_mul(PRIME64_1);
        }

        acc
    }

    fn avalanche(mut acc: u64) -> u64 {
        acc ^= acc >> 33;
        acc = acc.wrapping_mul(PRIME64_2);
        acc ^= acc >> 29;
        acc = acc.wrapping_mul(PRIME64_3);
        acc ^= acc >> 32;
        acc
    }
}

const fn round(mut acc: u64, lane: u64) -> u64 {
    acc = acc.wrapping_add(lane.wrapping_mul(PRIME64_2));
    acc = acc.rotate_left(31);
    acc.wrapping_mul(PRIME64_1)
}

const fn merge_accumulator(mut acc: u64, acc_n: u64) -> u64 {
    acc ^= round(0, acc_n);
    acc = acc.wrapping_mul(PRIME64_1);
    acc.wrapping_add(PRIME64_4)
}
