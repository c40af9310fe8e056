//! MurmurHash3, in its x86_32 and x64_128 variants.

use crate::{
    bits::{read_partial_u32_le, read_partial_u64_le},
    IntoU128, IntoU64,
};

const C1_32: u32 = 0xcc9e_2d51;
const C2_32: u32 = 0x1b87_3593;

const C1_128: u64 = 0x87c3_7b91_1142_53d5;
const C2_128: u64 = 0x4cf5_ad43_2745_937f;

/// MurmurHash3_x86_32.
#[must_use]
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let (blocks, tail) = data.as_chunks::<4>();

    let mut hash = seed;
    for block in blocks {
        hash ^= mix_k1_32(u32::from_le_bytes(*block));
        hash = hash.rotate_left(13);
        hash = hash.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    if !tail.is_empty() {
        hash ^= mix_k1_32(read_partial_u32_le(tail));
    }

    // Only the low 32 bits of the length are mixed in.
    hash ^= data.len() as u32;
    fmix32(hash)
}

#[inline]
fn mix_k1_32(k1: u32) -> u32 {
    k1.wrapping_mul(C1_32).rotate_left(15).wrapping_mul(C2_32)
}

#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// MurmurHash3_x64_128.
///
/// The first 64-bit word of the canonical output is the low half of
/// the result, so `to_le_bytes` gives the canonical byte order.
#[must_use]
pub fn murmur3_128(data: &[u8], seed: u32) -> u128 {
    let (blocks, tail) = data.as_chunks::<16>();

    let mut h1 = seed.into_u64();
    let mut h2 = seed.into_u64();

    for block in blocks {
        let (k1, k2) = block.split_at(8);
        let k1 = read_partial_u64_le(k1);
        let k2 = read_partial_u64_le(k2);

        h1 ^= mix_k1_128(k1);
        h1 = h1.rotate_left(27).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        h2 ^= mix_k2_128(k2);
        h2 = h2.rotate_left(31).wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    let (k1, k2) = tail.split_at(usize::min(tail.len(), 8));
    if !k2.is_empty() {
        h2 ^= mix_k2_128(read_partial_u64_le(k2));
    }
    if !k1.is_empty() {
        h1 ^= mix_k1_128(read_partial_u64_le(k1));
    }

    let len = data.len().into_u64();
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h2.into_u128() << 64) | h1.into_u128()
}

#[inline]
fn mix_k1_128(k1: u64) -> u64 {
    k1.wrapping_mul(C1_128).rotate_left(31).wrapping_mul(C2_128)
}

#[inline]
fn mix_k2_128(k2: u64) -> u64 {
    k2.wrapping_mul(C2_128).rotate_left(33).wrapping_mul(C1_128)
}

#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}
