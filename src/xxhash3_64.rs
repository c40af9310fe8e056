//! The implementation of XXH3_64.
//!
//! Only the one-shot form exists. Inputs are routed by length to one
//! of several mixing strategies; anything longer than 240 bytes goes
//! through the block-and-stripe accumulator.

use crate::{
    bits::{read_u32_le, Halves},
    IntoU128, IntoU32, IntoU64,
};

mod secret;

use secret::Secret;

pub use secret::{Error as SecretLengthError, SECRET_MAXIMUM_LENGTH, SECRET_MINIMUM_LENGTH};

const PRIME32_1: u64 = 0x9E3779B1;
const PRIME32_2: u64 = 0x85EBCA77;
const PRIME32_3: u64 = 0xC2B2AE3D;
const PRIME64_1: u64 = 0x9E3779B185EBCA87;
const PRIME64_2: u64 = 0xC2B2AE3D27D4EB4F;
const PRIME64_3: u64 = 0x165667B19E3779F9;
const PRIME64_4: u64 = 0x85EBCA77C2B2AE63;
const PRIME64_5: u64 = 0x27D4EB2F165667C5;
const PRIME_MX1: u64 = 0x165667919E3779F9;
const PRIME_MX2: u64 = 0x9FB21C651E98DF25;

const CUTOFF: usize = 240;

const DEFAULT_SEED: u64 = 0;

const STRIPE_BYTES: usize = 64;

/// The length of the default secret.
pub const DEFAULT_SECRET_LENGTH: usize = 192;

type DefaultSecret = [u8; DEFAULT_SECRET_LENGTH];

const DEFAULT_SECRET_RAW: DefaultSecret = [
    0xb8, 0xfe, 0x6c, 0x39, 0x23, 0xa4, 0x4b, 0xbe, 0x7c, 0x01, 0x81, 0x2c, 0xf7, 0x21, 0xad, 0x1c,
    0xde, 0xd4, 0x6d, 0xe9, 0x83, 0x90, 0x97, 0xdb, 0x72, 0x40, 0xa4, 0xa4, 0xb7, 0xb3, 0x67, 0x1f,
    0xcb, 0x79, 0xe6, 0x4e, 0xcc, 0xc0, 0xe5, 0x78, 0x82, 0x5a, 0xd0, 0x7d, 0xcc, 0xff, 0x72, 0x21,
    0xb8, 0x08, 0x46, 0x74, 0xf7, 0x43, 0x24, 0x8e, 0xe0, 0x35, 0x90, 0xe6, 0x81, 0x3a, 0x26, 0x4c,
    0x3c, 0x28, 0x52, 0xbb, 0x91, 0xc3, 0x00, 0xcb, 0x88, 0xd0, 0x65, 0x8b, 0x1b, 0x53, 0x2e, 0xa3,
    0x71, 0x64, 0x48, 0x97, 0xa2, 0x0d, 0xf9, 0x4e, 0x38, 0x19, 0xef, 0x46, 0xa9, 0xde, 0xac, 0xd8,
    0xa8, 0xfa, 0x76, 0x3f, 0xe3, 0x9c, 0x34, 0x3f, 0xf9, 0xdc, 0xbb, 0xc7, 0xc7, 0x0b, 0x4f, 0x1d,
    0x8a, 0x51, 0xe0, 0x4b, 0xcd, 0xb4, 0x59, 0x31, 0xc8, 0x9f, 0x7e, 0xc9, 0xd9, 0x78, 0x73, 0x64,
    0xea, 0xc5, 0xac, 0x83, 0x34, 0xd3, 0xeb, 0xc3, 0xc5, 0x81, 0xa0, 0xff, 0xfa, 0x13, 0x63, 0xeb,
    0x17, 0x0d, 0xdd, 0x51, 0xb7, 0xf0, 0xda, 0x49, 0xd3, 0x16, 0x55, 0x26, 0x29, 0xd4, 0x68, 0x9e,
    0x2b, 0x16, 0xbe, 0x58, 0x7d, 0x47, 0xa1, 0xfc, 0x8f, 0xf8, 0xb8, 0xd1, 0x7a, 0xd0, 0x31, 0xce,
    0x45, 0xcb, 0x3a, 0x8f, 0x95, 0x16, 0x04, 0x28, 0xaf, 0xd7, 0xfb, 0xca, 0xbb, 0x4b, 0x40, 0x7e,
];

const DEFAULT_SECRET: Secret<'static> = Secret::from_default_length(&DEFAULT_SECRET_RAW);

/// Hash all data at once with the default seed and secret.
#[must_use]
#[inline]
pub fn oneshot(input: &[u8]) -> u64 {
    impl_oneshot(DEFAULT_SECRET, DEFAULT_SEED, input)
}

/// Hash all data at once using the provided seed and a secret
/// derived from the seed.
#[must_use]
#[inline]
pub fn oneshot_with_seed(seed: u64, input: &[u8]) -> u64 {
    // We know that the secret will only be used if we have more
    // than 240 bytes, so don't waste time computing it otherwise.
    if input.len() > CUTOFF && seed != DEFAULT_SEED {
        let secret = derive_secret(seed);
        impl_oneshot(Secret::from_default_length(&secret), seed, input)
    } else {
        impl_oneshot(DEFAULT_SECRET, seed, input)
    }
}

/// Hash all data at once using the provided secret and the default
/// seed.
#[inline]
pub fn oneshot_with_secret(secret: &[u8], input: &[u8]) -> Result<u64, SecretLengthError> {
    let secret = Secret::new(secret)?;
    Ok(impl_oneshot(secret, DEFAULT_SEED, input))
}

/// Hash all data at once using the provided seed and secret.
///
/// The seed only affects inputs of up to 240 bytes; longer inputs are
/// keyed by the secret alone.
#[inline]
pub fn oneshot_with_seed_and_secret(
    seed: u64,
    secret: &[u8],
    input: &[u8],
) -> Result<u64, SecretLengthError> {
    let secret = Secret::new(secret)?;
    Ok(impl_oneshot(secret, seed, input))
}

/// Builds the secret that [`oneshot_with_seed`][] uses for inputs
/// longer than 240 bytes.
///
/// Each 16-byte window of the default secret has the seed added to
/// its low word and subtracted from its high word.
#[must_use]
pub fn derive_secret(seed: u64) -> [u8; DEFAULT_SECRET_LENGTH] {
    let mut secret = DEFAULT_SECRET_RAW;

    if seed == DEFAULT_SEED {
        return secret;
    }

    let (words, _) = secret.as_chunks_mut::<8>();
    let (pairs, _) = words.as_chunks_mut::<2>();

    for [a_p, b_p] in pairs {
        let a = u64::from_le_bytes(*a_p).wrapping_add(seed);
        let b = u64::from_le_bytes(*b_p).wrapping_sub(seed);

        *a_p = a.to_le_bytes();
        *b_p = b.to_le_bytes();
    }

    secret
}

#[inline(always)]
fn impl_oneshot(secret: Secret<'_>, seed: u64, input: &[u8]) -> u64 {
    match input.len() {
        241.. => impl_241_plus_bytes(secret, input),

        129..=240 => impl_129_to_240_bytes(secret, seed, input),

        17..=128 => impl_17_to_128_bytes(secret, seed, input),

        9..=16 => impl_9_to_16_bytes(secret, seed, input),

        4..=8 => impl_4_to_8_bytes(secret, seed, input),

        1..=3 => impl_1_to_3_bytes(secret, seed, input),

        0 => impl_0_bytes(secret, seed),
    }
}

#[inline]
fn impl_0_bytes(secret: Secret<'_>, seed: u64) -> u64 {
    let [s0, s1] = secret.words_for_0();
    avalanche_xxh64(seed ^ s0 ^ s1)
}

#[inline]
fn impl_1_to_3_bytes(secret: Secret<'_>, seed: u64, input: &[u8]) -> u64 {
    debug_assert!((1..=3).contains(&input.len()));
    let input_length = input.len() as u8; // OK as we checked that the length fits

    let combined = input[input.len() - 1].into_u32()
        | input_length.into_u32() << 8
        | input[0].into_u32() << 16
        | input[input.len() >> 1].into_u32() << 24;

    let [s0, s1] = secret.words_for_1_to_3();
    let bitflip = (s0 ^ s1).into_u64().wrapping_add(seed);

    avalanche_xxh64(bitflip ^ combined.into_u64())
}

#[inline]
fn impl_4_to_8_bytes(secret: Secret<'_>, seed: u64, input: &[u8]) -> u64 {
    debug_assert!((4..=8).contains(&input.len()));
    let input_first = read_u32_le(input);
    let input_last = read_u32_le(&input[input.len() - 4..]);

    let modified_seed = seed ^ (seed.lower_half().swap_bytes().into_u64() << 32);
    let [s0, s1] = secret.words_for_4_to_8();

    let combined = input_last.into_u64() | (input_first.into_u64() << 32);

    let mut value = (s0 ^ s1).wrapping_sub(modified_seed) ^ combined;
    value ^= value.rotate_left(49) ^ value.rotate_left(24);
    value = value.wrapping_mul(PRIME_MX2);
    value ^= (value >> 35).wrapping_add(input.len().into_u64());
    value = value.wrapping_mul(PRIME_MX2);
    value ^= value >> 28;
    value
}

#[inline]
fn impl_9_to_16_bytes(secret: Secret<'_>, seed: u64, input: &[u8]) -> u64 {
    debug_assert!((9..=16).contains(&input.len()));
    let (first, _) = input.as_chunks::<8>();
    let (_, last) = input.as_rchunks::<8>();
    let input_first = u64::from_le_bytes(first[0]);
    let input_last = u64::from_le_bytes(last[last.len() - 1]);

    let [s0, s1, s2, s3] = secret.words_for_9_to_16();
    let low = (s0 ^ s1).wrapping_add(seed) ^ input_first;
    let high = (s2 ^ s3).wrapping_sub(seed) ^ input_last;

    let value = input
        .len()
        .into_u64()
        .wrapping_add(low.swap_bytes())
        .wrapping_add(high)
        .wrapping_add(fold_multiply(low, high));

    avalanche(value)
}

#[inline]
fn impl_17_to_128_bytes(secret: Secret<'_>, seed: u64, input: &[u8]) -> u64 {
    debug_assert!((17..=128).contains(&input.len()));
    let mut acc = input.len().into_u64().wrapping_mul(PRIME64_1);

    let secret = secret.words_for_17_to_128();
    let (fwd, _) = input.as_chunks();
    let (_, bwd) = input.as_rchunks();

    let q = bwd.len();

    // Pairs of windows work inward from both ends.
    let n_pairs = (input.len() - 1) / 32 + 1;
    for i in (0..n_pairs).rev() {
        let [s_fwd, s_bwd] = &secret[i];
        acc = acc.wrapping_add(mix_step(&fwd[i], s_fwd, seed));
        acc = acc.wrapping_add(mix_step(&bwd[q - 1 - i], s_bwd, seed));
    }

    avalanche(acc)
}

#[inline]
fn impl_129_to_240_bytes(secret: Secret<'_>, seed: u64, input: &[u8]) -> u64 {
    debug_assert!((129..=240).contains(&input.len()));
    let mut acc = input.len().into_u64().wrapping_mul(PRIME64_1);

    let (head, _) = input.as_chunks();
    let mut head = head.iter();

    let ss = secret.words_for_129_to_240_part1();
    for (chunk, secret) in head.by_ref().zip(ss).take(8) {
        acc = acc.wrapping_add(mix_step(chunk, secret, seed));
    }

    acc = avalanche(acc);

    let ss = secret.words_for_129_to_240_part2();
    for (chunk, secret) in head.zip(ss) {
        acc = acc.wrapping_add(mix_step(chunk, secret, seed));
    }

    let (_, tail) = input.as_rchunks();
    let ss = secret.words_for_129_to_240_part3();
    acc = acc.wrapping_add(mix_step(&tail[tail.len() - 1], ss, seed));

    avalanche(acc)
}

#[inline]
fn mix_step(data: &[u8; 16], secret: &[u8; 16], seed: u64) -> u64 {
    #[inline]
    fn to_u64s(bytes: &[u8; 16]) -> [u64; 2] {
        let (pair, _) = bytes.as_chunks::<8>();
        [pair[0], pair[1]].map(u64::from_le_bytes)
    }

    let [d0, d1] = to_u64s(data);
    let [s0, s1] = to_u64s(secret);

    fold_multiply(d0 ^ s0.wrapping_add(seed), d1 ^ s1.wrapping_sub(seed))
}

/// 64-bit by 64-bit multiplication to 128-bit full result, with the
/// halves folded together.
#[inline]
fn fold_multiply(a: u64, b: u64) -> u64 {
    let mul_result = a.into_u128().wrapping_mul(b.into_u128());
    mul_result.lower_half() ^ mul_result.upper_half()
}

#[rustfmt::skip]
const INITIAL_ACCUMULATORS: [u64; 8] = [
    PRIME32_3, PRIME64_1, PRIME64_2, PRIME64_3,
    PRIME64_4, PRIME32_2, PRIME64_5, PRIME32_1,
];

/// The eight lanes of the long-input path.
#[derive(Debug, Clone, PartialEq)]
struct Accumulators([u64; 8]);

impl Accumulators {
    const fn new() -> Self {
        Self(INITIAL_ACCUMULATORS)
    }

    #[inline]
    fn accumulate(&mut self, stripe: &[u8; 64], secret: &[u8; 64]) {
        let (stripe, _) = stripe.as_chunks::<8>();
        let (secret, _) = secret.as_chunks::<8>();

        for i in 0..8 {
            let value = u64::from_le_bytes(stripe[i]);
            let key = value ^ u64::from_le_bytes(secret[i]);

            self.0[i ^ 1] = self.0[i ^ 1].wrapping_add(value);
            self.0[i] = self.0[i]
                .wrapping_add(key.lower_half().into_u64() * key.upper_half().into_u64());
        }
    }

    #[inline]
    fn scramble(&mut self, secret_end: &[u8; 64]) {
        let (secret_end, _) = secret_end.as_chunks::<8>();

        for (acc, secret) in self.0.iter_mut().zip(secret_end) {
            let key = u64::from_le_bytes(*secret);

            let mut value = *acc;
            value ^= value >> 47;
            value ^= key;
            *acc = value.wrapping_mul(PRIME32_1);
        }
    }

    /// Accumulates stripes with consecutive secret windows.
    #[inline]
    fn round_accumulate(&mut self, stripes: &[[u8; 64]], secret: Secret<'_>) {
        for (i, stripe) in stripes.iter().enumerate() {
            self.accumulate(stripe, secret.stripe(i));
        }
    }

    #[inline]
    fn merge(&self, init_value: u64, secret: Secret<'_>) -> u64 {
        let (secrets, _) = secret.final_secret().as_chunks::<8>();

        let mut result = init_value;
        for i in 0..4 {
            let sa = u64::from_le_bytes(secrets[i * 2]);
            let sb = u64::from_le_bytes(secrets[i * 2 + 1]);

            result = result.wrapping_add(fold_multiply(self.0[i * 2] ^ sa, self.0[i * 2 + 1] ^ sb));
        }

        avalanche(result)
    }
}

#[inline]
fn impl_241_plus_bytes(secret: Secret<'_>, input: &[u8]) -> u64 {
    debug_assert!(input.len() > CUTOFF);
    let mut acc = Accumulators::new();

    let stripes_per_block = secret.n_stripes();
    let block_size = STRIPE_BYTES * stripes_per_block;

    // The last block always has at least one byte in it, even when
    // the input is an exact multiple of the block size.
    let n_full_blocks = (input.len() - 1) / block_size;
    let (blocks, last_block) = input.split_at(n_full_blocks * block_size);

    let secret_end = secret.last_stripe();
    for block in blocks.chunks_exact(block_size) {
        let (stripes, _) = block.as_chunks();
        acc.round_accumulate(stripes, secret);
        acc.scramble(secret_end);
    }

    // Accumulation steps are run for the stripes in the last block,
    // except for the last stripe (whether it is full or not)
    let n_stripes = (last_block.len() - 1) / STRIPE_BYTES;
    let (stripes, _) = last_block.as_chunks();
    acc.round_accumulate(&stripes[..n_stripes], secret);

    let (_, last_stripes) = input.as_rchunks();
    let last_stripe = &last_stripes[last_stripes.len() - 1];
    acc.accumulate(last_stripe, secret.last_stripe_secret());

    acc.merge(input.len().into_u64().wrapping_mul(PRIME64_1), secret)
}

#[inline]
fn avalanche(mut x: u64) -> u64 {
    x ^= x >> 37;
    x = x.wrapping_mul(PRIME_MX1);
    x ^= x >> 32;
    x
}

#[inline]
fn avalanche_xxh64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(PRIME64_2);
    x ^= x >> 29;
    x = x.wrapping_mul(PRIME64_3);
    x ^= x >> 32;
    x
}

#[cfg(test)]
mod test {
    use std::{array, vec::Vec};

    use super::*;

    macro_rules! bytes {
        ($($n: literal),* $(,)?) => {
            &[$(&gen_bytes::<$n>() as &[u8],)*] as &[&[u8]]
        };
    }

    fn gen_bytes<const N: usize>() -> [u8; N] {
        // Picking 251 as it's a prime number, which will hopefully
        // help avoid incidental power-of-two alignment.
        array::from_fn(|i| (i % 251) as u8)
    }

    #[track_caller]
    fn check(inputs: &[&[u8]], expected: &[u64], mut f: impl FnMut(&[u8]) -> u64) {
        assert_eq!(inputs.len(), expected.len());

        for (input, &expected) in inputs.iter().zip(expected) {
            let hash = f(input);
            assert_eq!(hash, expected, "input was {} bytes", input.len());
        }
    }

    #[test]
    fn default_secret_derives_to_itself() {
        assert_eq!(derive_secret(0), DEFAULT_SECRET_RAW);
    }

    #[test]
    fn hash_of_nothing_matches_c_implementation() {
        assert_eq!(oneshot(&[]), 0x2d06_8005_38d3_94c2);
    }

    #[test]
    fn hash_of_1_to_3_bytes_matches_c_implementation() {
        check(
            bytes![1, 2, 3],
            &[
                0xc44b_dff4_074e_ecdb,
                0xd664_5fc3_051a_9457,
                0x5f42_99fc_161c_9cbb,
            ],
            oneshot,
        );
    }

    #[test]
    fn hash_of_4_to_8_bytes_matches_c_implementation() {
        check(
            bytes![4, 5, 6, 7, 8],
            &[
                0x60da_b036_a582_11f2,
                0xb075_753a_84ca_0fbe,
                0xa658_4d1d_9a6a_e704,
                0x0cd2_084a_6240_6b69,
                0x3a1c_2d7c_85af_88f8,
            ],
            oneshot,
        );
    }

    #[test]
    fn hash_of_9_to_16_bytes_matches_c_implementation() {
        check(
            bytes![9, 10, 11, 12, 13, 14, 15, 16],
            &[
                0xe961_2598_145b_b9dc,
                0xab69_a08e_f83d_8f77,
                0x1cf3_96aa_4de6_198d,
                0x5ace_6a51_1c10_894b,
                0xb7a5_d8a8_309a_2cb9,
                0x4cf4_5c94_4a9a_2237,
                0x55ec_edc2_b87b_b042,
                0x8355_e3a6_f617_70db,
            ],
            oneshot,
        );
    }

    #[test]
    fn hash_of_17_to_128_bytes_matches_c_implementation() {
        check(
            bytes![17, 18, 19, 31, 32, 33, 126, 127, 128],
            &[
                0x9ef3_41a9_9de3_7328,
                0xf691_2490_d4c0_eed5,
                0x60e7_2614_3cf5_0312,
                0x4f36_db8e_4df3_78fd,
                0x3523_581f_e96e_4c05,
                0xe68c_56ba_8899_1e58,
                0x6c2a_9eb7_459c_dc61,
                0x120b_9787_f842_5f2f,
                0x85c6_174c_7ff4_c46b,
            ],
            oneshot,
        );
    }

    #[test]
    fn hash_of_129_to_240_bytes_matches_c_implementation() {
        check(
            bytes![129, 130, 131, 238, 239, 240],
            &[
                0xec76_42b4_31ba_3e5a,
                0x4d32_24b1_0090_8a87,
                0xe57f_7ea6_741f_e3a0,
                0x3044_9a0b_4899_dee9,
                0x972b_14e3_c46f_214b,
                0x375a_384d_957f_e865,
            ],
            oneshot,
        );
    }

    #[test]
    fn hash_of_241_plus_bytes_matches_c_implementation() {
        check(
            bytes![241, 242, 243, 244, 1024, 10240],
            &[
                0x02e8_cd95_421c_6d02,
                0xddcb_33c4_9405_1832,
                0x8835_f952_9193_e3dc,
                0xbc17_c91e_c3cf_8d7f,
                0xe5d7_8baf_a45b_2aa5,
                0xbcd6_3266_df6e_2244,
            ],
            oneshot,
        );
    }

    #[test]
    fn hash_with_seed_matches_c_implementation() {
        check(
            bytes![0, 1, 4, 9, 17, 129, 241, 1024],
            &[
                0x4aed_e683_89c0_e311,
                0x78fc_079a_75aa_f3c0,
                0x1b73_06b8_9f25_4507,
                0x7df7_627f_d1f9_39b6,
                0x49ca_0fff_0950_1622,
                0x2bfd_caec_30ff_3000,
                0xf984_56bc_25be_0901,
                0x2483_9f0f_cdf4_d078,
            ],
            |input| oneshot_with_seed(0xdead_cafe, input),
        );
    }

    /// The buffer used by the reference sanity checks.
    fn sanity_buffer() -> Vec<u8> {
        let mut generator: u64 = 0x9E37_79B1;
        (0..2367)
            .map(|_| {
                let byte = (generator >> 56) as u8;
                generator = generator.wrapping_mul(SANITY_SEED);
                byte
            })
            .collect()
    }

    const SANITY_SEED: u64 = 11_400_714_785_074_694_797;

    #[rustfmt::skip]
    const SANITY_VECTORS: [(usize, u64, u64); 28] = [
        (0, 0, 0x2d06_8005_38d3_94c2),
        (0, SANITY_SEED, 0xa8a6_b918_b2f0_364a),
        (1, 0, 0xc44b_dff4_074e_ecdb),
        (1, SANITY_SEED, 0x032b_e332_dd76_6ef8),
        (6, 0, 0x27b5_6a84_cd2d_7325),
        (6, SANITY_SEED, 0x8458_9c11_6ab5_9ab9),
        (12, 0, 0xa713_daf0_dfbb_77e7),
        (12, SANITY_SEED, 0xe730_3e1b_2336_de0e),
        (24, 0, 0xa3fe_70bf_9d35_10eb),
        (24, SANITY_SEED, 0x850e_80fc_35bd_d690),
        (48, 0, 0x397d_a259_ecba_1f11),
        (48, SANITY_SEED, 0xadc2_cbaa_44ac_c616),
        (80, 0, 0xbcde_fbbb_2c47_c90a),
        (80, SANITY_SEED, 0xc6dd_0cb6_9953_2e73),
        (195, 0, 0xcd94_217e_e362_ec3a),
        (195, SANITY_SEED, 0xba68_003d_370c_b3d9),
        (403, 0, 0xcdeb_804d_65c6_dea4),
        (403, SANITY_SEED, 0x6259_f6ec_fd64_43fd),
        (512, 0, 0x617e_4959_9013_cb6b),
        (512, SANITY_SEED, 0x3ce4_57de_14c2_7708),
        (2048, 0, 0xdd59_e2c3_a5f0_38e0),
        (2048, SANITY_SEED, 0x66f8_1670_669a_babc),
        (2099, 0, 0xc6b9_d9b3_fc9a_c765),
        (2099, SANITY_SEED, 0x184f_3168_4366_3974),
        (2240, 0, 0x6e73_a905_39cf_2948),
        (2240, SANITY_SEED, 0x757b_a848_7d1b_5247),
        (2367, 0, 0xcb37_aeb9_e5d3_61ed),
        (2367, SANITY_SEED, 0xd2db_3415_b942_b42a),
    ];

    #[test]
    fn sanity_table_matches_c_implementation() {
        let buffer = sanity_buffer();

        for (len, seed, expected) in SANITY_VECTORS {
            assert_eq!(
                oneshot_with_seed(seed, &buffer[..len]),
                expected,
                "length {len}, seed {seed:#x}"
            );
        }
    }

    #[test]
    fn seed_zero_is_the_unseeded_hash() {
        for input in bytes![0, 3, 16, 128, 240, 241, 4096] {
            assert_eq!(oneshot_with_seed(0, input), oneshot(input));
        }
    }

    fn test_secret() -> [u8; SECRET_MINIMUM_LENGTH] {
        array::from_fn(|i| (i * 7 + 3) as u8)
    }

    #[test]
    fn hash_with_secret_matches_c_implementation() {
        let secret = test_secret();

        check(
            bytes![0, 2, 7, 15, 100, 200, 241, 1000, 4096],
            &[
                0x1d72_a04b_493e_44e4,
                0xcb9b_04a2_c72e_aff7,
                0x6eed_2ec7_ae83_6e0b,
                0x4a95_1442_de47_f949,
                0xd266_ad49_b869_e330,
                0x6dd5_a829_e4a7_ceb4,
                0x8562_fc2b_41cf_85f9,
                0x2d55_09a5_3f5d_f83e,
                0x1418_c582_7a78_6dd1,
            ],
            |input| oneshot_with_secret(&secret, input).unwrap(),
        );
    }

    #[test]
    fn seed_only_reaches_the_short_tiers_of_an_explicit_secret() {
        let secret = test_secret();

        check(
            bytes![0, 2, 7, 15, 100, 200, 241, 1000],
            &[
                0xf038_1e06_92d1_3da8,
                0x3960_fa66_e4db_592d,
                0x2c50_b59a_5f1f_1584,
                0x79e4_8fd3_480d_2810,
                0x95c0_fbc1_342a_1f7f,
                0xf727_ab5f_8831_40fa,
                0x8562_fc2b_41cf_85f9,
                0x2d55_09a5_3f5d_f83e,
            ],
            |input| oneshot_with_seed_and_secret(0x1234, &secret, input).unwrap(),
        );
    }

    #[test]
    fn largest_secret_spans_multiple_blocks() {
        let secret: Vec<u8> = (0..SECRET_MAXIMUM_LENGTH)
            .map(|i| (i * 31 + 17) as u8)
            .collect();
        let input: Vec<u8> = (0..100_000).map(|i| (i % 251) as u8).collect();

        let hash = oneshot_with_secret(&secret, &input).unwrap();
        assert_eq!(hash, 0xe56c_f40f_fc7e_a99a);

        let hash = oneshot_with_secret(&secret, &input[..SECRET_MAXIMUM_LENGTH * 2]).unwrap();
        assert_eq!(hash, 0x86f6_ee83_7854_df80);
    }

    #[test]
    fn derived_secret_reproduces_the_seeded_long_hash() {
        let seed = 0xdead_cafe;
        let secret = derive_secret(seed);

        for input in bytes![241, 1024, 10240] {
            assert_eq!(
                oneshot_with_secret(&secret, input).unwrap(),
                oneshot_with_seed(seed, input),
                "input was {} bytes",
                input.len()
            );
        }
    }

    #[test]
    fn secret_is_validated_before_any_input_is_read() {
        let short = [0; SECRET_MINIMUM_LENGTH - 1];
        let long = [0; SECRET_MAXIMUM_LENGTH + 1];

        for input in bytes![0, 1, 300] {
            let error = oneshot_with_secret(&short, input).unwrap_err();
            assert_eq!(error.actual_len(), 135);

            let error = oneshot_with_seed_and_secret(1, &long, input).unwrap_err();
            assert_eq!(error.actual_len(), 9868);
        }
    }

    #[test]
    fn secret_length_bounds_are_accepted() {
        let secret = [0x5a; SECRET_MAXIMUM_LENGTH];
        let input = gen_bytes::<20000>();

        assert!(oneshot_with_secret(&secret[..SECRET_MINIMUM_LENGTH], &input).is_ok());
        assert!(oneshot_with_secret(&secret, &input).is_ok());
    }

    #[test]
    fn exact_multiples_of_the_block_size_use_the_last_block() {
        // With the default secret a block is 16 stripes or 1024 bytes.
        let input = gen_bytes::<2048>();
        let a = oneshot(&input);
        let b = oneshot(&input[..2047]);
        assert_ne!(a, b);
        assert_eq!(oneshot(&gen_bytes::<1024>()), 0xe5d7_8baf_a45b_2aa5);
    }
}
