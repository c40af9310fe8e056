//! Non-cryptographic hash functions: xxHash32, xxHash64, XXH3 (64-bit),
//! SipHash-2-4, FNV-1/FNV-1a and MurmurHash3.
//!
//! Every algorithm has a one-shot function. xxHash32, xxHash64 and
//! SipHash-2-4 additionally come in two streaming forms:
//!
//! - a sealed [`Streaming`][engine::Streaming] state, where every
//!   fragment but the last must be a whole number of stripes and the
//!   first partial fragment ends the computation;
//! - a buffered [`core::hash::Hasher`][] that accepts any sequence of
//!   writes.
//!
//! ### One-shot
//!
//! ```rust
//! assert_eq!(hash_depot::hash64(b"", 0), 0xef46_db37_51d8_e999);
//! assert_eq!(hash_depot::xxh3_hash64(b"", 0), 0x2d06_8005_38d3_94c2);
//! ```
//!
//! ### With a fixed seed
//!
//! ```rust
//! use std::hash::BuildHasherDefault;
//! use std::collections::HashMap;
//! use hash_depot::XxHash64;
//!
//! let mut hash: HashMap<_, _, BuildHasherDefault<XxHash64>> = Default::default();
//! hash.insert(42, "the answer");
//! assert_eq!(hash.get(&42), Some(&"the answer"));
//! ```
//!
//! ### With a random seed
//!
//! ```rust
//! # #[cfg(feature = "random")] {
//! use std::collections::HashMap;
//! use hash_depot::RandomXxHash64Builder;
//!
//! let mut hash: HashMap<_, _, RandomXxHash64Builder> = Default::default();
//! hash.insert(42, "the answer");
//! assert_eq!(hash.get(&42), Some(&"the answer"));
//! # }
//! ```
//!
//! ### Sealed streaming
//!
//! ```rust
//! use hash_depot::xxhash64::State;
//!
//! let mut data = vec![0; 32];
//! data.extend_from_slice(b"tail");
//!
//! let mut state = State::with_seed(0);
//! state.update(&data[..32]).unwrap();
//! state.update(&data[32..]).unwrap();
//! assert!(state.update(b"more").is_err());
//! assert_eq!(state.result(), hash_depot::hash64(&data, 0));
//! ```
//!
//! ## Feature flags
//!
//! | name       | description                                             |
//! |------------|---------------------------------------------------------|
//! | xxhash32   | xxHash32 one-shot, sealed-streaming and `Hasher` forms  |
//! | xxhash64   | xxHash64 one-shot, sealed-streaming and `Hasher` forms  |
//! | xxhash3_64 | XXH3 64-bit one-shot                                    |
//! | siphash    | SipHash-2-4 one-shot, sealed-streaming and `Hasher`     |
//! | fnv        | FNV-1 and FNV-1a                                        |
//! | murmur3    | MurmurHash3 x86_32 and x64_128                          |
//! | random     | `BuildHasher`s seeded from the thread-local RNG         |
//! | serialize  | `serde` support for the streaming states                |
//! | std        | Standard library support                                |

#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", test))]
extern crate std;

#[allow(dead_code)]
mod bits;

#[cfg(any(feature = "xxhash32", feature = "xxhash64", feature = "siphash"))]
#[cfg_attr(docsrs, doc(cfg(any(feature = "xxhash32", feature = "xxhash64", feature = "siphash"))))]
pub mod engine;

#[cfg(any(feature = "xxhash32", feature = "xxhash64"))]
#[cfg_attr(docsrs, doc(cfg(any(feature = "xxhash32", feature = "xxhash64"))))]
pub mod stripe_accumulator;

#[cfg(feature = "xxhash32")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash32")))]
pub mod xxhash32;

#[cfg(feature = "xxhash32")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash32")))]
pub use xxhash32::XxHash32;

#[cfg(feature = "xxhash64")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash64")))]
pub mod xxhash64;

#[cfg(feature = "xxhash64")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash64")))]
pub use xxhash64::XxHash64;

#[cfg(feature = "xxhash3_64")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash3_64")))]
pub mod xxhash3_64;

#[cfg(feature = "siphash")]
#[cfg_attr(docsrs, doc(cfg(feature = "siphash")))]
pub mod siphash;

#[cfg(feature = "siphash")]
#[cfg_attr(docsrs, doc(cfg(feature = "siphash")))]
pub use siphash::SipHasher24;

#[cfg(feature = "fnv")]
#[cfg_attr(docsrs, doc(cfg(feature = "fnv")))]
pub mod fnv;

#[cfg(feature = "fnv")]
#[cfg_attr(docsrs, doc(cfg(feature = "fnv")))]
pub use fnv::{fnv1_32, fnv1_64, fnv1a_32, fnv1a_64};

#[cfg(feature = "murmur3")]
#[cfg_attr(docsrs, doc(cfg(feature = "murmur3")))]
pub mod murmur3;

#[cfg(feature = "murmur3")]
#[cfg_attr(docsrs, doc(cfg(feature = "murmur3")))]
pub use murmur3::{murmur3_128, murmur3_32};

#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
mod std_support;

#[cfg(all(feature = "random", feature = "xxhash32"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "random", feature = "xxhash32"))))]
pub use std_support::xxhash32::RandomXxHash32Builder;

#[cfg(all(feature = "random", feature = "xxhash64"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "random", feature = "xxhash64"))))]
pub use std_support::xxhash64::RandomXxHash64Builder;

#[cfg(all(feature = "random", feature = "siphash"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "random", feature = "siphash"))))]
pub use std_support::siphash::RandomSipHasherBuilder;

/// xxHash32 of `data`.
#[cfg(feature = "xxhash32")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash32")))]
#[must_use]
pub fn hash32(data: &[u8], seed: u32) -> u32 {
    XxHash32::oneshot(seed, data)
}

/// xxHash64 of `data`.
#[cfg(feature = "xxhash64")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash64")))]
#[must_use]
pub fn hash64(data: &[u8], seed: u64) -> u64 {
    XxHash64::oneshot(seed, data)
}

/// SipHash-2-4 of `data`. The key must be exactly 16 bytes.
///
/// ```
/// let key: Vec<u8> = (0..16).collect();
/// assert_eq!(hash_depot::siphash64(b"", &key), Ok(0x726f_db47_dd0e_0e31));
/// assert!(hash_depot::siphash64(b"", &key[..15]).is_err());
/// ```
#[cfg(feature = "siphash")]
#[cfg_attr(docsrs, doc(cfg(feature = "siphash")))]
pub fn siphash64(data: &[u8], key: &[u8]) -> Result<u64, siphash::KeyLengthError> {
    use engine::Engine;

    siphash::SipAccumulator::new(key).map(|state| Engine::oneshot(state, data))
}

/// XXH3 (64-bit) of `data`. A non-zero seed derives a custom secret
/// for inputs longer than 240 bytes.
#[cfg(feature = "xxhash3_64")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash3_64")))]
#[must_use]
pub fn xxh3_hash64(data: &[u8], seed: u64) -> u64 {
    xxhash3_64::oneshot_with_seed(seed, data)
}

/// XXH3 (64-bit) of `data` keyed by `secret`, which must be between
/// 136 and 9867 bytes long. The seed affects inputs of up to 240
/// bytes only.
#[cfg(feature = "xxhash3_64")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash3_64")))]
pub fn xxh3_hash64_with_secret(
    data: &[u8],
    secret: &[u8],
    seed: u64,
) -> Result<u64, xxhash3_64::SecretLengthError> {
    xxhash3_64::oneshot_with_seed_and_secret(seed, secret, data)
}

trait IntoU32 {
    fn into_u32(self) -> u32;
}

impl IntoU32 for u8 {
    fn into_u32(self) -> u32 {
        self.into()
    }
}

trait IntoU64 {
    fn into_u64(self) -> u64;
}

impl IntoU64 for u8 {
    fn into_u64(self) -> u64 {
        self.into()
    }
}

impl IntoU64 for u32 {
    fn into_u64(self) -> u64 {
        self.into()
    }
}

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl IntoU64 for usize {
    fn into_u64(self) -> u64 {
        self as u64
    }
}

trait IntoU128 {
    fn into_u128(self) -> u128;
}

impl IntoU128 for u64 {
    fn into_u128(self) -> u128 {
        u128::from(self)
    }
}

#[cfg(test)]
mod test {
    #[cfg(feature = "xxhash32")]
    #[test]
    fn hash32_matches_the_hasher() {
        use core::hash::Hasher as _;

        let mut hasher = crate::XxHash32::with_seed(7);
        hasher.write(b"The quick brown fox jumps over the lazy dog");
        assert_eq!(
            u64::from(crate::hash32(b"The quick brown fox jumps over the lazy dog", 7)),
            hasher.finish()
        );
    }

    #[cfg(feature = "siphash")]
    #[test]
    fn siphash64_rejects_keys_of_the_wrong_length() {
        let key = [0; 17];
        assert_eq!(crate::siphash64(b"", &key[..15]).unwrap_err().actual_len(), 15);
        assert_eq!(crate::siphash64(b"", &key).unwrap_err().actual_len(), 17);
        assert!(crate::siphash64(b"", &key[..16]).is_ok());
    }

    #[cfg(feature = "xxhash3_64")]
    #[test]
    fn xxh3_entry_points_agree_on_the_default_secret() {
        let input = [0xa5; 300];
        let default_secret = crate::xxhash3_64::derive_secret(0);

        assert_eq!(
            crate::xxh3_hash64_with_secret(&input, &default_secret, 0),
            Ok(crate::xxh3_hash64(&input, 0))
        );
        assert_eq!(
            crate::xxh3_hash64_with_secret(&input[..100], &default_secret, 99),
            Ok(crate::xxh3_hash64(&input[..100], 99))
        );
    }

    #[cfg(feature = "xxhash3_64")]
    #[test]
    fn xxh3_seeds_change_the_output() {
        let input = [0x11; 500];
        assert_ne!(crate::xxh3_hash64(&input, 1), crate::xxh3_hash64(&input, 2));
        assert_ne!(crate::xxh3_hash64(&input[..5], 1), crate::xxh3_hash64(&input[..5], 2));
    }
}
