//! The implementation of SipHash-2-4 with 64-bit output.

use core::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::{
    bits::{read_partial_u64_le, read_u64_le},
    engine::{Buffered, Engine, Length, Streaming},
};

/// The only accepted key length.
pub const KEY_BYTES: usize = 16;

// "somepseudorandomlygeneratedbytes"
const INIT_0: u64 = 0x736f6d6570736575;
const INIT_1: u64 = 0x646f72616e646f6d;
const INIT_2: u64 = 0x6c7967656e657261;
const INIT_3: u64 = 0x7465646279746573;

const COMPRESSION_ROUNDS: usize = 2;
const FINALIZATION_ROUNDS: usize = 4;

type Lanes = [u64; 4];

/// The key passed to [`SipAccumulator::new`][] was not 16 bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyLengthError {
    len: usize,
}

impl KeyLengthError {
    /// The length of the rejected key.
    #[must_use]
    pub fn actual_len(&self) -> usize {
        self.len
    }
}

impl core::error::Error for KeyLengthError {}

impl fmt::Display for KeyLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SipHash key must be {KEY_BYTES} bytes, got {}",
            self.len
        )
    }
}

/// The four-word state of SipHash.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
pub struct SipAccumulator {
    v: Lanes,
    length: Length,
}

impl SipAccumulator {
    /// Initializes the state from a key of exactly [`KEY_BYTES`][] bytes.
    pub fn new(key: &[u8]) -> Result<Self, KeyLengthError> {
        let key = <&[u8; KEY_BYTES]>::try_from(key).map_err(|_| {
            log::debug!("rejecting a SipHash key of {} bytes", key.len());
            KeyLengthError { len: key.len() }
        })?;

        Ok(Self::with_key(*key))
    }

    /// Initializes the state from a key that is known to be the right
    /// length.
    #[must_use]
    pub fn with_key(key: [u8; KEY_BYTES]) -> Self {
        let (k0, k1) = key.split_at(8);
        let k0 = read_u64_le(k0);
        let k1 = read_u64_le(k1);

        Self {
            v: [INIT_0 ^ k0, INIT_1 ^ k1, INIT_2 ^ k0, INIT_3 ^ k1],
            length: Length::new(),
        }
    }

    /// Hash all data at once.
    #[must_use]
    pub fn oneshot(key: [u8; KEY_BYTES], data: &[u8]) -> u64 {
        Engine::oneshot(Self::with_key(key), data)
    }
}

impl Default for SipAccumulator {
    /// Uses an all-zero key.
    fn default() -> Self {
        Self::with_key([0; KEY_BYTES])
    }
}

impl fmt::Debug for SipAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The words are derived from the key.
        f.debug_struct("SipAccumulator")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

const fn sip_round(v: Lanes) -> Lanes {
    let [mut v0, mut v1, mut v2, mut v3] = v;

    v0 = v0.wrapping_add(v1);
    v1 = v1.rotate_left(13);
    v1 ^= v0;
    v0 = v0.rotate_left(32);

    v2 = v2.wrapping_add(v3);
    v3 = v3.rotate_left(16);
    v3 ^= v2;

    v0 = v0.wrapping_add(v3);
    v3 = v3.rotate_left(21);
    v3 ^= v0;

    v2 = v2.wrapping_add(v1);
    v1 = v1.rotate_left(17);
    v1 ^= v2;
    v2 = v2.rotate_left(32);

    [v0, v1, v2, v3]
}

const fn sip_rounds(mut v: Lanes, n: usize) -> Lanes {
    let mut i = 0;
    while i < n {
        v = sip_round(v);
        i += 1;
    }
    v
}

const fn compress(v: Lanes, m: u64) -> Lanes {
    let [v0, v1, v2, v3] = v;
    let [v0, v1, v2, v3] = sip_rounds([v0, v1, v2, v3 ^ m], COMPRESSION_ROUNDS);
    [v0 ^ m, v1, v2, v3]
}

impl Engine for SipAccumulator {
    const STRIPE_BYTES: usize = 8;

    type Digest = u64;

    fn absorb(&mut self, stripes: &[u8]) {
        let (words, rest) = stripes.as_chunks::<8>();
        debug_assert!(rest.is_empty());

        let mut v = self.v;
        for word in words {
            v = compress(v, u64::from_le_bytes(*word));
        }
        self.v = v;

        self.length.add(stripes.len());
    }

    fn finish_with_tail(&self, tail: &[u8]) -> u64 {
        debug_assert!(tail.len() < Self::STRIPE_BYTES);

        // Only the low byte of the length survives the shift.
        let last = (self.length.with_tail(tail) << 56) | read_partial_u64_le(tail);

        let [v0, v1, v2, v3] = compress(self.v, last);
        let [v0, v1, v2, v3] = sip_rounds([v0, v1, v2 ^ 0xff, v3], FINALIZATION_ROUNDS);

        v0 ^ v1 ^ v2 ^ v3
    }
}

/// A sealed streaming SipHash-2-4 computation.
///
/// Every fragment but the last must be a multiple of 8 bytes.
pub type SipState = Streaming<SipAccumulator>;

impl SipState {
    /// Starts a computation; the key must be exactly 16 bytes.
    ///
    /// ```
    /// use hash_depot::siphash::SipState;
    ///
    /// assert!(SipState::new(&[0; 15]).is_err());
    ///
    /// let mut state = SipState::new(&[0; 16]).unwrap();
    /// state.update(b"12345678").unwrap();
    /// state.update(b"9").unwrap();
    /// assert!(state.update(b"0").is_err());
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, KeyLengthError> {
        SipAccumulator::new(key).map(Self::from_engine)
    }

    /// Starts a computation with a key that is known to be the right
    /// length.
    #[must_use]
    pub fn with_key(key: [u8; KEY_BYTES]) -> Self {
        Self::from_engine(SipAccumulator::with_key(key))
    }
}

/// Calculates SipHash-2-4 through [`core::hash::Hasher`][].
pub type SipHasher24 = Buffered<SipAccumulator>;

impl SipHasher24 {
    /// Starts a computation with the given key.
    #[must_use]
    pub fn with_key(key: [u8; KEY_BYTES]) -> Self {
        Self::from_engine(SipAccumulator::with_key(key))
    }
}
