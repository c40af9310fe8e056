//! The lifecycle shared by every streaming hash in this crate.
//!
//! An [`Engine`][] only knows how to fold whole stripes and how to
//! finish with a short tail. Two wrappers give it a public face:
//!
//! - [`Streaming`][] enforces the sealed-state contract: the first
//!   update that leaves a partial stripe behind is the last one.
//! - [`Buffered`][] holds partial stripes back until the next write
//!   and implements [`core::hash::Hasher`][], so it accepts any
//!   sequence of writes.

use core::{fmt, hash::Hasher};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::IntoU64 as _;

/// A stripe-oriented hashing core.
pub trait Engine: Clone {
    /// The number of bytes folded as one unit.
    const STRIPE_BYTES: usize;

    /// The finished hash value.
    type Digest: Copy + fmt::Debug + PartialEq;

    /// Folds whole stripes into the state.
    ///
    /// `stripes.len()` must be a multiple of [`Self::STRIPE_BYTES`][].
    fn absorb(&mut self, stripes: &[u8]);

    /// Computes the hash as if `tail` were the final input. `tail`
    /// must be shorter than one stripe. The state is not modified.
    fn finish_with_tail(&self, tail: &[u8]) -> Self::Digest;

    /// Hash all data at once.
    #[inline]
    fn oneshot(mut self, data: &[u8]) -> Self::Digest {
        let (stripes, tail) = split_stripes::<Self>(data);
        self.absorb(stripes);
        self.finish_with_tail(tail)
    }
}

#[inline]
fn split_stripes<E: Engine>(data: &[u8]) -> (&[u8], &[u8]) {
    let full = data.len() - data.len() % E::STRIPE_BYTES;
    data.split_at(full)
}

/// `update` was called on a state that already consumed its final
/// fragment or was finalized.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SealedError {
    _private: (),
}

impl SealedError {
    const fn new() -> Self {
        Self { _private: () }
    }
}

impl core::error::Error for SealedError {}

impl fmt::Debug for SealedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SealedError").finish()
    }
}

impl fmt::Display for SealedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("update called after the final fragment was processed")
    }
}

/// A streaming hash with an explicit end.
///
/// Fragments passed to [`update`][Self::update] are folded
/// immediately. Every fragment except the last must therefore be a
/// whole number of stripes; a fragment with a partial stripe at its
/// end is taken to be the final one and seals the state. Calling
/// [`result`][Self::result] seals it as well.
///
/// Use [`Buffered`][] when the fragment boundaries are not under
/// your control.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[cfg_attr(
    feature = "serialize",
    serde(bound(
        serialize = "E: Serialize, E::Digest: Serialize",
        deserialize = "E: Deserialize<'de>, E::Digest: Deserialize<'de>"
    ))
)]
pub struct Streaming<E: Engine> {
    engine: E,
    sealed: Option<E::Digest>,
}

impl<E: Engine> Streaming<E> {
    /// Starts a computation on the given engine.
    #[must_use]
    pub const fn from_engine(engine: E) -> Self {
        Self {
            engine,
            sealed: None,
        }
    }

    /// Folds the next fragment into the state.
    ///
    /// An empty fragment is accepted and changes nothing, as long as
    /// the state is not sealed yet.
    pub fn update(&mut self, data: &[u8]) -> Result<(), SealedError> {
        if self.sealed.is_some() {
            log::debug!(
                "rejecting a {}-byte update on a sealed hash state",
                data.len()
            );
            return Err(SealedError::new());
        }

        let (stripes, tail) = split_stripes::<E>(data);
        self.engine.absorb(stripes);

        if !tail.is_empty() {
            self.sealed = Some(self.engine.finish_with_tail(tail));
        }

        Ok(())
    }

    /// Finalizes the computation. Further calls return the same
    /// value; further updates are rejected.
    pub fn result(&mut self) -> E::Digest {
        let Self { engine, sealed } = self;
        *sealed.get_or_insert_with(|| engine.finish_with_tail(&[]))
    }

    /// Whether further updates will be rejected.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed.is_some()
    }
}

/// The largest stripe of any engine that can be buffered.
const MAX_STRIPE_BYTES: usize = 32;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
struct Buffer {
    offset: usize,
    data: [u8; MAX_STRIPE_BYTES],
}

impl Buffer {
    const fn new() -> Self {
        Self {
            offset: 0,
            data: [0; MAX_STRIPE_BYTES],
        }
    }

    /// Tops up a partially-filled stripe. Returns the stripe once it
    /// is complete along with the unused input.
    fn extend<'d>(&mut self, stripe_bytes: usize, data: &'d [u8]) -> (Option<&[u8]>, &'d [u8]) {
        if self.offset == 0 {
            return (None, data);
        };

        debug_assert!(self.offset < stripe_bytes);

        let empty = &mut self.data[self.offset..stripe_bytes];
        let n_to_copy = usize::min(empty.len(), data.len());

        let (src, rest) = data.split_at(n_to_copy);
        empty[..n_to_copy].copy_from_slice(src);
        self.offset += n_to_copy;

        if self.offset == stripe_bytes {
            self.offset = 0;
            (Some(&self.data[..stripe_bytes]), rest)
        } else {
            (None, rest)
        }
    }

    fn set(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        debug_assert_eq!(self.offset, 0);

        self.data[..data.len()].copy_from_slice(data);
        self.offset = data.len();
    }

    fn remaining(&self) -> &[u8] {
        &self.data[..self.offset]
    }
}

/// Adapts an [`Engine`][] to [`core::hash::Hasher`][].
///
/// Partial stripes are held back until the next write completes them,
/// so any sequence of writes yields the same value as hashing their
/// concatenation in one go.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
pub struct Buffered<E> {
    engine: E,
    buffer: Buffer,
}

impl<E: Engine> Buffered<E> {
    /// Starts a computation on the given engine.
    #[must_use]
    pub const fn from_engine(engine: E) -> Self {
        const { assert!(E::STRIPE_BYTES <= MAX_STRIPE_BYTES) };

        Self {
            engine,
            buffer: Buffer::new(),
        }
    }

    /// Returns the hash of everything written so far at the
    /// algorithm's native width.
    #[must_use]
    pub fn digest(&self) -> E::Digest {
        self.engine.finish_with_tail(self.buffer.remaining())
    }
}

impl<E> Default for Buffered<E>
where
    E: Engine + Default,
{
    fn default() -> Self {
        Self::from_engine(E::default())
    }
}

impl<E> Hasher for Buffered<E>
where
    E: Engine,
    E::Digest: Into<u64>,
{
    fn write(&mut self, data: &[u8]) {
        let (buffered, data) = self.buffer.extend(E::STRIPE_BYTES, data);

        if let Some(stripe) = buffered {
            self.engine.absorb(stripe);
        }

        let (stripes, tail) = split_stripes::<E>(data);
        self.engine.absorb(stripes);

        self.buffer.set(tail);
    }

    fn finish(&self) -> u64 {
        self.digest().into()
    }
}

/// Running byte count kept by the engines.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
pub(crate) struct Length(u64);

impl Length {
    pub(crate) const fn new() -> Self {
        Self(0)
    }

    pub(crate) fn add(&mut self, n: usize) {
        self.0 = self.0.wrapping_add(n.into_u64());
    }

    pub(crate) fn with_tail(self, tail: &[u8]) -> u64 {
        self.0.wrapping_add(tail.len().into_u64())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Sums bytes and counts them; small enough to reason about.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Summer {
        sum: u64,
        length: Length,
    }

    impl Engine for Summer {
        const STRIPE_BYTES: usize = 4;
        type Digest = u64;

        fn absorb(&mut self, stripes: &[u8]) {
            assert_eq!(stripes.len() % Self::STRIPE_BYTES, 0);
            self.sum += stripes.iter().map(|&b| u64::from(b)).sum::<u64>();
            self.length.add(stripes.len());
        }

        fn finish_with_tail(&self, tail: &[u8]) -> u64 {
            assert!(tail.len() < Self::STRIPE_BYTES);
            let tail_sum: u64 = tail.iter().map(|&b| u64::from(b)).sum();
            (self.sum + tail_sum) << 16 | self.length.with_tail(tail)
        }
    }

    #[test]
    fn streaming_seals_on_partial_stripe() {
        let mut state = Streaming::from_engine(Summer::default());
        state.update(&[1, 2, 3, 4]).unwrap();
        assert!(!state.is_sealed());

        state.update(&[5]).unwrap();
        assert!(state.is_sealed());

        assert_eq!(state.update(&[6]), Err(SealedError::new()));
        assert_eq!(state.update(&[]), Err(SealedError::new()));
        assert_eq!(state.result(), (15 << 16) | 5);
    }

    #[test]
    fn streaming_seals_on_result() {
        let mut state = Streaming::from_engine(Summer::default());
        state.update(&[1, 1, 1, 1]).unwrap();

        let first = state.result();
        assert!(state.is_sealed());
        assert!(state.update(&[1, 1, 1, 1]).is_err());
        assert_eq!(state.result(), first);
    }

    #[test]
    fn streaming_ignores_empty_fragments_before_sealing() {
        let mut state = Streaming::from_engine(Summer::default());
        state.update(&[]).unwrap();
        state.update(&[9, 9, 9, 9]).unwrap();
        state.update(&[]).unwrap();

        assert!(!state.is_sealed());
        assert_eq!(state.result(), (36 << 16) | 4);
    }

    #[test]
    fn rejected_update_leaves_the_result_alone() {
        let mut state = Streaming::from_engine(Summer::default());
        state.update(&[7, 7]).unwrap();
        let before = state.clone();

        assert!(state.update(&[1, 2, 3, 4]).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn buffered_matches_oneshot_for_arbitrary_writes() {
        let data: std::vec::Vec<u8> = (0..23).collect();
        let expected = Summer::default().oneshot(&data);

        for split in 1..data.len() {
            let mut hasher = Buffered::from_engine(Summer::default());
            for chunk in data.chunks(split) {
                hasher.write(chunk);
            }
            assert_eq!(hasher.digest(), expected, "chunk size was {split}");
            assert_eq!(hasher.finish(), expected);
        }
    }

    #[test]
    fn buffered_finish_does_not_consume_the_tail() {
        let mut hasher = Buffered::from_engine(Summer::default());
        hasher.write(&[1, 2, 3]);
        let early = hasher.finish();
        assert_eq!(hasher.finish(), early);

        hasher.write(&[4, 5]);
        assert_eq!(hasher.finish(), Summer::default().oneshot(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn sealed_error_has_a_message() {
        use std::string::ToString;

        let message = SealedError::new().to_string();
        assert!(message.contains("final fragment"));
    }
}
