//! The four-lane core shared by xxHash32 and xxHash64.
//!
//! Both algorithms split the input into stripes of four lanes, fold
//! each lane into its own accumulator, and finish by converging the
//! accumulators and consuming the tail. Only the lane width, the
//! constants, and the individual mixing steps differ; those live
//! behind [`Lane`][].

use core::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::{
    engine::{Buffered, Engine, Length, Streaming},
    IntoU64,
};

mod sealed {
    pub trait Sealed {}
}

/// The per-width half of xxHash32 and xxHash64.
///
/// Implemented for `u32` and `u64` only.
pub trait Lane: Copy + fmt::Debug + fmt::LowerHex + PartialEq + sealed::Sealed {
    /// Bytes in one lane.
    const BYTES: usize;

    /// The accumulators' starting values.
    fn initial_accumulators(seed: Self) -> [Self; 4];

    /// Reads one little-endian lane from the front of `bytes`.
    fn read(bytes: &[u8]) -> Self;

    /// Folds one lane into one accumulator.
    fn round(acc: Self, lane: Self) -> Self;

    /// Collapses the accumulators into one value.
    fn converge(accumulators: [Self; 4]) -> Self;

    /// Used in place of [`converge`][Self::converge] when the input
    /// was shorter than one stripe.
    fn small_input(seed: Self) -> Self;

    /// Mixes in the total input length.
    fn add_length(acc: Self, len: u64) -> Self;

    /// Consumes the bytes after the last full stripe.
    fn consume_tail(acc: Self, tail: &[u8]) -> Self;

    /// The final mix.
    fn avalanche(acc: Self) -> Self;
}

#[cfg(feature = "xxhash32")]
impl sealed::Sealed for u32 {}

#[cfg(feature = "xxhash64")]
impl sealed::Sealed for u64 {}

#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
struct Accumulators<L: Lane>([L; 4]);

impl<L: Lane> Accumulators<L> {
    fn new(seed: L) -> Self {
        Self(L::initial_accumulators(seed))
    }

    /// Folds one stripe, returning the next state.
    fn round_stripe(self, stripe: &[u8]) -> Self {
        let [acc1, acc2, acc3, acc4] = self.0;
        let (lane1, stripe) = stripe.split_at(L::BYTES);
        let (lane2, stripe) = stripe.split_at(L::BYTES);
        let (lane3, lane4) = stripe.split_at(L::BYTES);

        Self([
            L::round(acc1, L::read(lane1)),
            L::round(acc2, L::read(lane2)),
            L::round(acc3, L::read(lane3)),
            L::round(acc4, L::read(lane4)),
        ])
    }

    fn converge(self) -> L {
        L::converge(self.0)
    }
}

impl<L: Lane> fmt::Debug for Accumulators<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [acc1, acc2, acc3, acc4] = self.0;
        f.debug_struct("Accumulators")
            .field("acc1", &format_args!("{acc1:#x}"))
            .field("acc2", &format_args!("{acc2:#x}"))
            .field("acc3", &format_args!("{acc3:#x}"))
            .field("acc4", &format_args!("{acc4:#x}"))
            .finish()
    }
}

/// The stripe-level state of xxHash32 or xxHash64.
///
/// This is the [`Engine`][] behind both the sealed
/// [`Streaming`][] state and the buffered [`Buffered`][] hasher.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
pub struct StripeAccumulator<L: Lane> {
    seed: L,
    accumulators: Accumulators<L>,
    length: Length,
}

impl<L: Lane> StripeAccumulator<L> {
    /// Step 1. Initialize internal accumulators
    #[must_use]
    pub fn with_seed(seed: L) -> Self {
        Self {
            seed,
            accumulators: Accumulators::new(seed),
            length: Length::new(),
        }
    }

    /// The seed this state was created with.
    #[must_use]
    pub fn seed(&self) -> L {
        self.seed
    }
}

impl<L> Default for StripeAccumulator<L>
where
    L: Lane + Default,
{
    fn default() -> Self {
        Self::with_seed(L::default())
    }
}

impl<L: Lane> Engine for StripeAccumulator<L> {
    const STRIPE_BYTES: usize = 4 * L::BYTES;

    type Digest = L;

    // Step 2. Process stripes
    fn absorb(&mut self, stripes: &[u8]) {
        debug_assert_eq!(stripes.len() % Self::STRIPE_BYTES, 0);

        let mut accumulators = self.accumulators;
        for stripe in stripes.chunks_exact(Self::STRIPE_BYTES) {
            accumulators = accumulators.round_stripe(stripe);
        }
        self.accumulators = accumulators;

        self.length.add(stripes.len());
    }

    fn finish_with_tail(&self, tail: &[u8]) -> L {
        debug_assert!(tail.len() < Self::STRIPE_BYTES);

        let len = self.length.with_tail(tail);

        // Step 3. Accumulator convergence
        let acc = if len < Self::STRIPE_BYTES.into_u64() {
            L::small_input(self.seed)
        } else {
            self.accumulators.converge()
        };

        // Step 4. Add input length
        let acc = L::add_length(acc, len);

        // Step 5. Consume remaining input
        let acc = L::consume_tail(acc, tail);

        // Step 6. Final mix (avalanche)
        L::avalanche(acc)
    }
}

impl<L: Lane> Streaming<StripeAccumulator<L>> {
    /// Starts a sealed-streaming computation.
    #[must_use]
    pub fn with_seed(seed: L) -> Self {
        Self::from_engine(StripeAccumulator::with_seed(seed))
    }
}

impl<L: Lane> Buffered<StripeAccumulator<L>> {
    /// Starts a buffered computation.
    #[must_use]
    pub fn with_seed(seed: L) -> Self {
        Self::from_engine(StripeAccumulator::with_seed(seed))
    }

    /// Hash all data at once. If you can use this function, you may
    /// see noticeable speed gains for certain types of input.
    #[must_use]
    #[inline]
    pub fn oneshot(seed: L, data: &[u8]) -> L {
        StripeAccumulator::with_seed(seed).oneshot(data)
    }
}
