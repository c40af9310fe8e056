use core::fmt;

/// The minimum length of a secret.
pub const SECRET_MINIMUM_LENGTH: usize = 136;

/// The maximum length of a secret.
pub const SECRET_MAXIMUM_LENGTH: usize = 9867;

/// Offset of the secret window mixed with the last 16 bytes of a
/// 129 to 240 byte input. Fixed regardless of the secret's length.
const MIDSIZE_LAST_OFFSET: usize = SECRET_MINIMUM_LENGTH - 17;

/// Offset of the extra windows used by 129 to 240 byte inputs.
const MIDSIZE_START_OFFSET: usize = 3;

/// Offset of the secret window used by the final merge.
const SECRET_MERGEACCS_START: usize = 11;

/// Offset back from the end of the secret for the last stripe.
const SECRET_LASTACC_START: usize = 7;

/// A secret whose length is known to be in range.
#[derive(Copy, Clone)]
pub(super) struct Secret<'a>(&'a [u8]);

impl<'a> Secret<'a> {
    #[inline]
    pub(super) fn new(bytes: &'a [u8]) -> Result<Self, Error> {
        let len = bytes.len();
        if (SECRET_MINIMUM_LENGTH..=SECRET_MAXIMUM_LENGTH).contains(&len) {
            Ok(Self(bytes))
        } else {
            log::debug!("rejecting an XXH3 secret of {len} bytes");
            Err(Error { len })
        }
    }

    /// Wraps a secret that has the default length, which is always
    /// in range.
    #[inline]
    pub(super) const fn from_default_length(bytes: &'a [u8; super::DEFAULT_SECRET_LENGTH]) -> Self {
        const _: () = assert!(super::DEFAULT_SECRET_LENGTH >= SECRET_MINIMUM_LENGTH);
        const _: () = assert!(super::DEFAULT_SECRET_LENGTH <= SECRET_MAXIMUM_LENGTH);

        Self(bytes)
    }

    #[inline]
    fn window<const N: usize>(&self, offset: usize) -> &'a [u8; N] {
        let (windows, _) = self.0[offset..].as_chunks::<N>();
        &windows[0]
    }

    #[inline]
    fn u64_at(&self, offset: usize) -> u64 {
        u64::from_le_bytes(*self.window(offset))
    }

    #[inline]
    fn u32_at(&self, offset: usize) -> u32 {
        u32::from_le_bytes(*self.window(offset))
    }

    #[inline]
    pub(super) fn words_for_0(&self) -> [u64; 2] {
        [self.u64_at(56), self.u64_at(64)]
    }

    #[inline]
    pub(super) fn words_for_1_to_3(&self) -> [u32; 2] {
        [self.u32_at(0), self.u32_at(4)]
    }

    #[inline]
    pub(super) fn words_for_4_to_8(&self) -> [u64; 2] {
        [self.u64_at(8), self.u64_at(16)]
    }

    #[inline]
    pub(super) fn words_for_9_to_16(&self) -> [u64; 4] {
        [
            self.u64_at(24),
            self.u64_at(32),
            self.u64_at(40),
            self.u64_at(48),
        ]
    }

    /// Eight 16-byte windows from the start, grouped front/back.
    #[inline]
    pub(super) fn words_for_17_to_128(&self) -> &'a [[[u8; 16]; 2]] {
        let (windows, _) = self.window::<128>(0).as_chunks::<16>();
        let (pairs, _) = windows.as_chunks();
        pairs
    }

    /// The first eight 16-byte windows.
    #[inline]
    pub(super) fn words_for_129_to_240_part1(&self) -> &'a [[u8; 16]] {
        let (windows, _) = self.window::<128>(0).as_chunks();
        windows
    }

    /// 16-byte windows starting three bytes in.
    #[inline]
    pub(super) fn words_for_129_to_240_part2(&self) -> &'a [[u8; 16]] {
        let (windows, _) = self.0[MIDSIZE_START_OFFSET..].as_chunks();
        windows
    }

    #[inline]
    pub(super) fn words_for_129_to_240_part3(&self) -> &'a [u8; 16] {
        self.window(MIDSIZE_LAST_OFFSET)
    }

    /// The secret window for the `i`th stripe of a block.
    #[inline]
    pub(super) fn stripe(&self, i: usize) -> &'a [u8; 64] {
        self.window(i * 8)
    }

    /// The window used to scramble the accumulators after each block.
    #[inline]
    pub(super) fn last_stripe(&self) -> &'a [u8; 64] {
        self.window(self.0.len() - 64)
    }

    /// The window used for the last 64 bytes of input.
    #[inline]
    pub(super) fn last_stripe_secret(&self) -> &'a [u8; 64] {
        self.window(self.0.len() - 64 - SECRET_LASTACC_START)
    }

    #[inline]
    pub(super) fn final_secret(&self) -> &'a [u8; 64] {
        self.window(SECRET_MERGEACCS_START)
    }

    /// How many stripes make up one block.
    #[inline]
    pub(super) fn n_stripes(&self) -> usize {
        (self.0.len() - 64) / 8
    }
}

/// The provided secret was not between [`SECRET_MINIMUM_LENGTH`][]
/// and [`SECRET_MAXIMUM_LENGTH`][] bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    len: usize,
}

impl Error {
    /// The length of the rejected secret.
    #[must_use]
    pub fn actual_len(&self) -> usize {
        self.len
    }
}

impl core::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The secret must be between {SECRET_MINIMUM_LENGTH} and {SECRET_MAXIMUM_LENGTH} bytes, got {}",
            self.len,
        )
    }
}
