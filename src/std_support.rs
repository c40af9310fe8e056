//! [`BuildHasher`][core::hash::BuildHasher]s seeded from the thread-local RNG.

#[cfg(feature = "xxhash32")]
pub mod xxhash32 {
    use core::hash::BuildHasher;
    use rand::{self, Rng};

    use crate::XxHash32;

    /// Constructs a randomized seed and reuses it for multiple hasher
    /// instances.
    #[derive(Debug, Copy, Clone)]
    pub struct RandomXxHash32Builder(u32);

    impl RandomXxHash32Builder {
        fn new() -> Self {
            Self(rand::rng().random())
        }

        /// The seed handed to every hasher.
        #[must_use]
        pub fn seed(&self) -> u32 {
            self.0
        }
    }

    impl Default for RandomXxHash32Builder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BuildHasher for RandomXxHash32Builder {
        type Hasher = XxHash32;

        fn build_hasher(&self) -> Self::Hasher {
            XxHash32::with_seed(self.0)
        }
    }
}

#[cfg(feature = "xxhash64")]
pub mod xxhash64 {
    use core::hash::BuildHasher;
    use rand::{self, Rng};

    use crate::XxHash64;

    /// Constructs a randomized seed and reuses it for multiple hasher
    /// instances.
    #[derive(Debug, Copy, Clone)]
    pub struct RandomXxHash64Builder(u64);

    impl RandomXxHash64Builder {
        fn new() -> Self {
            Self(rand::rng().random())
        }

        /// The seed handed to every hasher.
        #[must_use]
        pub fn seed(&self) -> u64 {
            self.0
        }
    }

    impl Default for RandomXxHash64Builder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BuildHasher for RandomXxHash64Builder {
        type Hasher = XxHash64;

        fn build_hasher(&self) -> Self::Hasher {
            XxHash64::with_seed(self.0)
        }
    }
}

#[cfg(feature = "siphash")]
pub mod siphash {
    use core::hash::BuildHasher;
    use rand::{self, Rng};

    use crate::siphash::{SipHasher24, KEY_BYTES};

    /// Constructs a randomized key and reuses it for multiple hasher
    /// instances.
    #[derive(Clone)]
    pub struct RandomSipHasherBuilder([u8; KEY_BYTES]);

    impl RandomSipHasherBuilder {
        fn new() -> Self {
            Self(rand::rng().random())
        }
    }

    impl Default for RandomSipHasherBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl core::fmt::Debug for RandomSipHasherBuilder {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.debug_struct("RandomSipHasherBuilder").finish_non_exhaustive()
        }
    }

    impl BuildHasher for RandomSipHasherBuilder {
        type Hasher = SipHasher24;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher24::with_key(self.0)
        }
    }
}
