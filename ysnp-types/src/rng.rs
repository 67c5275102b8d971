//! Secure random source capability.
//!
//! Key generation and encryption take the random source as an explicit
//! argument instead of reaching for a process-wide generator. The trait is
//! sealed: outside of test builds the only implementation is [`OsRng`].

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

mod sealed {
    pub trait Sealed {}
}

/// A cryptographically secure random byte source.
pub trait SecureRandom: RngCore + CryptoRng + sealed::Sealed {}

impl sealed::Sealed for OsRng {}
impl SecureRandom for OsRng {}

/// Fills `buf` from `rng`, returning the source's failure instead of panicking.
pub fn fill_random<R: SecureRandom + ?Sized>(rng: &mut R, buf: &mut [u8]) -> Result<(), rand::Error> {
    rng.try_fill_bytes(buf)
}

#[cfg(any(test, feature = "test-rng"))]
mod test_sources {
    use super::{sealed, SecureRandom};
    use rand::rngs::StdRng;
    use rand::{CryptoRng, RngCore, SeedableRng};

    /// Reproducible source seeded from a `u64`.
    #[derive(Clone, Debug)]
    pub struct TestRng(StdRng);

    impl TestRng {
        pub fn from_seed(seed: u64) -> Self {
            Self(StdRng::seed_from_u64(seed))
        }
    }

    impl RngCore for TestRng {
        fn next_u32(&mut self) -> u32 {
            self.0.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.0.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.0.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.0.try_fill_bytes(dest)
        }
    }

    impl CryptoRng for TestRng {}
    impl sealed::Sealed for TestRng {}
    impl SecureRandom for TestRng {}

    /// Source that always reports exhaustion.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            panic!("FailingRng has no entropy")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("FailingRng has no entropy")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("FailingRng has no entropy")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::other("entropy source unavailable")))
        }
    }

    impl CryptoRng for FailingRng {}
    impl sealed::Sealed for FailingRng {}
    impl SecureRandom for FailingRng {}
}

#[cfg(any(test, feature = "test-rng"))]
pub use test_sources::{FailingRng, TestRng};
