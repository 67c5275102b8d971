//! Shared primitives for YSNP.
//!
//! Both the envelope codec and the keypair store depend on this crate and on
//! nothing else in the workspace, so they stay independent of each other.
//!
//! - [`SecureRandom`]: the only external capability the core consumes
//! - [`ErrorKind`]: the error taxonomy every crate classifies its errors into

mod kind;
pub mod rng;

pub use kind::ErrorKind;
pub use rng::{fill_random, SecureRandom};

#[cfg(any(test, feature = "test-rng"))]
pub use rng::{FailingRng, TestRng};
