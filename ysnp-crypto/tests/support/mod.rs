//! Shared keys for integration tests.
//!
//! RSA-2048 generation is slow, so each test binary generates its keys once.

#![allow(dead_code)]

use rand::rngs::OsRng;
use std::sync::OnceLock;
use ysnp_crypto::{RsaPrivateKey, RsaPublicKey};

pub const KEY_BITS: usize = 2048;

static RECIPIENT: OnceLock<RsaPrivateKey> = OnceLock::new();
static STRANGER: OnceLock<RsaPrivateKey> = OnceLock::new();

/// The key every envelope in a test is sealed for.
pub fn recipient() -> &'static RsaPrivateKey {
    RECIPIENT.get_or_init(|| RsaPrivateKey::new(&mut OsRng, KEY_BITS).expect("key generation must succeed"))
}

pub fn recipient_public() -> RsaPublicKey {
    recipient().to_public_key()
}

/// An unrelated key that must never open the recipient's envelopes.
pub fn stranger() -> &'static RsaPrivateKey {
    STRANGER.get_or_init(|| RsaPrivateKey::new(&mut OsRng, KEY_BITS).expect("key generation must succeed"))
}

/// Flips one bit of a base64 field's decoded bytes and re-encodes it.
pub fn flip_bit(field: &str, byte: usize, bit: u8) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine};
    let mut bytes = STANDARD.decode(field).expect("field must be valid base64");
    bytes[byte] ^= 1 << bit;
    STANDARD.encode(bytes)
}
