//! Shared helpers for wallet integration tests.

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::OnceLock;
use ysnp_wallet::{WalletFile, WalletKeyPair};

static KEYPAIR: OnceLock<WalletKeyPair> = OnceLock::new();
static OTHER: OnceLock<WalletKeyPair> = OnceLock::new();

/// A keypair generated once per test binary.
pub fn keypair() -> &'static WalletKeyPair {
    KEYPAIR.get_or_init(|| WalletKeyPair::generate().expect("key generation must succeed"))
}

/// A second, unrelated keypair.
pub fn other_keypair() -> &'static WalletKeyPair {
    OTHER.get_or_init(|| WalletKeyPair::generate().expect("key generation must succeed"))
}

/// Parses serialized container bytes back into the wire struct for editing.
pub fn parse(bytes: &[u8]) -> WalletFile {
    WalletFile::from_json(bytes).expect("container must parse")
}

/// PKCS#8 DER of an Ed25519 private key (RFC 8410 test shape, zero seed).
pub fn ed25519_pkcs8_b64() -> String {
    let mut der = vec![
        0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04,
        0x20,
    ];
    der.extend_from_slice(&[0u8; 32]);
    STANDARD.encode(der)
}

/// SubjectPublicKeyInfo DER of an Ed25519 public key (all-zero point).
pub fn ed25519_spki_b64() -> String {
    let mut der = vec![
        0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00,
    ];
    der.extend_from_slice(&[0u8; 32]);
    STANDARD.encode(der)
}
