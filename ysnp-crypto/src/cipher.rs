//! AES-256-GCM payload encryption.
//!
//! Associated data is always empty. Binding metadata to the ciphertext would
//! change the envelope format and break existing envelopes.

use crate::error::{CryptoError, CryptoResult};
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use ysnp_types::{fill_random, SecureRandom};
use zeroize::Zeroizing;

/// 256-bit data key (32 bytes).
pub const KEY_SIZE: usize = 32;
/// 96-bit GCM nonce (12 bytes).
pub const NONCE_SIZE: usize = 12;
/// 128-bit GCM authentication tag (16 bytes).
pub const TAG_SIZE: usize = 16;

const NO_ASSOCIATED_DATA: &[u8] = &[];

/// Single-use symmetric key for one envelope. Zeroized on drop.
pub(crate) struct DataKey(Zeroizing<[u8; KEY_SIZE]>);

impl DataKey {
    pub(crate) fn random<R: SecureRandom + ?Sized>(rng: &mut R) -> CryptoResult<Self> {
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        fill_random(rng, &mut key[..]).map_err(|e| CryptoError::RandomSource(e.to_string()))?;
        Ok(Self(key))
    }

    /// Rebuilds a key recovered from an unwrapped envelope.
    pub(crate) fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::KeyUnwrap);
        }
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

pub(crate) fn random_nonce<R: SecureRandom + ?Sized>(rng: &mut R) -> CryptoResult<[u8; NONCE_SIZE]> {
    let mut nonce = [0u8; NONCE_SIZE];
    fill_random(rng, &mut nonce).map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(nonce)
}

/// Encrypts `plaintext`, returning `ciphertext || tag`.
pub(crate) fn seal(key: &DataKey, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad: NO_ASSOCIATED_DATA,
            },
        )
        .map_err(|_| CryptoError::Encryption("AES-GCM seal failed".to_string()))
}

/// Verifies and decrypts `ciphertext || tag`.
pub(crate) fn open(key: &DataKey, nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| CryptoError::Decryption)?;

    cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: NO_ASSOCIATED_DATA,
            },
        )
        .map_err(|_| CryptoError::Decryption)
}
