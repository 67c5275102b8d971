//! RSA-2048 wallet keypair.

use crate::error::{WalletError, WalletResult};
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;
use ysnp_types::{fill_random, SecureRandom};

/// Modulus size of every wallet key.
pub const KEY_BITS: usize = 2048;

/// RSA keypair backing a wallet.
///
/// The public half is always derived from the private half, so the two can
/// never disagree. The private key zeroizes itself on drop.
#[derive(Clone)]
pub struct WalletKeyPair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl WalletKeyPair {
    /// Generates a fresh keypair from the operating system's CSPRNG.
    pub fn generate() -> WalletResult<Self> {
        Self::generate_with(&mut OsRng)
    }

    pub fn generate_with<R: SecureRandom>(rng: &mut R) -> WalletResult<Self> {
        // rsa draws with the infallible fill_bytes; probe first so an
        // unavailable source is an error instead of a panic.
        let mut probe = [0u8; 16];
        fill_random(rng, &mut probe).map_err(|e| WalletError::RandomSource(e.to_string()))?;

        let private = RsaPrivateKey::new(rng, KEY_BITS)
            .map_err(|e| WalletError::KeyGeneration(e.to_string()))?;
        Ok(Self::from_private_key(private))
    }

    pub fn from_private_key(private: RsaPrivateKey) -> Self {
        let public = private.to_public_key();
        Self { private, public }
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.public.size() * 8
    }
}

impl PartialEq for WalletKeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private == other.private
    }
}

impl Eq for WalletKeyPair {}

impl fmt::Debug for WalletKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletKeyPair")
            .field("bits", &self.bits())
            .field("private", &"[redacted]")
            .finish()
    }
}
