//! Algorithm labels carried in the envelope.
//!
//! The wire format stores free-text labels; inside the codec they are closed
//! enums so every supported combination is matched exhaustively.

use crate::error::{CryptoError, CryptoResult};

/// Key-wrapping scheme named by the `alg` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AsymmetricAlgorithm {
    /// RSA-OAEP with SHA-256 as both hash and MGF1 digest.
    RsaOaepSha256,
}

impl AsymmetricAlgorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AsymmetricAlgorithm::RsaOaepSha256 => "RSA-OAEP-SHA256",
        }
    }

    /// Parses an `alg` label, rejecting anything unrecognized.
    pub fn parse(label: &str) -> CryptoResult<Self> {
        match label {
            "RSA-OAEP-SHA256" => Ok(AsymmetricAlgorithm::RsaOaepSha256),
            other => Err(CryptoError::UnsupportedAlgorithm {
                field: "alg",
                value: other.to_string(),
            }),
        }
    }
}

/// Payload cipher named by the `enc` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymmetricAlgorithm {
    /// AES-256-GCM with a 96-bit nonce and 128-bit tag.
    A256Gcm,
}

impl SymmetricAlgorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SymmetricAlgorithm::A256Gcm => "A256GCM",
        }
    }

    /// Parses an `enc` label, rejecting anything unrecognized.
    pub fn parse(label: &str) -> CryptoResult<Self> {
        match label {
            "A256GCM" => Ok(SymmetricAlgorithm::A256Gcm),
            other => Err(CryptoError::UnsupportedAlgorithm {
                field: "enc",
                value: other.to_string(),
            }),
        }
    }

    /// Nonce length the cipher requires, in bytes.
    pub const fn nonce_size(&self) -> usize {
        match self {
            SymmetricAlgorithm::A256Gcm => crate::cipher::NONCE_SIZE,
        }
    }
}
