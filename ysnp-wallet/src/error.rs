//! Wallet error types.

use std::path::PathBuf;
use thiserror::Error;
use ysnp_types::ErrorKind;

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Errors that can occur generating, encoding, or loading a wallet.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("wallet I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("wallet already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("malformed wallet document: {0}")]
    MalformedDocument(String),

    #[error("unsupported wallet version: {0}")]
    UnsupportedVersion(i64),

    #[error("unsupported wallet algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("invalid base64 in {field}: {reason}")]
    Encoding { field: &'static str, reason: String },

    #[error("invalid key encoding in {field}: {reason}")]
    KeyDecoding { field: &'static str, reason: String },

    #[error("key encoding failed: {0}")]
    KeyEncoding(String),

    #[error("algorithm mismatch in {field}: expected {expected}, found {found}")]
    AlgorithmMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("invalid key size: expected {expected} bits, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("public key does not match private key")]
    KeyMismatch,

    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl WalletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::Io(_) | WalletError::AlreadyExists(_) => ErrorKind::Io,
            WalletError::MalformedDocument(_)
            | WalletError::UnsupportedVersion(_)
            | WalletError::UnsupportedAlgorithm(_)
            | WalletError::InvalidKeySize { .. }
            | WalletError::KeyMismatch => ErrorKind::InputValidation,
            WalletError::Encoding { .. }
            | WalletError::KeyDecoding { .. }
            | WalletError::KeyEncoding(_)
            | WalletError::Serialization(_) => ErrorKind::Encoding,
            WalletError::AlgorithmMismatch { .. } => ErrorKind::AlgorithmMismatch,
            WalletError::KeyGeneration(_) => ErrorKind::CryptoOperation,
            WalletError::RandomSource(_) => ErrorKind::RandomSource,
        }
    }
}
