//! Vault error types.

use thiserror::Error;
use ysnp_crypto::{CryptoError, DecryptError};
use ysnp_types::ErrorKind;

/// Result type for vault operations.
pub type VaultResult<T> = Result<T, VaultError>;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("invalid password policy: {0}")]
    InvalidPolicy(String),

    #[error("entry name cannot be empty")]
    EmptyName,

    #[error("entry already exists: {0}")]
    DuplicateEntry(String),

    #[error("entry not found: {0}")]
    EntryNotFound(String),

    #[error("malformed vault contents: {0}")]
    MalformedContents(String),

    #[error("vault encryption failed: {0}")]
    Seal(#[source] CryptoError),

    #[error("vault decryption failed: {0}")]
    Open(#[source] DecryptError),

    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("vault I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl VaultError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VaultError::InvalidPolicy(_)
            | VaultError::EmptyName
            | VaultError::DuplicateEntry(_)
            | VaultError::EntryNotFound(_)
            | VaultError::MalformedContents(_) => ErrorKind::InputValidation,
            VaultError::Seal(e) => e.kind(),
            VaultError::Open(DecryptError::Failed) => ErrorKind::CryptoOperation,
            VaultError::Open(_) => ErrorKind::InputValidation,
            VaultError::RandomSource(_) => ErrorKind::RandomSource,
            VaultError::Io(_) => ErrorKind::Io,
            VaultError::Serialization(_) => ErrorKind::Encoding,
        }
    }
}
