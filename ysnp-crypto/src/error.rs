//! Envelope codec error types.

use thiserror::Error;
use ysnp_types::ErrorKind;

/// Result type for envelope operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Detailed envelope failure.
///
/// Distinguishes every stage for diagnostics and tests. Anything handed to
/// an untrusted caller on the decrypt path should go through
/// [`DecryptError`] instead.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("unsupported envelope algorithm: {field} = {value:?}")]
    UnsupportedAlgorithm { field: &'static str, value: String },

    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    #[error("invalid base64 in {field}: {reason}")]
    Encoding { field: &'static str, reason: String },

    #[error("key wrap failed: {0}")]
    KeyWrap(String),

    #[error("key unwrap failed")]
    KeyUnwrap,

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed (wrong key or tampered data)")]
    Decryption,

    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CryptoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::MalformedEnvelope(_)
            | CryptoError::UnsupportedAlgorithm { .. }
            | CryptoError::InvalidNonceLength { .. } => ErrorKind::InputValidation,
            CryptoError::Encoding { .. } | CryptoError::Serialization(_) => ErrorKind::Encoding,
            CryptoError::KeyWrap(_)
            | CryptoError::KeyUnwrap
            | CryptoError::Encryption(_)
            | CryptoError::Decryption => ErrorKind::CryptoOperation,
            CryptoError::RandomSource(_) => ErrorKind::RandomSource,
        }
    }
}

/// Decrypt failure as reported across the trust boundary.
///
/// Unwrap and authentication failures collapse into [`DecryptError::Failed`]
/// so a caller cannot tell a wrong key from a tampered envelope.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecryptError {
    #[error("malformed envelope")]
    Malformed,

    #[error("unsupported envelope algorithm")]
    UnsupportedAlgorithm,

    #[error("decryption failed")]
    Failed,
}

impl From<CryptoError> for DecryptError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::MalformedEnvelope(_)
            | CryptoError::InvalidNonceLength { .. }
            | CryptoError::Encoding { .. } => DecryptError::Malformed,
            CryptoError::UnsupportedAlgorithm { .. } => DecryptError::UnsupportedAlgorithm,
            CryptoError::KeyWrap(_)
            | CryptoError::KeyUnwrap
            | CryptoError::Encryption(_)
            | CryptoError::Decryption
            | CryptoError::RandomSource(_)
            | CryptoError::Serialization(_) => DecryptError::Failed,
        }
    }
}
