use std::fmt;

/// Broad classification of a failure.
///
/// Each crate keeps its own rich error enum; `kind()` on those enums maps
/// every variant onto one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed document, unsupported version or label, wrong nonce length.
    InputValidation,
    /// Key wrap/unwrap, AEAD seal/open, or key generation failed.
    CryptoOperation,
    /// The secure random source could not produce bytes.
    RandomSource,
    /// Base64 or key-structure (DER) decoding failed.
    Encoding,
    /// A decoded key belongs to a different algorithm family.
    AlgorithmMismatch,
    /// Reading or writing a file failed.
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InputValidation => "input_validation",
            ErrorKind::CryptoOperation => "crypto_operation",
            ErrorKind::RandomSource => "random_source",
            ErrorKind::Encoding => "encoding",
            ErrorKind::AlgorithmMismatch => "algorithm_mismatch",
            ErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
