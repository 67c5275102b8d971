//! Envelope codec for YSNP.
//!
//! Encrypts arbitrary plaintext for a single recipient using a hybrid scheme:
//! - AES-256-GCM seals the payload under a fresh random data key and nonce
//! - RSA-OAEP (SHA-256, MGF1-SHA-256, fixed label) wraps the data key under
//!   the recipient's public key
//!
//! The result is a small JSON document:
//!
//! ```json
//! {
//!   "alg": "RSA-OAEP-SHA256",
//!   "enc": "A256GCM",
//!   "enc_key": "<base64 wrapped key>",
//!   "nonce": "<base64 12-byte nonce>",
//!   "ciphertext": "<base64 ciphertext || tag>"
//! }
//! ```
//!
//! Every call is stateless. Nothing is cached between calls and no key
//! material outlives the call that created it.

mod algorithm;
mod cipher;
pub mod config;
pub mod envelope;
mod error;
mod wrap;

pub use algorithm::{AsymmetricAlgorithm, SymmetricAlgorithm};
pub use cipher::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
pub use config::{EnvelopeConfig, DEFAULT_OAEP_LABEL};
pub use envelope::{decrypt, encrypt, DecodedEnvelope, Envelope, EnvelopeCodec};
pub use error::{CryptoError, CryptoResult, DecryptError};

// Key types callers pass in, re-exported so they need not depend on `rsa`.
pub use rsa::{RsaPrivateKey, RsaPublicKey};
