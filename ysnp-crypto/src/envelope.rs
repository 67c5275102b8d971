//! Hybrid envelope construction and parsing.
//!
//! [`EnvelopeCodec::seal`] produces an [`Envelope`]; [`EnvelopeCodec::open`]
//! consumes one. The byte-oriented `encrypt` / `decrypt` pair wraps those
//! with the JSON framing.

use crate::algorithm::{AsymmetricAlgorithm, SymmetricAlgorithm};
use crate::cipher::{self, DataKey, NONCE_SIZE};
use crate::config::EnvelopeConfig;
use crate::error::{CryptoError, CryptoResult, DecryptError};
use crate::wrap;
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use ysnp_types::SecureRandom;

/// Envelope as it appears on the wire.
///
/// Labels are kept as free text here; [`Envelope::decode`] is where they
/// are checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Key-wrapping scheme, `RSA-OAEP-SHA256`.
    pub alg: String,
    /// Payload cipher, `A256GCM`.
    pub enc: String,
    /// RSA-OAEP-wrapped data key, base64.
    pub enc_key: String,
    /// GCM nonce, base64.
    pub nonce: String,
    /// GCM ciphertext with the tag appended, base64.
    pub ciphertext: String,
}

/// Envelope with validated labels and decoded binary fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedEnvelope {
    pub alg: AsymmetricAlgorithm,
    pub enc: SymmetricAlgorithm,
    pub wrapped_key: Vec<u8>,
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Parses the JSON document. Only structure is checked here.
    pub fn from_json(bytes: &[u8]) -> CryptoResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| CryptoError::MalformedEnvelope(e.to_string()))
    }

    pub fn to_json(&self, pretty: bool) -> CryptoResult<Vec<u8>> {
        let result = if pretty {
            serde_json::to_vec_pretty(self)
        } else {
            serde_json::to_vec(self)
        };
        result.map_err(|e| CryptoError::Serialization(e.to_string()))
    }

    /// Validates both labels, then decodes the binary fields.
    ///
    /// Labels are checked before anything is decoded, and the nonce length
    /// is checked before the caller gets a chance to touch any key.
    pub fn decode(&self) -> CryptoResult<DecodedEnvelope> {
        let alg = AsymmetricAlgorithm::parse(&self.alg)?;
        let enc = SymmetricAlgorithm::parse(&self.enc)?;

        let wrapped_key = decode_field("enc_key", &self.enc_key)?;
        let nonce_bytes = decode_field("nonce", &self.nonce)?;
        let ciphertext = decode_field("ciphertext", &self.ciphertext)?;

        if nonce_bytes.len() != enc.nonce_size() {
            return Err(CryptoError::InvalidNonceLength {
                expected: enc.nonce_size(),
                actual: nonce_bytes.len(),
            });
        }
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&nonce_bytes);

        Ok(DecodedEnvelope {
            alg,
            enc,
            wrapped_key,
            nonce,
            ciphertext,
        })
    }
}

impl From<&DecodedEnvelope> for Envelope {
    fn from(decoded: &DecodedEnvelope) -> Self {
        Self {
            alg: decoded.alg.as_str().to_string(),
            enc: decoded.enc.as_str().to_string(),
            enc_key: STANDARD.encode(&decoded.wrapped_key),
            nonce: STANDARD.encode(decoded.nonce),
            ciphertext: STANDARD.encode(&decoded.ciphertext),
        }
    }
}

fn decode_field(field: &'static str, value: &str) -> CryptoResult<Vec<u8>> {
    STANDARD.decode(value).map_err(|e| CryptoError::Encoding {
        field,
        reason: e.to_string(),
    })
}

/// Single-recipient hybrid cipher.
///
/// Holds configuration only; it is cheap to clone and safe to share across
/// threads.
#[derive(Clone, Debug, Default)]
pub struct EnvelopeCodec {
    config: EnvelopeConfig,
}

impl EnvelopeCodec {
    pub fn new(config: EnvelopeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    /// Seals `plaintext` for the holder of `public_key`.
    ///
    /// A fresh data key and nonce are drawn from `rng` on every call, so
    /// sealing the same plaintext twice never yields the same envelope.
    pub fn seal<R: SecureRandom>(
        &self,
        rng: &mut R,
        public_key: &RsaPublicKey,
        plaintext: &[u8],
    ) -> CryptoResult<Envelope> {
        let key = DataKey::random(rng)?;
        let nonce = cipher::random_nonce(rng)?;

        let ciphertext = cipher::seal(&key, &nonce, plaintext)?;
        let wrapped_key = wrap::wrap_key(rng, public_key, &key, &self.config.oaep_label)?;

        Ok(Envelope::from(&DecodedEnvelope {
            alg: AsymmetricAlgorithm::RsaOaepSha256,
            enc: SymmetricAlgorithm::A256Gcm,
            wrapped_key,
            nonce,
            ciphertext,
        }))
    }

    /// Opens an envelope, reporting exactly which stage failed.
    pub fn open(&self, private_key: &RsaPrivateKey, envelope: &Envelope) -> CryptoResult<Vec<u8>> {
        let decoded = envelope.decode()?;

        let key = match (decoded.alg, decoded.enc) {
            (AsymmetricAlgorithm::RsaOaepSha256, SymmetricAlgorithm::A256Gcm) => {
                wrap::unwrap_key(private_key, &decoded.wrapped_key, &self.config.oaep_label)?
            }
        };

        cipher::open(&key, &decoded.nonce, &decoded.ciphertext)
    }

    /// Encrypts `plaintext` into a serialized envelope using the OS random source.
    pub fn encrypt(&self, public_key: &RsaPublicKey, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
        self.encrypt_with_rng(&mut OsRng, public_key, plaintext)
    }

    pub fn encrypt_with_rng<R: SecureRandom>(
        &self,
        rng: &mut R,
        public_key: &RsaPublicKey,
        plaintext: &[u8],
    ) -> CryptoResult<Vec<u8>> {
        self.seal(rng, public_key, plaintext)?.to_json(self.config.pretty)
    }

    /// Decrypts a serialized envelope with the full error detail.
    ///
    /// Meant for diagnostics and tests; use [`EnvelopeCodec::decrypt`] when
    /// the error is shown to whoever supplied the envelope.
    pub fn decrypt_detailed(&self, private_key: &RsaPrivateKey, envelope: &[u8]) -> CryptoResult<Vec<u8>> {
        let envelope = Envelope::from_json(envelope)?;
        self.open(private_key, &envelope)
    }

    /// Decrypts a serialized envelope.
    ///
    /// Returns the exact plaintext or an error; a wrong key and a tampered
    /// envelope both surface as [`DecryptError::Failed`].
    pub fn decrypt(&self, private_key: &RsaPrivateKey, envelope: &[u8]) -> Result<Vec<u8>, DecryptError> {
        self.decrypt_detailed(private_key, envelope)
            .map_err(DecryptError::from)
    }
}

/// Encrypts with the default configuration.
pub fn encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
    EnvelopeCodec::default().encrypt(public_key, plaintext)
}

/// Decrypts with the default configuration.
pub fn decrypt(private_key: &RsaPrivateKey, envelope: &[u8]) -> Result<Vec<u8>, DecryptError> {
    EnvelopeCodec::default().decrypt(private_key, envelope)
}
