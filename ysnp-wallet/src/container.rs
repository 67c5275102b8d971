//! On-disk wallet container.
//!
//! The container is written once when a wallet is created and read on every
//! decrypt. Keys are stored as base64 of their standard DER encodings:
//! PKCS#8 `PrivateKeyInfo` for the private key and X.509
//! `SubjectPublicKeyInfo` for the public key.

use crate::error::{WalletError, WalletResult};
use crate::keypair::{WalletKeyPair, KEY_BITS};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, SecondsFormat, Utc};
use rsa::pkcs8::der::Decode;
use rsa::pkcs8::spki::SubjectPublicKeyInfoRef;
use rsa::pkcs8::{
    DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, ObjectIdentifier,
    PrivateKeyInfo,
};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Container format version written by this crate.
pub const CONTAINER_VERSION: i64 = 1;

/// `rsaEncryption` (PKCS #1), the only key family a wallet may hold.
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Known container versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerVersion {
    V1,
}

impl ContainerVersion {
    pub fn from_wire(version: i64) -> WalletResult<Self> {
        match version {
            1 => Ok(ContainerVersion::V1),
            other => Err(WalletError::UnsupportedVersion(other)),
        }
    }

    pub const fn as_wire(&self) -> i64 {
        match self {
            ContainerVersion::V1 => CONTAINER_VERSION,
        }
    }
}

/// Key algorithm named by the container's `algorithm` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Rsa2048,
}

impl KeyAlgorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa2048 => "RSA-2048",
        }
    }

    pub fn parse(label: &str) -> WalletResult<Self> {
        match label {
            "RSA-2048" => Ok(KeyAlgorithm::Rsa2048),
            other => Err(WalletError::UnsupportedAlgorithm(other.to_string())),
        }
    }

    pub const fn bits(&self) -> usize {
        match self {
            KeyAlgorithm::Rsa2048 => KEY_BITS,
        }
    }
}

/// Descriptive fields of a loaded wallet, returned exactly as stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletMetadata {
    pub name: String,
    pub algorithm: KeyAlgorithm,
    /// RFC 3339 timestamp of the last time the container was serialized.
    pub created_at: String,
}

impl WalletMetadata {
    /// Parses `created_at`, if it is valid RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// Wallet container as it appears on disk.
///
/// Holds the private key in encoded form, so it zeroizes on drop and its
/// `Debug` output omits both keys.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct WalletFile {
    pub version: i64,
    pub wallet_name: String,
    pub algorithm: String,
    pub created_at: String,
    pub public_key_der_b64: String,
    pub private_key_der_b64: String,
}

impl fmt::Debug for WalletFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletFile")
            .field("version", &self.version)
            .field("wallet_name", &self.wallet_name)
            .field("algorithm", &self.algorithm)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

impl WalletFile {
    /// Encodes `keypair` into a version 1 container stamped with `created_at`.
    pub fn from_keypair(
        keypair: &WalletKeyPair,
        wallet_name: &str,
        created_at: DateTime<Utc>,
    ) -> WalletResult<Self> {
        let private_der = keypair
            .private_key()
            .to_pkcs8_der()
            .map_err(|e| WalletError::KeyEncoding(e.to_string()))?;
        let public_der = keypair
            .public_key()
            .to_public_key_der()
            .map_err(|e| WalletError::KeyEncoding(e.to_string()))?;

        Ok(Self {
            version: ContainerVersion::V1.as_wire(),
            wallet_name: wallet_name.to_string(),
            algorithm: KeyAlgorithm::Rsa2048.as_str().to_string(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            public_key_der_b64: STANDARD.encode(public_der.as_bytes()),
            private_key_der_b64: STANDARD.encode(private_der.as_bytes()),
        })
    }

    pub fn from_json(bytes: &[u8]) -> WalletResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| WalletError::MalformedDocument(e.to_string()))
    }

    pub fn to_json(&self) -> WalletResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| WalletError::Serialization(e.to_string()))
    }

    /// Validates the header fields without touching the keys.
    pub fn metadata(&self) -> WalletResult<WalletMetadata> {
        ContainerVersion::from_wire(self.version)?;
        let algorithm = KeyAlgorithm::parse(&self.algorithm)?;

        Ok(WalletMetadata {
            name: self.wallet_name.clone(),
            algorithm,
            created_at: self.created_at.clone(),
        })
    }

    /// Decodes and cross-checks both keys.
    pub fn to_keypair(&self) -> WalletResult<(WalletKeyPair, WalletMetadata)> {
        let metadata = self.metadata()?;

        let private_der = Zeroizing::new(decode_field("private_key_der_b64", &self.private_key_der_b64)?);
        let public_der = decode_field("public_key_der_b64", &self.public_key_der_b64)?;

        let private = decode_private_key(&private_der)?;
        let public = decode_public_key(&public_der)?;

        let actual = private.size() * 8;
        if actual != metadata.algorithm.bits() {
            return Err(WalletError::InvalidKeySize {
                expected: metadata.algorithm.bits(),
                actual,
            });
        }
        if private.to_public_key() != public {
            return Err(WalletError::KeyMismatch);
        }

        Ok((WalletKeyPair::from_private_key(private), metadata))
    }
}

fn decode_field(field: &'static str, value: &str) -> WalletResult<Vec<u8>> {
    STANDARD.decode(value).map_err(|e| WalletError::Encoding {
        field,
        reason: e.to_string(),
    })
}

fn decode_private_key(der: &[u8]) -> WalletResult<RsaPrivateKey> {
    const FIELD: &str = "private_key_der_b64";

    let info = PrivateKeyInfo::from_der(der).map_err(|e| WalletError::KeyDecoding {
        field: FIELD,
        reason: e.to_string(),
    })?;
    if info.algorithm.oid != RSA_ENCRYPTION_OID {
        return Err(WalletError::AlgorithmMismatch {
            field: FIELD,
            expected: "rsaEncryption",
            found: info.algorithm.oid.to_string(),
        });
    }

    RsaPrivateKey::from_pkcs8_der(der).map_err(|e| WalletError::KeyDecoding {
        field: FIELD,
        reason: e.to_string(),
    })
}

fn decode_public_key(der: &[u8]) -> WalletResult<RsaPublicKey> {
    const FIELD: &str = "public_key_der_b64";

    let info = SubjectPublicKeyInfoRef::from_der(der).map_err(|e| WalletError::KeyDecoding {
        field: FIELD,
        reason: e.to_string(),
    })?;
    if info.algorithm.oid != RSA_ENCRYPTION_OID {
        return Err(WalletError::AlgorithmMismatch {
            field: FIELD,
            expected: "rsaEncryption",
            found: info.algorithm.oid.to_string(),
        });
    }

    RsaPublicKey::from_public_key_der(der).map_err(|e| WalletError::KeyDecoding {
        field: FIELD,
        reason: e.to_string(),
    })
}

/// Serializes `keypair` into a container stamped with the current UTC time.
///
/// The timestamp records when the container was written, not when the key
/// was generated; re-serializing the same key yields a new timestamp.
pub fn serialize_wallet(keypair: &WalletKeyPair, wallet_name: &str) -> WalletResult<Vec<u8>> {
    serialize_wallet_at(keypair, wallet_name, Utc::now())
}

/// Serializes with an explicit timestamp. Deterministic for a given input.
pub fn serialize_wallet_at(
    keypair: &WalletKeyPair,
    wallet_name: &str,
    created_at: DateTime<Utc>,
) -> WalletResult<Vec<u8>> {
    WalletFile::from_keypair(keypair, wallet_name, created_at)?.to_json()
}

/// Parses a container and reconstructs its keypair.
pub fn deserialize_wallet(bytes: &[u8]) -> WalletResult<(WalletKeyPair, WalletMetadata)> {
    WalletFile::from_json(bytes)?.to_keypair()
}
