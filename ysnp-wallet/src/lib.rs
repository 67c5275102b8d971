//! Wallet keypair store for YSNP.
//!
//! A wallet is an RSA-2048 keypair persisted as a flat JSON container:
//!
//! ```json
//! {
//!   "version": 1,
//!   "wallet_name": "personal",
//!   "algorithm": "RSA-2048",
//!   "created_at": "2025-01-01T00:00:00Z",
//!   "public_key_der_b64": "<base64 SPKI DER>",
//!   "private_key_der_b64": "<base64 PKCS#8 DER>"
//! }
//! ```
//!
//! This crate knows nothing about envelopes. Callers load a wallet here and
//! hand its keys to the envelope codec.

pub mod config;
pub mod container;
mod error;
pub mod keypair;
pub mod store;

pub use config::WalletConfig;
pub use container::{
    deserialize_wallet, serialize_wallet, serialize_wallet_at, ContainerVersion, KeyAlgorithm,
    WalletFile, WalletMetadata, CONTAINER_VERSION,
};
pub use error::{WalletError, WalletResult};
pub use keypair::{WalletKeyPair, KEY_BITS};
pub use store::WalletStore;
