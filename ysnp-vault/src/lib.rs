//! Password vault for YSNP.
//!
//! Generates passwords, keeps them as named entries, and persists the whole
//! vault as a single envelope sealed to a wallet's public key. Opening the
//! vault file requires the wallet's private key.
//!
//! The plaintext inside the envelope is a sequence of JSON objects, one entry
//! per line:
//!
//! ```text
//! {"id":"…","name":"github","pass":"…","time":"2025-01-01 12:00:00"}
//! ```

pub mod config;
pub mod entry;
mod error;
pub mod password;
pub mod store;
pub mod vault;

pub use config::VaultConfig;
pub use entry::{PasswordEntry, ENTRY_TIME_FORMAT};
pub use error::{VaultError, VaultResult};
pub use password::{generate_password, generate_password_with, PasswordPolicy, SYMBOLS};
pub use store::VaultStore;
pub use vault::PasswordVault;
