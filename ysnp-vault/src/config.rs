//! Vault configuration.

use crate::password::PasswordPolicy;
use serde::{Deserialize, Serialize};
use ysnp_crypto::EnvelopeConfig;

/// Configuration for [`VaultStore`](crate::VaultStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Envelope settings used to seal and open the vault file.
    pub envelope: EnvelopeConfig,

    /// Default policy for generated passwords.
    pub policy: PasswordPolicy,

    /// Unix permission bits for the vault file.
    pub file_mode: u32,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            envelope: EnvelopeConfig::default(),
            policy: PasswordPolicy::default(),
            file_mode: 0o600,
        }
    }
}

impl VaultConfig {
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}
