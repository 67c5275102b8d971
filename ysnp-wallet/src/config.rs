//! Wallet store configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`WalletStore`](crate::WalletStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Unix permission bits for newly written wallet files.
    /// Ignored on platforms without Unix permissions.
    pub file_mode: u32,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self { file_mode: 0o600 }
    }
}
