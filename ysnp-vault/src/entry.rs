//! A named password stored in the vault.

use crate::error::{VaultError, VaultResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// `strftime` layout of [`PasswordEntry::time`], always UTC.
pub const ENTRY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One stored password. Zeroized on drop; `Debug` hides the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct PasswordEntry {
    /// Entries written before ids existed get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    #[zeroize(skip)]
    id: Uuid,
    #[serde(deserialize_with = "trimmed")]
    name: String,
    pass: String,
    time: String,
}

impl PasswordEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(name: &str, pass: &str) -> VaultResult<Self> {
        Self::new_at(name, pass, Utc::now())
    }

    /// Creates an entry with an explicit timestamp. The name is trimmed and
    /// must not be empty.
    pub fn new_at(name: &str, pass: &str, at: DateTime<Utc>) -> VaultResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VaultError::EmptyName);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            pass: pass.to_string(),
            time: at.format(ENTRY_TIME_FORMAT).to_string(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pass(&self) -> &str {
        &self.pass
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub(crate) fn validate(&self) -> VaultResult<()> {
        if self.name.trim().is_empty() {
            return Err(VaultError::EmptyName);
        }
        Ok(())
    }
}

/// Older files were written without trimming names.
fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(name.trim().to_string())
}

impl fmt::Debug for PasswordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("pass", &"[redacted]")
            .field("time", &self.time)
            .finish()
    }
}
