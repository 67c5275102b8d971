//! Sealed vault files on disk.
//!
//! Unlike wallet files, a vault file is rewritten on every save. The new
//! contents go to a sibling temp file that is renamed over the old one, so
//! readers see either the previous vault or the new one.

use crate::config::VaultConfig;
use crate::error::{VaultError, VaultResult};
use crate::vault::PasswordVault;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use ysnp_crypto::{EnvelopeCodec, RsaPrivateKey, RsaPublicKey};

/// Saves and loads envelope-sealed vault files.
#[derive(Clone, Debug, Default)]
pub struct VaultStore {
    config: VaultConfig,
    codec: EnvelopeCodec,
}

impl VaultStore {
    pub fn new(config: VaultConfig) -> Self {
        let codec = EnvelopeCodec::new(config.envelope.clone());
        Self { config, codec }
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    pub fn codec(&self) -> &EnvelopeCodec {
        &self.codec
    }

    /// Seals `vault` for `public_key` and replaces the file at `path`.
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        vault: &PasswordVault,
        public_key: &RsaPublicKey,
    ) -> VaultResult<()> {
        let path = path.as_ref();
        let sealed = vault.seal(&self.codec, public_key)?;
        let tmp = temp_path(path)?;
        // A leftover from an interrupted save may carry a wider mode.
        if tmp.exists() {
            fs::remove_file(&tmp)?;
        }

        if let Err(e) = self.write_new(&tmp, &sealed).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            warn!("failed to save vault to {}: {e}", path.display());
            return Err(VaultError::Io(e));
        }

        info!("vault saved to {} ({} entries)", path.display(), vault.len());
        Ok(())
    }

    /// Reads and opens the vault at `path`.
    pub fn load(&self, path: impl AsRef<Path>, private_key: &RsaPrivateKey) -> VaultResult<PasswordVault> {
        let path = path.as_ref();
        let sealed = fs::read(path)?;

        match PasswordVault::open(&self.codec, private_key, &sealed) {
            Ok(vault) => {
                debug!("vault loaded from {} ({} entries)", path.display(), vault.len());
                Ok(vault)
            }
            Err(e) => {
                warn!("failed to open vault {}: {e}", path.display());
                Err(e)
            }
        }
    }

    /// Like [`VaultStore::load`], but a missing file is an empty vault.
    pub fn load_or_empty(
        &self,
        path: impl AsRef<Path>,
        private_key: &RsaPrivateKey,
    ) -> VaultResult<PasswordVault> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no vault at {}, starting empty", path.display());
            return Ok(PasswordVault::new());
        }
        self.load(path, private_key)
    }

    fn write_new(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.config.file_mode);
        }

        let mut file = options.open(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }
}

fn temp_path(path: &Path) -> VaultResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        VaultError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("vault path has no file name: {}", path.display()),
        ))
    })?;
    let mut tmp = name.to_os_string();
    tmp.push(".tmp");
    Ok(path.with_file_name(tmp))
}
