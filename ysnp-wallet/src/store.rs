//! Wallet files on disk.
//!
//! One read or one write per call. A wallet file is never rewritten in
//! place: saving refuses to replace an existing file.

use crate::config::WalletConfig;
use crate::container::{WalletFile, WalletMetadata};
use crate::error::{WalletError, WalletResult};
use crate::keypair::WalletKeyPair;
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

/// Reads and writes wallet containers.
#[derive(Clone, Debug, Default)]
pub struct WalletStore {
    config: WalletConfig,
}

impl WalletStore {
    pub fn new(config: WalletConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Generates a new keypair and writes it to `path`.
    pub fn create(
        &self,
        path: impl AsRef<Path>,
        wallet_name: &str,
    ) -> WalletResult<(WalletKeyPair, WalletMetadata)> {
        let keypair = WalletKeyPair::generate()?;
        let metadata = self.save(path, &keypair, wallet_name)?;
        Ok((keypair, metadata))
    }

    /// Writes `keypair` to a new file at `path`.
    ///
    /// Fails with [`WalletError::AlreadyExists`] rather than overwrite.
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        keypair: &WalletKeyPair,
        wallet_name: &str,
    ) -> WalletResult<WalletMetadata> {
        let path = path.as_ref();
        let file = WalletFile::from_keypair(keypair, wallet_name, Utc::now())?;
        let metadata = file.metadata()?;
        let bytes = Zeroizing::new(file.to_json()?);

        self.write_exclusive(path, |handle| {
            handle.write_all(&bytes)?;
            handle.sync_all()
        })?;

        info!(
            "wallet '{}' written to {} ({})",
            metadata.name,
            path.display(),
            metadata.algorithm.as_str()
        );
        Ok(metadata)
    }

    /// Reads and decodes the wallet at `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> WalletResult<(WalletKeyPair, WalletMetadata)> {
        let path = path.as_ref();
        let bytes = Zeroizing::new(fs::read(path)?);

        let loaded = WalletFile::from_json(&bytes).and_then(|file| file.to_keypair());
        match &loaded {
            Ok((_, metadata)) => debug!("loaded wallet '{}' from {}", metadata.name, path.display()),
            Err(e) => warn!("rejected wallet file {}: {e}", path.display()),
        }
        loaded
    }

    /// Creates `path` exclusively and runs `write` on it. A file left
    /// partially written is removed so a later save can retry.
    fn write_exclusive(
        &self,
        path: &Path,
        write: impl FnOnce(&mut File) -> io::Result<()>,
    ) -> WalletResult<()> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.config.file_mode);
        }

        let mut handle = options.open(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => WalletError::AlreadyExists(path.to_path_buf()),
            _ => WalletError::Io(e),
        })?;

        if let Err(e) = write(&mut handle) {
            drop(handle);
            let _ = fs::remove_file(path);
            warn!("failed to write wallet {}: {e}", path.display());
            return Err(WalletError::Io(e));
        }
        Ok(())
    }
}
