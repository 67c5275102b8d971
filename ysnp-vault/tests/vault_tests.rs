mod support;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use ysnp_crypto::{DecryptError, Envelope, EnvelopeCodec};
use ysnp_types::ErrorKind;
use ysnp_vault::{PasswordEntry, PasswordPolicy, PasswordVault, VaultConfig, VaultError, VaultStore};

fn sample_vault() -> PasswordVault {
    let mut vault = PasswordVault::new();
    vault.add(PasswordEntry::new("github", "correct horse battery staple").unwrap()).unwrap();
    vault.add(PasswordEntry::new("bank", "\u{1F512} unicode pass").unwrap()).unwrap();
    vault
}

// ── Seal / open ──

#[test]
fn sealed_vault_opens_with_owner_key() {
    let codec = EnvelopeCodec::default();
    let vault = sample_vault();

    let sealed = vault.seal(&codec, support::owner().public_key()).unwrap();
    let opened = PasswordVault::open(&codec, support::owner().private_key(), &sealed).unwrap();

    assert_eq!(opened, vault);
    assert_eq!(opened.get("github").unwrap().pass(), "correct horse battery staple");
}

#[test]
fn sealed_vault_is_an_envelope_hiding_passwords() {
    let sealed = sample_vault()
        .seal(&EnvelopeCodec::default(), support::owner().public_key())
        .unwrap();

    let envelope = Envelope::from_json(&sealed).unwrap();
    assert_eq!(envelope.alg, "RSA-OAEP-SHA256");
    assert_eq!(envelope.enc, "A256GCM");

    let text = String::from_utf8(sealed).unwrap();
    assert!(!text.contains("github"));
    assert!(!text.contains("correct horse"));
}

#[test]
fn intruder_cannot_open_vault() {
    let codec = EnvelopeCodec::default();
    let sealed = sample_vault().seal(&codec, support::owner().public_key()).unwrap();

    let err = PasswordVault::open(&codec, support::intruder().private_key(), &sealed).unwrap_err();
    assert!(matches!(err, VaultError::Open(DecryptError::Failed)));
    assert_eq!(err.kind(), ErrorKind::CryptoOperation);
    assert_eq!(err.to_string(), "vault decryption failed: decryption failed");
}

#[test]
fn empty_vault_roundtrips() {
    let codec = EnvelopeCodec::default();
    let sealed = PasswordVault::new().seal(&codec, support::owner().public_key()).unwrap();
    let opened = PasswordVault::open(&codec, support::owner().private_key(), &sealed).unwrap();
    assert!(opened.is_empty());
}

// ── Files ──

#[test]
fn store_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("output_encoder.json.enc");
    let store = VaultStore::default();

    let mut vault = sample_vault();
    vault.generate("email", &PasswordPolicy::new(20, true)).unwrap();
    store.save(&path, &vault, support::owner().public_key()).unwrap();

    let loaded = store.load(&path, support::owner().private_key()).unwrap();
    assert_eq!(loaded, vault);
    assert_eq!(loaded.get("email").unwrap().pass().len(), 20);
    assert!(!dir.path().join("output_encoder.json.enc.tmp").exists());
}

#[test]
fn store_save_replaces_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.enc");
    let store = VaultStore::default();
    let owner = support::owner();

    let mut vault = store.load_or_empty(&path, owner.private_key()).unwrap();
    assert!(vault.is_empty());

    vault.add(PasswordEntry::new("first", "1").unwrap()).unwrap();
    store.save(&path, &vault, owner.public_key()).unwrap();

    let mut vault = store.load_or_empty(&path, owner.private_key()).unwrap();
    vault.add(PasswordEntry::new("second", "2").unwrap()).unwrap();
    store.save(&path, &vault, owner.public_key()).unwrap();

    let reloaded = store.load(&path, owner.private_key()).unwrap();
    let names: Vec<&str> = reloaded.entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn store_load_with_wrong_key_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.enc");
    let store = VaultStore::default();
    store.save(&path, &sample_vault(), support::owner().public_key()).unwrap();

    assert!(matches!(
        store.load(&path, support::intruder().private_key()),
        Err(VaultError::Open(DecryptError::Failed))
    ));
}

#[test]
fn store_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = VaultStore::default()
        .load(dir.path().join("missing.enc"), support::owner().private_key())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[cfg(unix)]
#[test]
fn vault_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.enc");
    VaultStore::default()
        .save(&path, &sample_vault(), support::owner().public_key())
        .unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

// ── Config ──

#[test]
fn default_config_values() {
    let config = VaultConfig::default();
    assert_eq!(config.file_mode, 0o600);
    assert_eq!(config.policy, PasswordPolicy::default());
    assert_eq!(config.envelope.oaep_label, "json-envelope-v1");
}

#[test]
fn config_serialization_roundtrip() {
    let config = VaultConfig::with_policy(PasswordPolicy::new(32, true));
    let json = serde_json::to_string(&config).unwrap();
    let deserialized: VaultConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn store_uses_configured_envelope_label() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("labelled.enc");

    let mut config = VaultConfig::default();
    config.envelope.oaep_label = "ysnp-vault-test".into();
    let store = VaultStore::new(config);
    let vault = sample_vault();
    store.save(&path, &vault, support::owner().public_key()).unwrap();

    assert_eq!(store.load(&path, support::owner().private_key()).unwrap(), vault);
    assert!(matches!(
        VaultStore::default().load(&path, support::owner().private_key()),
        Err(VaultError::Open(DecryptError::Failed))
    ));
}
