//! In-memory password vault and its sealed form.

use crate::entry::PasswordEntry;
use crate::error::{VaultError, VaultResult};
use crate::password::{generate_password_with, PasswordPolicy};
use rand::rngs::OsRng;
use ysnp_crypto::{EnvelopeCodec, RsaPrivateKey, RsaPublicKey};
use ysnp_types::SecureRandom;
use zeroize::Zeroizing;

/// Ordered collection of password entries with unique names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordVault {
    entries: Vec<PasswordEntry>,
}

impl PasswordVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PasswordEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&PasswordEntry> {
        let name = name.trim();
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn add(&mut self, entry: PasswordEntry) -> VaultResult<()> {
        entry.validate()?;
        if self.get(entry.name()).is_some() {
            return Err(VaultError::DuplicateEntry(entry.name().to_string()));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Generates a password under `policy` and stores it as `name`.
    pub fn generate(&mut self, name: &str, policy: &PasswordPolicy) -> VaultResult<&PasswordEntry> {
        self.generate_with(&mut OsRng, name, policy)
    }

    pub fn generate_with<R: SecureRandom>(
        &mut self,
        rng: &mut R,
        name: &str,
        policy: &PasswordPolicy,
    ) -> VaultResult<&PasswordEntry> {
        let password = generate_password_with(rng, policy)?;
        self.add(PasswordEntry::new(name, &password)?)?;
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn remove(&mut self, name: &str) -> VaultResult<PasswordEntry> {
        let name = name.trim();
        let index = self
            .entries
            .iter()
            .position(|e| e.name() == name)
            .ok_or_else(|| VaultError::EntryNotFound(name.to_string()))?;
        Ok(self.entries.remove(index))
    }

    /// Serializes entries as JSON, one object per line.
    pub fn to_json_lines(&self) -> VaultResult<Zeroizing<Vec<u8>>> {
        let mut out = Zeroizing::new(Vec::new());
        for entry in &self.entries {
            serde_json::to_writer(&mut *out, entry)
                .map_err(|e| VaultError::Serialization(e.to_string()))?;
            out.push(b'\n');
        }
        Ok(out)
    }

    /// Parses a whitespace-separated sequence of JSON entries.
    ///
    /// Accepts both one-per-line output and indented objects written back
    /// to back. Append-only files may repeat a name; the last record wins
    /// and keeps the position of the first.
    pub fn from_json_lines(bytes: &[u8]) -> VaultResult<Self> {
        let mut vault = Self::new();
        let stream = serde_json::Deserializer::from_slice(bytes).into_iter::<PasswordEntry>();
        for entry in stream {
            let entry = entry.map_err(|e| VaultError::MalformedContents(e.to_string()))?;
            entry.validate()?;
            match vault.entries.iter().position(|e| e.name() == entry.name()) {
                Some(index) => vault.entries[index] = entry,
                None => vault.entries.push(entry),
            }
        }
        Ok(vault)
    }

    /// Seals the whole vault into a single envelope for `public_key`.
    pub fn seal(&self, codec: &EnvelopeCodec, public_key: &RsaPublicKey) -> VaultResult<Vec<u8>> {
        let plaintext = self.to_json_lines()?;
        codec.encrypt(public_key, &plaintext).map_err(VaultError::Seal)
    }

    /// Opens a vault sealed by [`PasswordVault::seal`].
    pub fn open(
        codec: &EnvelopeCodec,
        private_key: &RsaPrivateKey,
        envelope: &[u8],
    ) -> VaultResult<Self> {
        let plaintext = Zeroizing::new(codec.decrypt(private_key, envelope).map_err(VaultError::Open)?);
        Self::from_json_lines(&plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ysnp_types::TestRng;

    #[test]
    fn duplicate_names_rejected() {
        let mut vault = PasswordVault::new();
        vault.add(PasswordEntry::new("mail", "a").unwrap()).unwrap();
        let err = vault.add(PasswordEntry::new(" mail ", "b").unwrap()).unwrap_err();
        assert!(matches!(err, VaultError::DuplicateEntry(name) if name == "mail"));
        assert_eq!(vault.len(), 1);
    }

    #[test]
    fn generate_stores_entry() {
        let mut vault = PasswordVault::new();
        let policy = PasswordPolicy::new(16, true);
        let entry = vault
            .generate_with(&mut TestRng::from_seed(9), "github", &policy)
            .unwrap();
        assert_eq!(entry.name(), "github");
        assert_eq!(entry.pass().len(), 16);
        assert_eq!(vault.get("github").unwrap().pass().len(), 16);
    }

    #[test]
    fn remove_returns_entry() {
        let mut vault = PasswordVault::new();
        vault.add(PasswordEntry::new("a", "1").unwrap()).unwrap();
        vault.add(PasswordEntry::new("b", "2").unwrap()).unwrap();

        let removed = vault.remove("a").unwrap();
        assert_eq!(removed.pass(), "1");
        assert_eq!(vault.len(), 1);
        assert!(matches!(vault.remove("a"), Err(VaultError::EntryNotFound(_))));
    }

    #[test]
    fn json_lines_roundtrip() {
        let mut vault = PasswordVault::new();
        vault.add(PasswordEntry::new("a", "1").unwrap()).unwrap();
        vault.add(PasswordEntry::new("b", "2").unwrap()).unwrap();

        let bytes = vault.to_json_lines().unwrap();
        assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 2);
        assert_eq!(PasswordVault::from_json_lines(&bytes).unwrap(), vault);
    }

    #[test]
    fn indented_concatenated_objects_parse() {
        let text = "{\n  \"name\": \"a\",\n  \"pass\": \"1\",\n  \"time\": \"2025-01-01 00:00:00\"\n}\n\
                    {\n  \"name\": \"b\",\n  \"pass\": \"2\",\n  \"time\": \"2025-01-01 00:00:01\"\n}\n";
        let vault = PasswordVault::from_json_lines(text.as_bytes()).unwrap();
        assert_eq!(vault.len(), 2);
        assert_eq!(vault.get("b").unwrap().pass(), "2");
    }

    #[test]
    fn padded_legacy_name_is_reachable() {
        let mut vault =
            PasswordVault::from_json_lines(b"{\"name\":\" mail \",\"pass\":\"1\",\"time\":\"t\"}\n")
                .unwrap();
        assert_eq!(vault.get("mail").unwrap().pass(), "1");
        assert_eq!(vault.get(" mail ").unwrap().pass(), "1");
        assert_eq!(vault.remove("mail").unwrap().name(), "mail");
        assert!(vault.is_empty());
    }

    #[test]
    fn repeated_name_keeps_last_record() {
        let text = "{\"name\":\"mail\",\"pass\":\"old\",\"time\":\"t1\"}\n\
                    {\"name\":\"bank\",\"pass\":\"b\",\"time\":\"t2\"}\n\
                    {\"name\":\"mail \",\"pass\":\"new\",\"time\":\"t3\"}\n";
        let vault = PasswordVault::from_json_lines(text.as_bytes()).unwrap();
        assert_eq!(vault.len(), 2);
        assert_eq!(vault.entries()[0].name(), "mail");
        assert_eq!(vault.get("mail").unwrap().pass(), "new");
        assert_eq!(vault.get("mail").unwrap().time(), "t3");
    }

    #[test]
    fn blank_stored_name_is_rejected() {
        assert!(matches!(
            PasswordVault::from_json_lines(b"{\"name\":\"  \",\"pass\":\"1\",\"time\":\"t\"}"),
            Err(VaultError::EmptyName)
        ));
    }

    #[test]
    fn empty_input_is_empty_vault() {
        assert!(PasswordVault::from_json_lines(b"").unwrap().is_empty());
        assert!(PasswordVault::from_json_lines(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            PasswordVault::from_json_lines(b"{\"name\": 1}"),
            Err(VaultError::MalformedContents(_))
        ));
    }
}
