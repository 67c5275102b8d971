//! RSA-OAEP wrapping of the per-envelope data key.

use crate::cipher::DataKey;
use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use ysnp_types::SecureRandom;
use zeroize::Zeroizing;

/// OAEP padding with SHA-256 for both the label hash and MGF1.
fn padding(label: &str) -> Oaep {
    Oaep::new_with_label::<Sha256, _>(label)
}

pub(crate) fn wrap_key<R: SecureRandom>(
    rng: &mut R,
    public_key: &RsaPublicKey,
    key: &DataKey,
    label: &str,
) -> CryptoResult<Vec<u8>> {
    public_key
        .encrypt(rng, padding(label), key.as_bytes())
        .map_err(|e| CryptoError::KeyWrap(e.to_string()))
}

/// Recovers the data key. Every failure is reported as the same
/// [`CryptoError::KeyUnwrap`], whatever the underlying cause.
pub(crate) fn unwrap_key(
    private_key: &RsaPrivateKey,
    wrapped: &[u8],
    label: &str,
) -> CryptoResult<DataKey> {
    let key = private_key
        .decrypt_blinded(&mut OsRng, padding(label), wrapped)
        .map_err(|_| CryptoError::KeyUnwrap)?;
    let key = Zeroizing::new(key);
    DataKey::from_slice(&key)
}
