//! Random password generation.
//!
//! Each character picks a class uniformly (lowercase, uppercase, digits, and
//! optionally symbols), then a character uniformly within that class.

use crate::error::{VaultError, VaultResult};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use ysnp_types::{fill_random, SecureRandom};
use zeroize::Zeroizing;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
/// Characters added when [`PasswordPolicy::symbols`] is set.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_-+={}[/?]";

const MAX_LENGTH: usize = 1024;

/// Shape of a generated password.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub length: usize,
    pub symbols: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 10,
            symbols: false,
        }
    }
}

impl PasswordPolicy {
    pub fn new(length: usize, symbols: bool) -> Self {
        Self { length, symbols }
    }

    pub fn validate(&self) -> VaultResult<()> {
        if self.length == 0 {
            return Err(VaultError::InvalidPolicy("length must be at least 1".to_string()));
        }
        if self.length > MAX_LENGTH {
            return Err(VaultError::InvalidPolicy(format!(
                "length {} exceeds maximum of {MAX_LENGTH}",
                self.length
            )));
        }
        Ok(())
    }

    fn classes(&self) -> &'static [&'static [u8]] {
        if self.symbols {
            &[LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]
        } else {
            &[LOWERCASE, UPPERCASE, DIGITS]
        }
    }
}

/// Generates a password from the operating system's CSPRNG.
pub fn generate_password(policy: &PasswordPolicy) -> VaultResult<Zeroizing<String>> {
    generate_password_with(&mut OsRng, policy)
}

pub fn generate_password_with<R: SecureRandom>(
    rng: &mut R,
    policy: &PasswordPolicy,
) -> VaultResult<Zeroizing<String>> {
    policy.validate()?;

    let classes = policy.classes();
    let mut password = Zeroizing::new(String::with_capacity(policy.length));
    for _ in 0..policy.length {
        let class = classes[uniform_index(rng, classes.len())?];
        let ch = class[uniform_index(rng, class.len())?];
        password.push(char::from(ch));
    }
    Ok(password)
}

/// Unbiased index in `0..n` by rejection sampling.
fn uniform_index<R: SecureRandom>(rng: &mut R, n: usize) -> VaultResult<usize> {
    let n = n as u32;
    let zone = u32::MAX - (u32::MAX % n);
    loop {
        let mut buf = [0u8; 4];
        fill_random(rng, &mut buf).map_err(|e| VaultError::RandomSource(e.to_string()))?;
        let value = u32::from_le_bytes(buf);
        if value < zone {
            return Ok((value % n) as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ysnp_types::{FailingRng, TestRng};

    #[test]
    fn uniform_index_stays_in_range() {
        let mut rng = TestRng::from_seed(5);
        for n in [1, 2, 3, 10, 26] {
            for _ in 0..200 {
                assert!(uniform_index(&mut rng, n).unwrap() < n);
            }
        }
    }

    #[test]
    fn classes_without_symbols() {
        assert_eq!(PasswordPolicy::new(8, false).classes().len(), 3);
        assert_eq!(PasswordPolicy::new(8, true).classes().len(), 4);
    }

    #[test]
    fn failing_source_is_reported() {
        let err = generate_password_with(&mut FailingRng, &PasswordPolicy::default()).unwrap_err();
        assert!(matches!(err, VaultError::RandomSource(_)));
    }
}
