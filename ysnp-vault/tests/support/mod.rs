//! Shared wallets for vault integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;
use ysnp_wallet::WalletKeyPair;

static OWNER: OnceLock<WalletKeyPair> = OnceLock::new();
static INTRUDER: OnceLock<WalletKeyPair> = OnceLock::new();

pub fn owner() -> &'static WalletKeyPair {
    OWNER.get_or_init(|| WalletKeyPair::generate().expect("key generation must succeed"))
}

pub fn intruder() -> &'static WalletKeyPair {
    INTRUDER.get_or_init(|| WalletKeyPair::generate().expect("key generation must succeed"))
}
