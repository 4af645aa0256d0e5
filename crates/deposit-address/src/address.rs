//! P2WPKH address generation.

use bitcoin::{Address, CompressedPublicKey, Network};

use crate::segwit_tweak::DepositPublicKey;

/// Generate the native segwit (P2WPKH) address of a public key.
#[must_use]
pub fn p2wpkh_address(pubkey: &DepositPublicKey, network: Network) -> Address {
    Address::p2wpkh(&CompressedPublicKey(*pubkey.inner()), network)
}

impl DepositPublicKey {
    /// Generate this key's P2WPKH address.
    pub fn p2wpkh_address(&self, network: Network) -> Address {
        p2wpkh_address(self, network)
    }
}
