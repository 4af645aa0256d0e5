//! Deposit address derivation from a single master key.
//!
//! [`DepositTweaker`] binds one master public key and derives tweaked keys and addresses from
//! tweak bytes. [`derive_address_for_chain`] runs the whole pipeline for callers that hold the
//! raw binding fields instead.

use std::str::FromStr;

use bitcoin::{Address, Network};
use tracing::{debug, instrument};

use crate::{
    address::p2wpkh_address,
    errors::DepositAddressError,
    segwit_tweak::{tweak_public_key, DepositPublicKey},
    tweak_bytes::{calc_tweak_bytes, evm_deposit_tweak, ChainType},
    types::{AuxData, ChainId, EvmAddress},
};

/// Derives deposit keys and addresses from a fixed master public key.
///
/// Holds nothing but the master key, so a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositTweaker {
    public_key: DepositPublicKey,
}

impl DepositTweaker {
    /// Creates a tweaker for an already parsed master key.
    pub const fn new(public_key: DepositPublicKey) -> Self {
        Self { public_key }
    }

    /// Creates a tweaker from a SEC1 encoded master key.
    pub fn from_slice(public_key: &[u8]) -> Result<Self, DepositAddressError> {
        let public_key = DepositPublicKey::from_slice(public_key)?;
        debug!(master = %public_key, "loaded master public key");

        Ok(Self::new(public_key))
    }

    /// Returns the master public key.
    pub const fn public_key(&self) -> &DepositPublicKey {
        &self.public_key
    }

    /// Derives the deposit public key for a 32-byte tweak.
    pub fn derive_public_key(&self, tweak: &[u8]) -> Result<DepositPublicKey, DepositAddressError> {
        tweak_public_key(&self.public_key, tweak)
    }

    /// Derives the deposit address for a 32-byte tweak.
    pub fn derive_address(
        &self,
        tweak: &[u8],
        network: Network,
    ) -> Result<Address, DepositAddressError> {
        self.derive_segwit(tweak, network).map(|(address, _)| address)
    }

    /// Derives both the deposit address and the public key behind it.
    pub fn derive_segwit(
        &self,
        tweak: &[u8],
        network: Network,
    ) -> Result<(Address, DepositPublicKey), DepositAddressError> {
        let tweaked = self.derive_public_key(tweak)?;
        let address = p2wpkh_address(&tweaked, network);

        debug!(%address, %network, "derived deposit address");

        Ok((address, tweaked))
    }
}

impl From<DepositPublicKey> for DepositTweaker {
    fn from(public_key: DepositPublicKey) -> Self {
        Self::new(public_key)
    }
}

impl FromStr for DepositTweaker {
    type Err = DepositAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

/// Derives the deposit address for a chain from raw binding fields.
///
/// Composes [`calc_tweak_bytes`], [`tweak_public_key`] and [`p2wpkh_address`].
#[instrument(skip_all, fields(chain_type = %chain_type, network = %network), err)]
pub fn derive_address_for_chain(
    chain_type: ChainType,
    chain_id: &[u8],
    bridge_address: &[u8],
    wallet_address: &[u8],
    aux_data: &[u8],
    master_key: &DepositPublicKey,
    network: Network,
) -> Result<Address, DepositAddressError> {
    let tweak = calc_tweak_bytes(
        chain_type,
        chain_id,
        bridge_address,
        wallet_address,
        aux_data,
    )?;

    DepositTweaker::new(*master_key).derive_address(tweak.as_bytes(), network)
}

/// Computes the deposit public key for an EVM deposit.
pub fn evm_deposit_segwit_pubkey(
    master_key: &DepositPublicKey,
    bridge: &EvmAddress,
    wallet: &EvmAddress,
    chain_id: &ChainId,
    aux_data: &AuxData,
) -> Result<DepositPublicKey, DepositAddressError> {
    let tweak = evm_deposit_tweak(bridge, wallet, chain_id, aux_data);
    tweak_public_key(master_key, tweak.as_bytes())
}

/// Computes the deposit address for an EVM deposit.
pub fn evm_deposit_segwit_addr(
    master_key: &DepositPublicKey,
    bridge: &EvmAddress,
    wallet: &EvmAddress,
    chain_id: &ChainId,
    aux_data: &AuxData,
    network: Network,
) -> Result<Address, DepositAddressError> {
    let tweaked = evm_deposit_segwit_pubkey(master_key, bridge, wallet, chain_id, aux_data)?;
    Ok(p2wpkh_address(&tweaked, network))
}
