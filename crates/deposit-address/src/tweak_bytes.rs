//! Chain-specific tweak bytes.
//!
//! The tweak bytes bind a deposit address to its destination: the target chain, the bridge
//! contract on that chain, the wallet that will claim the deposit and the auxiliary data. Each
//! chain type has its own fixed layout, prefixed by the aux data and a one-byte chain type tag,
//! and hashed under the `"LombardDepositAddr"` tag.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    errors::{DepositAddressError, ExpectedLen},
    tagged_hash::deposit_hasher,
    types::{AuxData, ChainId, EvmAddress, TweakBytes, EVM_ADDRESS_SIZE},
};

/// Chain type tag for EVM chains.
pub const EVM_TAG: u8 = 0;

/// The kind of chain a deposit is destined for.
///
/// Every variant owns a distinct wire tag and serialization layout, see
/// [`calc_tweak_bytes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    /// An EVM chain. Addresses are 20 bytes.
    Evm,
}

impl ChainType {
    /// Returns the single-byte tag absorbed into the tweak hash.
    pub const fn tag(&self) -> u8 {
        match self {
            Self::Evm => EVM_TAG,
        }
    }

    /// Returns the width of a native address on this chain.
    pub const fn address_size(&self) -> usize {
        match self {
            Self::Evm => EVM_ADDRESS_SIZE,
        }
    }

    /// Returns the lowercase name of this chain type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Evm => "evm",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = DepositAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "evm" => Ok(Self::Evm),
            other => Err(DepositAddressError::UnsupportedChainType(other.to_owned())),
        }
    }
}

impl TryFrom<u8> for ChainType {
    type Error = DepositAddressError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            EVM_TAG => Ok(Self::Evm),
            other => Err(DepositAddressError::UnsupportedChainType(format!(
                "tag {other}"
            ))),
        }
    }
}

/// Computes the tweak bytes for a deposit, dispatching on `chain_type`.
///
/// All fields are raw bytes and are length-checked against the layout of `chain_type`, the bridge
/// address first, then the wallet address, aux data and chain id. The chain id must already be 32
/// bytes, see [`ChainId::from_be_slice`] to pad a narrower value.
pub fn calc_tweak_bytes(
    chain_type: ChainType,
    chain_id: &[u8],
    bridge_address: &[u8],
    wallet_address: &[u8],
    aux_data: &[u8],
) -> Result<TweakBytes, DepositAddressError> {
    match chain_type {
        ChainType::Evm => {
            let bridge = EvmAddress::try_from(bridge_address).map_err(|_| {
                length_error("bridge address", chain_type, bridge_address.len())
            })?;
            let wallet = EvmAddress::try_from(wallet_address).map_err(|_| {
                length_error("wallet address", chain_type, wallet_address.len())
            })?;
            let aux_data = AuxData::try_from(aux_data)?;
            let chain_id = ChainId::try_from(chain_id)?;

            Ok(evm_deposit_tweak(&bridge, &wallet, &chain_id, &aux_data))
        }
    }
}

fn length_error(field: &'static str, chain_type: ChainType, actual: usize) -> DepositAddressError {
    DepositAddressError::InvalidLength {
        field,
        expected: ExpectedLen::Exactly(chain_type.address_size()),
        actual,
    }
}

/// Computes the tweak bytes for an EVM deposit:
///
/// ```text
/// taggedHash("LombardDepositAddr", aux_data || 0x00 || chain_id || bridge || wallet)
/// ```
pub fn evm_deposit_tweak(
    bridge: &EvmAddress,
    wallet: &EvmAddress,
    chain_id: &ChainId,
    aux_data: &AuxData,
) -> TweakBytes {
    let digest = deposit_hasher()
        .chain(aux_data)
        .chain([ChainType::Evm.tag()])
        .chain(chain_id)
        .chain(bridge)
        .chain(wallet)
        .finalize();

    trace!(
        %bridge,
        %wallet,
        %chain_id,
        tweak = %hex::encode(digest),
        "computed evm deposit tweak"
    );

    TweakBytes::new(digest)
}
