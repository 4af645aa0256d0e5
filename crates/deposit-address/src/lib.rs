//! Deterministic one-time deposit addresses derived from a single master public key.
//!
//! A deposit address is bound to its destination chain, bridge contract, claiming wallet and
//! auxiliary data. Anyone holding the master public key can recompute it; only the holder of the
//! master secret key can spend from it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bitcoin::Network;
//! use deposit_address::{compute_aux_data_v0, derive_address_for_chain, ChainId, ChainType};
//!
//! let aux = compute_aux_data_v0(nonce, &referrer_id)?;
//! let address = derive_address_for_chain(
//!     ChainType::Evm,
//!     ChainId::from(1u64).as_bytes(),
//!     &bridge,
//!     &wallet,
//!     aux.as_bytes(),
//!     &master_key,
//!     Network::Bitcoin,
//! )?;
//! ```
//!
//! # Pipeline
//!
//! ```text
//! (nonce, referrer_id)                                  -> aux_data      [aux_data]
//! (chain_type, chain_id, bridge, wallet, aux_data)      -> tweak bytes   [tweak_bytes]
//! (master key, tweak bytes)                             -> deposit key   [segwit_tweak]
//! deposit key                                           -> P2WPKH addr   [address]
//! ```

pub mod address;
pub mod aux_data;
pub mod errors;
pub mod segwit_tweak;
pub mod tagged_hash;
pub mod tweak_bytes;
pub mod tweaker;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use address::p2wpkh_address;
pub use aux_data::{compute_aux_data_v0, MAX_REFERRER_ID_SIZE};
pub use errors::{DepositAddressError, ExpectedLen};
pub use segwit_tweak::{tweak_public_key, tweak_secret_key, DepositPublicKey};
pub use tweak_bytes::{calc_tweak_bytes, evm_deposit_tweak, ChainType};
pub use tweaker::{
    derive_address_for_chain, evm_deposit_segwit_addr, evm_deposit_segwit_pubkey, DepositTweaker,
};
pub use types::{AuxData, ChainId, EvmAddress, TweakBytes};
