use std::{fs, path::Path};

use anyhow::anyhow;
use bitcoin::Network;
use deposit_address::{ChainId, ChainType, DepositPublicKey, DepositTweaker, EvmAddress};
use serde::{Deserialize, Serialize};

/// Deployment parameters shared by every derivation of one bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Params {
    pub(crate) network: Network,
    pub(crate) master_public_key: DepositPublicKey,
    pub(crate) chain_type: ChainType,

    #[serde(serialize_with = "serialize_chain_id")]
    #[serde(deserialize_with = "deserialize_chain_id")]
    pub(crate) chain_id: ChainId,

    pub(crate) bridge_address: EvmAddress,
}

// Chain ids are written the way operators know them, usually as a decimal number.
fn serialize_chain_id<S>(chain_id: &ChainId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("0x{chain_id}"))
}

fn deserialize_chain_id<'de, D>(deserializer: D) -> Result<ChainId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let chain_id = String::deserialize(deserializer)?;
    chain_id.parse().map_err(serde::de::Error::custom)
}

impl Params {
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub(crate) fn from_toml(contents: &str) -> Result<Self, anyhow::Error> {
        let params: Self = toml::from_str(contents)
            .map_err(|e| anyhow!(format!("Failed to parse params file: {}", e)))?;

        Ok(params)
    }

    pub(crate) const fn tweaker(&self) -> DepositTweaker {
        DepositTweaker::new(self.master_public_key)
    }
}
