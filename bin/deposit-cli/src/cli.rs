use std::path::PathBuf;

use bitcoin::Network;
use clap::{Parser, Subcommand};
use deposit_address::{AuxData, ChainId, ChainType, DepositPublicKey, EvmAddress, TweakBytes};

#[derive(Parser)]
#[command(
    name = "deposit-cli",
    about = "Derive one-time deposit addresses from a master public key",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    AuxData(AuxDataArgs),

    Tweak(TweakArgs),

    Derive(DeriveArgs),

    DerivePubkey(DerivePubkeyArgs),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Compute the v0 aux data for a nonce and referrer id", version)]
pub(crate) struct AuxDataArgs {
    #[clap(flatten)]
    pub(crate) aux: AuxArgs,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct AuxArgs {
    #[arg(long, default_value_t = 0, help = "the deposit nonce")]
    pub(crate) nonce: u32,

    #[arg(
        long,
        default_value = "",
        help = "the referrer id as hex, at most 256 bytes"
    )]
    pub(crate) referrer_id: String,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Compute the tweak bytes for a deposit", version)]
pub(crate) struct TweakArgs {
    #[arg(long, default_value = "evm", help = "the destination chain type")]
    pub(crate) chain_type: ChainType,

    #[arg(long, help = "the chain id, as a decimal integer or 0x-prefixed big-endian hex")]
    pub(crate) chain_id: ChainId,

    #[arg(long, help = "the bridge contract address on the destination chain")]
    pub(crate) bridge: EvmAddress,

    #[arg(long, help = "the wallet that claims the deposit")]
    pub(crate) wallet: EvmAddress,

    #[arg(long, help = "the 32-byte aux data as hex")]
    pub(crate) aux_data: AuxData,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Derive the deposit address for a wallet", version)]
pub(crate) struct DeriveArgs {
    #[arg(long, help = "the path to the params file")]
    pub(crate) params: PathBuf,

    #[arg(long, help = "the wallet that claims the deposit")]
    pub(crate) wallet: EvmAddress,

    #[arg(
        long,
        conflicts_with_all = ["nonce", "referrer_id"],
        help = "precomputed 32-byte aux data, instead of a nonce and referrer id"
    )]
    pub(crate) aux_data: Option<AuxData>,

    #[clap(flatten)]
    pub(crate) aux: AuxArgs,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Tweak a master public key and print the resulting address", version)]
pub(crate) struct DerivePubkeyArgs {
    #[arg(
        long,
        env = "DEPOSIT_MASTER_KEY",
        help = "the SEC1 encoded master public key as hex"
    )]
    pub(crate) master_key: DepositPublicKey,

    #[arg(long, help = "the 32-byte tweak as hex")]
    pub(crate) tweak: TweakBytes,

    #[arg(
        long,
        env = "DEPOSIT_NETWORK",
        default_value = "bitcoin",
        help = "the bitcoin network to encode the address for"
    )]
    pub(crate) network: Network,
}
