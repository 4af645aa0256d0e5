//! Runs the whole derivation for one wallet against a params file and prints the result as JSON.

use anyhow::Result;
use deposit_address::{
    calc_tweak_bytes, AuxData, ChainId, ChainType, DepositPublicKey, EvmAddress, TweakBytes,
};
use serde::Serialize;
use tracing::info;

use super::aux_data::aux_data_from_args;
use crate::{cli::DeriveArgs, params::Params};

/// Everything needed to audit a derived deposit address.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DerivedDeposit {
    pub(crate) chain_type: ChainType,
    pub(crate) chain_id: ChainId,
    pub(crate) bridge_address: EvmAddress,
    pub(crate) wallet_address: EvmAddress,
    pub(crate) aux_data: AuxData,
    pub(crate) tweak: TweakBytes,
    pub(crate) public_key: DepositPublicKey,
    pub(crate) address: String,
}

/// Handles the derive command.
pub(crate) fn handle_derive(args: DeriveArgs) -> Result<()> {
    let params = Params::from_path(&args.params)?;
    info!(network = %params.network, chain_type = %params.chain_type, "loaded params");

    let aux_data = match args.aux_data {
        Some(aux_data) => aux_data,
        None => aux_data_from_args(&args.aux)?,
    };

    let deposit = derive_deposit(&params, args.wallet, aux_data)?;
    info!(address = %deposit.address, "derived deposit address");

    println!("{}", serde_json::to_string_pretty(&deposit)?);

    Ok(())
}

pub(crate) fn derive_deposit(
    params: &Params,
    wallet: EvmAddress,
    aux_data: AuxData,
) -> Result<DerivedDeposit> {
    let tweak = calc_tweak_bytes(
        params.chain_type,
        params.chain_id.as_bytes(),
        params.bridge_address.as_bytes(),
        wallet.as_bytes(),
        aux_data.as_bytes(),
    )?;

    let (address, public_key) = params
        .tweaker()
        .derive_segwit(tweak.as_bytes(), params.network)?;

    Ok(DerivedDeposit {
        chain_type: params.chain_type,
        chain_id: params.chain_id,
        bridge_address: params.bridge_address,
        wallet_address: wallet,
        aux_data,
        tweak,
        public_key,
        address: address.to_string(),
    })
}
