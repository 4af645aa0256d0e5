//! Computes the v0 aux data for a nonce and referrer id.

use anyhow::{Context, Result};
use deposit_address::{compute_aux_data_v0, AuxData};
use tracing::info;

use crate::cli::{AuxArgs, AuxDataArgs};

/// Handles the aux-data command.
pub(crate) fn handle_aux_data(args: AuxDataArgs) -> Result<()> {
    let aux_data = aux_data_from_args(&args.aux)?;
    info!(nonce = args.aux.nonce, %aux_data, "computed aux data");

    println!("{aux_data}");

    Ok(())
}

/// Decodes the referrer id and derives the aux data from it.
pub(crate) fn aux_data_from_args(args: &AuxArgs) -> Result<AuxData> {
    let referrer = args.referrer_id.strip_prefix("0x").unwrap_or(&args.referrer_id);
    let referrer_id = hex::decode(referrer).context("referrer id must be hex")?;

    Ok(compute_aux_data_v0(args.nonce, &referrer_id)?)
}
