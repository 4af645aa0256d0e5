//! Computes the tweak bytes for a deposit.

use anyhow::Result;
use deposit_address::calc_tweak_bytes;
use tracing::info;

use crate::cli::TweakArgs;

/// Handles the tweak command.
pub(crate) fn handle_tweak(args: TweakArgs) -> Result<()> {
    let tweak = calc_tweak_bytes(
        args.chain_type,
        args.chain_id.as_bytes(),
        args.bridge.as_bytes(),
        args.wallet.as_bytes(),
        args.aux_data.as_bytes(),
    )?;
    info!(chain_type = %args.chain_type, %tweak, "computed tweak bytes");

    println!("{tweak}");

    Ok(())
}
