//! Tweaks a master public key directly with precomputed tweak bytes.

use anyhow::Result;
use deposit_address::DepositTweaker;
use tracing::info;

use crate::cli::DerivePubkeyArgs;

/// Handles the derive-pubkey command.
pub(crate) fn handle_derive_pubkey(args: DerivePubkeyArgs) -> Result<()> {
    let tweaker = DepositTweaker::new(args.master_key);
    let (address, public_key) = tweaker.derive_segwit(args.tweak.as_bytes(), args.network)?;
    info!(%public_key, %address, "derived deposit key");

    println!("public key: {public_key}");
    println!("address:    {address}");

    Ok(())
}
