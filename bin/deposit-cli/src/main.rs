//! CLI for deriving deposit addresses from a master public key.

mod handlers;
mod params;

use anyhow::{Error, Result};
use clap::Parser;
use deposit_address_common::logging::{self, LoggerConfig};

use crate::handlers::{aux_data, derive, derive_pubkey, tweak};

mod cli;

fn main() -> Result<(), Error> {
    // Command output goes to stdout, so logs go to stderr.
    let mut config = LoggerConfig::with_base_name("deposit-cli");
    config.set_stderr(true);
    logging::init(config);

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::AuxData(args) => aux_data::handle_aux_data(args),
        cli::Commands::Tweak(args) => tweak::handle_tweak(args),
        cli::Commands::Derive(args) => derive::handle_derive(args),
        cli::Commands::DerivePubkey(args) => derive_pubkey::handle_derive_pubkey(args),
    }
}
