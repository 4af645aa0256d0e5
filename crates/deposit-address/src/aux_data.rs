//! Auxiliary data committed into every deposit tweak.
//!
//! Version 0 is defined as
//!
//! ```text
//! taggedHash("LombardDepositAux", 0x00 || nonce || referrer_id)
//! ```
//!
//! where `nonce` is a big-endian `u32` and `referrer_id` is an arbitrary byte string of at most
//! [`MAX_REFERRER_ID_SIZE`] bytes.

use tracing::trace;

use crate::{
    errors::{DepositAddressError, ExpectedLen},
    tagged_hash::aux_data_hasher,
    types::AuxData,
};

/// Version byte for [`compute_aux_data_v0`].
pub const DEPOSIT_AUX_V0: u8 = 0;

/// Maximum length of a referrer id.
pub const MAX_REFERRER_ID_SIZE: usize = 256;

/// Computes v0 aux data for a nonce and referrer id.
pub fn compute_aux_data_v0(
    nonce: u32,
    referrer_id: &[u8],
) -> Result<AuxData, DepositAddressError> {
    if referrer_id.len() > MAX_REFERRER_ID_SIZE {
        return Err(DepositAddressError::InvalidLength {
            field: "referrer id",
            expected: ExpectedLen::AtMost(MAX_REFERRER_ID_SIZE),
            actual: referrer_id.len(),
        });
    }

    let digest = aux_data_hasher()
        .chain([DEPOSIT_AUX_V0])
        .chain(nonce.to_be_bytes())
        .chain(referrer_id)
        .finalize();

    trace!(
        %nonce,
        referrer_id = %hex::encode(referrer_id),
        aux_data = %hex::encode(digest),
        "computed aux data"
    );

    Ok(AuxData::new(digest))
}
