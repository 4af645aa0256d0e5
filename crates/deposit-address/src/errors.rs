//! Errors for deposit address derivation.

use std::fmt;

use thiserror::Error;

/// Error while deriving a deposit address or one of its intermediate values.
///
/// Every variant is fully determined by the caller's input, so none of them are worth retrying
/// with the same arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DepositAddressError {
    /// A field had the wrong number of bytes.
    #[error("wrong size for {field} (got {actual}, want {expected})")]
    InvalidLength {
        /// Name of the offending field.
        field: &'static str,
        /// The length constraint that was violated.
        expected: ExpectedLen,
        /// The length that was supplied.
        actual: usize,
    },

    /// The chain type selector does not name a supported chain.
    #[error("unsupported blockchain type: {0}")]
    UnsupportedChainType(String),

    /// A chain id string was neither a decimal integer below 2^256 nor `0x` prefixed hex.
    #[error("invalid chain id: {0}")]
    InvalidChainId(String),

    /// No key material was supplied.
    #[error("nil public key")]
    NilKey,

    /// The supplied key material is not a valid secp256k1 point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(secp256k1::Error),

    /// The tweak hash did not reduce to a usable scalar.
    ///
    /// Happens with probability around 2^-128.
    #[error("tweak value resulted in overflow")]
    ScalarOverflow,

    /// Applying the tweak produced an invalid key (the point at infinity, or a zero secret).
    #[error("tweaked key is invalid: {0}")]
    InvalidTweakedKey(secp256k1::Error),

    /// A hex-encoded input could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Length constraint carried by [`DepositAddressError::InvalidLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedLen {
    /// The field is fixed-width.
    Exactly(usize),
    /// The field is variable-width with an upper bound.
    AtMost(usize),
}

impl fmt::Display for ExpectedLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::AtMost(n) => write!(f, "not greater than {n}"),
        }
    }
}

/// Checks that `bytes` is exactly `expected` bytes long.
pub(crate) const fn check_len(
    field: &'static str,
    bytes: &[u8],
    expected: usize,
) -> Result<(), DepositAddressError> {
    if bytes.len() != expected {
        return Err(DepositAddressError::InvalidLength {
            field,
            expected: ExpectedLen::Exactly(expected),
            actual: bytes.len(),
        });
    }

    Ok(())
}
