//! Fixed-width values that flow through the derivation.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{check_len, DepositAddressError, ExpectedLen};

/// Size of a serialized chain id.
pub const CHAIN_ID_SIZE: usize = 32;

/// Size of an EVM address.
pub const EVM_ADDRESS_SIZE: usize = 20;

/// Size of the auxiliary data commitment.
pub const AUX_DATA_SIZE: usize = 32;

/// Size of the tweak input consumed by [`crate::segwit_tweak`].
pub const TWEAK_SIZE: usize = 32;

/// Strips an optional `0x` prefix and decodes the rest as hex.
fn decode_hex(s: &str) -> Result<Vec<u8>, DepositAddressError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}

/// Implements the plumbing shared by the byte-array newtypes below: slice conversion with a
/// length check, hex parsing and display, and serde as a hex string.
macro_rules! impl_fixed_bytes {
    ($name:ident, $size:expr, $field:literal) => {
        impl $name {
            /// Wraps a byte array.
            pub const fn new(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            /// Returns the underlying bytes.
            pub const fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            /// Returns the underlying bytes by value.
            pub const fn to_bytes(self) -> [u8; $size] {
                self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $size] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = DepositAddressError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                check_len($field, bytes, $size)?;
                let mut array = [0u8; $size];
                array.copy_from_slice(bytes);
                Ok(Self(array))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", hex::encode(self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

/// A 20-byte EVM account or contract address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvmAddress([u8; EVM_ADDRESS_SIZE]);

impl_fixed_bytes!(EvmAddress, EVM_ADDRESS_SIZE, "evm address");

impl FromStr for EvmAddress {
    type Err = DepositAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex(s)?.as_slice().try_into()
    }
}

/// A chain id serialized as 32 big-endian bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId([u8; CHAIN_ID_SIZE]);

impl_fixed_bytes!(ChainId, CHAIN_ID_SIZE, "chain id");

impl ChainId {
    /// Builds a chain id from a big-endian value of at most 32 bytes, zero-padding on the left.
    ///
    /// Values wider than 32 bytes are rejected rather than truncated.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, DepositAddressError> {
        if bytes.len() > CHAIN_ID_SIZE {
            return Err(DepositAddressError::InvalidLength {
                field: "chain id",
                expected: ExpectedLen::AtMost(CHAIN_ID_SIZE),
                actual: bytes.len(),
            });
        }

        let mut array = [0u8; CHAIN_ID_SIZE];
        array[CHAIN_ID_SIZE - bytes.len()..].copy_from_slice(bytes);
        Ok(Self(array))
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        let mut array = [0u8; CHAIN_ID_SIZE];
        array[CHAIN_ID_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
        Self(array)
    }
}

/// Parses either a decimal integer below 2^256 or a `0x` prefixed big-endian hex string of at
/// most 32 bytes. Unprefixed input is always decimal, so `"10"` is ten and `"0x10"` is sixteen.
impl FromStr for ChainId {
    type Err = DepositAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(digits) = s.strip_prefix("0x") {
            if digits.is_empty() {
                return Err(DepositAddressError::InvalidChainId(s.to_owned()));
            }
            return Self::from_be_slice(&hex::decode(digits)?);
        }

        parse_decimal(s)
            .map(Self)
            .ok_or_else(|| DepositAddressError::InvalidChainId(s.to_owned()))
    }
}

/// Parses a string of ASCII digits into a 256-bit big-endian integer. Returns `None` on an empty
/// string, a non-digit, or a value that does not fit.
fn parse_decimal(s: &str) -> Option<[u8; CHAIN_ID_SIZE]> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value = [0u8; CHAIN_ID_SIZE];
    for digit in s.bytes().map(|b| b - b'0') {
        let mut carry = u16::from(digit);
        for byte in value.iter_mut().rev() {
            let acc = u16::from(*byte) * 10 + carry;
            *byte = (acc & 0xff) as u8;
            carry = acc >> 8;
        }

        if carry != 0 {
            return None;
        }
    }

    Some(value)
}

/// The 32-byte auxiliary data commitment produced by [`crate::aux_data`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AuxData([u8; AUX_DATA_SIZE]);

impl_fixed_bytes!(AuxData, AUX_DATA_SIZE, "aux data");

impl FromStr for AuxData {
    type Err = DepositAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex(s)?.as_slice().try_into()
    }
}

/// The 32-byte output of the chain tweak calculation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TweakBytes([u8; TWEAK_SIZE]);

impl_fixed_bytes!(TweakBytes, TWEAK_SIZE, "tweak");

impl FromStr for TweakBytes {
    type Err = DepositAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex(s)?.as_slice().try_into()
    }
}
