//! Public key tweaking.
//!
//! A tweak hash is computed as
//!
//! ```text
//! t = taggedHash("SegwitTweak", pk || tweak)
//! ```
//!
//! where `pk` is the 33-byte compressed SEC1 serialization of the key being tweaked. `t` is read
//! as a big-endian secp256k1 scalar and the tweaked key is `pk + t * G`. The holder of the secret
//! key `sk` behind `pk` obtains the matching secret as `sk + t mod n`.

use std::{fmt, str::FromStr};

use secp256k1::{PublicKey, Scalar, SecretKey, SECP256K1};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{
    errors::{check_len, DepositAddressError},
    tagged_hash::segwit_tweak_hasher,
    types::TWEAK_SIZE,
};

/// Size of a compressed SEC1 public key.
pub const PUBLIC_KEY_SIZE: usize = 33;

/// A secp256k1 public key that only crosses the crate boundary as compressed SEC1 bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DepositPublicKey(PublicKey);

impl DepositPublicKey {
    /// Parses a SEC1 encoded public key, compressed or uncompressed.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DepositAddressError> {
        if bytes.is_empty() {
            return Err(DepositAddressError::NilKey);
        }

        PublicKey::from_slice(bytes)
            .map(Self)
            .map_err(DepositAddressError::InvalidPublicKey)
    }

    /// Returns the public key of `sk`.
    pub fn from_secret_key(sk: &SecretKey) -> Self {
        Self(sk.public_key(SECP256K1))
    }

    /// Returns the 33-byte compressed serialization.
    pub fn serialize(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0.serialize()
    }

    /// Returns the underlying curve point.
    pub const fn inner(&self) -> &PublicKey {
        &self.0
    }
}

impl From<PublicKey> for DepositPublicKey {
    fn from(value: PublicKey) -> Self {
        Self(value)
    }
}

impl From<DepositPublicKey> for PublicKey {
    fn from(value: DepositPublicKey) -> Self {
        value.0
    }
}

impl fmt::Display for DepositPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.serialize()))
    }
}

impl FromStr for DepositPublicKey {
    type Err = DepositAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&hex::decode(s.trim())?)
    }
}

impl Serialize for DepositPublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DepositPublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Tweaks `pk` with a 32-byte tweak value, returning `pk + t * G`.
pub fn tweak_public_key(
    pk: &DepositPublicKey,
    tweak: &[u8],
) -> Result<DepositPublicKey, DepositAddressError> {
    let scalar = compute_tweak_scalar(pk, tweak)?;

    // libsecp256k1 adds in Jacobian coordinates and normalizes once at the end.
    let tweaked = pk
        .0
        .add_exp_tweak(SECP256K1, &scalar)
        .map_err(DepositAddressError::InvalidTweakedKey)?;

    debug!(master = %pk, tweaked = %DepositPublicKey(tweaked), "tweaked public key");

    Ok(DepositPublicKey(tweaked))
}

/// Tweaks the secret key `sk` with the same scalar [`tweak_public_key`] applies to its public
/// key, returning `sk + t mod n`.
pub fn tweak_secret_key(sk: &SecretKey, tweak: &[u8]) -> Result<SecretKey, DepositAddressError> {
    let pk = DepositPublicKey::from_secret_key(sk);
    let scalar = compute_tweak_scalar(&pk, tweak)?;

    sk.add_tweak(&scalar)
        .map_err(DepositAddressError::InvalidTweakedKey)
}

/// Computes the tweak scalar `t` for `pk`.
///
/// The tweak must be exactly [`TWEAK_SIZE`] bytes. A digest that does not fit below the curve
/// order, or that is zero, is an error; each happens with probability around 2^-128.
pub fn compute_tweak_scalar(
    pk: &DepositPublicKey,
    tweak: &[u8],
) -> Result<Scalar, DepositAddressError> {
    check_len("tweak", tweak, TWEAK_SIZE)?;

    let digest = segwit_tweak_hasher()
        .chain(pk.serialize())
        .chain(tweak)
        .finalize();

    scalar_from_digest(digest)
}

/// Reads a digest as a big-endian scalar, rejecting values at or above the curve order and zero.
fn scalar_from_digest(digest: [u8; 32]) -> Result<Scalar, DepositAddressError> {
    let scalar = Scalar::from_be_bytes(digest).map_err(|_| DepositAddressError::ScalarOverflow)?;
    if scalar == Scalar::ZERO {
        return Err(DepositAddressError::ScalarOverflow);
    }

    Ok(scalar)
}
