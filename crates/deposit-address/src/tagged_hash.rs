//! BIP-340 style tagged hashing.
//!
//! For a tag `t`, the tagged hash of `data` is `sha256(sha256(t) || sha256(t) || data)`. Each
//! derivation domain in this crate uses its own tag so that digests from one domain can never be
//! replayed into another.

use sha2::{Digest, Sha256};

/// Tag for the auxiliary data commitment.
pub const DEPOSIT_AUX_TAG: &str = "LombardDepositAux";

/// Tag for the chain-specific deposit tweak.
pub const DEPOSIT_ADDR_TAG: &str = "LombardDepositAddr";

/// Tag for the public key tweak scalar.
pub const SEGWIT_TWEAK_TAG: &str = "SegwitTweak";

/// Returns `sha256(tag)`.
pub fn tag_bytes(tag: &str) -> [u8; 32] {
    Sha256::digest(tag.as_bytes()).into()
}

/// A SHA-256 accumulator pre-loaded with `sha256(tag) || sha256(tag)`.
///
/// Consumed by [`TaggedHash::finalize`], so one instance serves exactly one digest.
#[derive(Debug, Clone)]
pub struct TaggedHash(Sha256);

impl TaggedHash {
    /// Creates a new hasher for the given tag.
    pub fn new(tag: &str) -> Self {
        let tag = tag_bytes(tag);

        let mut hasher = Sha256::new();
        hasher.update(tag);
        hasher.update(tag);

        Self(hasher)
    }

    /// Appends `data` to the hash input.
    pub fn absorb(&mut self, data: impl AsRef<[u8]>) {
        self.0.update(data);
    }

    /// Appends `data` to the hash input, builder style.
    #[must_use]
    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Self {
        self.absorb(data);
        self
    }

    /// Returns the digest.
    pub fn finalize(self) -> [u8; 32] {
        self.0.finalize().into()
    }
}

/// Hasher for [`crate::aux_data`].
pub fn aux_data_hasher() -> TaggedHash {
    TaggedHash::new(DEPOSIT_AUX_TAG)
}

/// Hasher for [`crate::tweak_bytes`].
pub fn deposit_hasher() -> TaggedHash {
    TaggedHash::new(DEPOSIT_ADDR_TAG)
}

/// Hasher for [`crate::segwit_tweak`].
pub fn segwit_tweak_hasher() -> TaggedHash {
    TaggedHash::new(SEGWIT_TWEAK_TAG)
}
