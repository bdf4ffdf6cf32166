//! Master key holder and purpose-scoped subkey derivation

use std::fmt;

use secrecy::{ExposeSecret, SecretBox, SecretSlice};

use crate::crypto::{check_output_len, expand_into, HashAlgorithm, SecretKey, Subkey};
use crate::error::DerivationError;

/// High-entropy secret from which every subkey is derived.
///
/// The material is copied in at construction, never mutated afterwards and
/// zeroized when the key is dropped. Any length is accepted, including zero;
/// supplying strong material is the caller's job (see
/// [`MasterKey::meets_recommended_length`]).
///
/// Derivation takes `&self` and touches no shared state, so one key can be
/// used from many threads at once.
pub struct MasterKey {
    material: SecretSlice<u8>,
    hash: HashAlgorithm,
}

impl MasterKey {
    /// Master key using HKDF-SHA256
    pub fn new(material: impl Into<Vec<u8>>) -> Self {
        Self::with_hash(material, HashAlgorithm::Sha256)
    }

    pub fn with_hash(material: impl Into<Vec<u8>>, hash: HashAlgorithm) -> Self {
        Self {
            material: SecretSlice::from(material.into()),
            hash,
        }
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    pub fn material_len(&self) -> usize {
        self.material.expose_secret().len()
    }

    /// Longest subkey a single call can return
    pub fn max_subkey_len(&self) -> usize {
        self.hash.max_output_len()
    }

    /// True when the material is at least as long as the hash output.
    ///
    /// Advisory only; shorter material still derives.
    pub fn meets_recommended_length(&self) -> bool {
        self.material_len() >= self.hash.output_len()
    }

    /// Derives `size` bytes for the purpose named by `identifier`.
    ///
    /// Same key, identifier and size always give the same bytes. Calls with
    /// different sizes are separate derivations; do not rely on one being a
    /// prefix of another.
    pub fn subkey(&self, identifier: &str, size: usize) -> Result<Subkey, DerivationError> {
        check_output_len(self.hash, size)?;
        let mut key = Subkey::zeroed(size);
        self.subkey_into(identifier, key.as_mut_slice())?;
        Ok(key)
    }

    /// Fills `out` with the subkey for `identifier`
    pub fn subkey_into(&self, identifier: &str, out: &mut [u8]) -> Result<(), DerivationError> {
        expand_into(
            self.hash,
            self.material.expose_secret(),
            identifier.as_bytes(),
            out,
        )
    }

    /// Fixed-size subkey, e.g. `subkey_array::<32>("encryption")`
    pub fn subkey_array<const N: usize>(
        &self,
        identifier: &str,
    ) -> Result<SecretKey<N>, DerivationError> {
        let mut out = Box::new([0u8; N]);
        self.subkey_into(identifier, out.as_mut_slice())?;
        Ok(SecretBox::new(out))
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasterKey")
            .field("hash", &self.hash)
            .field("material_len", &self.material_len())
            .finish_non_exhaustive()
    }
}
