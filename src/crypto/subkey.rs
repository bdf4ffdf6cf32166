//! Derived key material with automatic zeroizing on drop

use std::fmt;

use base64::Engine;
use secrecy::SecretSlice;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Bytes produced by one derivation.
///
/// Never cached by the deriver; the buffer is wiped when the value is dropped.
pub struct Subkey {
    data: Vec<u8>,
}

impl Subkey {
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len],
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }

    /// Standard padded base64
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }

    /// Moves the bytes into a `SecretSlice` without copying them
    pub fn into_secret(mut self) -> SecretSlice<u8> {
        SecretSlice::from(std::mem::take(&mut self.data))
    }
}

impl Drop for Subkey {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl std::ops::Deref for Subkey {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl AsRef<[u8]> for Subkey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl ConstantTimeEq for Subkey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.data.as_slice().ct_eq(other.data.as_slice())
    }
}

impl PartialEq for Subkey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Subkey {}

impl fmt::Debug for Subkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subkey")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}
