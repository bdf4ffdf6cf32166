//! HKDF extract-and-expand over the SHA-2 family

use std::fmt;
use std::str::FromStr;

use hkdf::Hkdf;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha384, Sha512};

use crate::error::{DerivationError, MasterKeyError};

/// Hash function driving HKDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// HKDF-SHA256 (32-byte PRK, up to 8160 bytes of output)
    #[default]
    Sha256,
    /// HKDF-SHA384
    Sha384,
    /// HKDF-SHA512
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

    /// Digest size in bytes
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Largest output HKDF-Expand can produce: 255 × HashLen
    pub fn max_output_len(&self) -> usize {
        255 * self.output_len()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "HKDF-SHA256",
            Self::Sha384 => "HKDF-SHA384",
            Self::Sha512 => "HKDF-SHA512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = MasterKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        match normalized.strip_prefix("hkdf").unwrap_or(&normalized) {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(MasterKeyError::InvalidHash(s.to_string())),
        }
    }
}

/// Fills `out` with HKDF output keyed by `ikm`, with no salt and `info` as context.
///
/// Every byte of `out` is overwritten. On error `out` is left untouched.
pub fn expand_into(
    hash: HashAlgorithm,
    ikm: &[u8],
    info: &[u8],
    out: &mut [u8],
) -> Result<(), DerivationError> {
    check_output_len(hash, out.len())?;

    let expanded = match hash {
        HashAlgorithm::Sha256 => Hkdf::<Sha256>::new(None, ikm).expand(info, out),
        HashAlgorithm::Sha384 => Hkdf::<Sha384>::new(None, ikm).expand(info, out),
        HashAlgorithm::Sha512 => Hkdf::<Sha512>::new(None, ikm).expand(info, out),
    };

    expanded.map_err(|_| DerivationError::LengthExceeded {
        requested: out.len(),
        max: hash.max_output_len(),
        hash,
    })
}

/// Fails when `len` is more than one HKDF-Expand call can produce
pub fn check_output_len(hash: HashAlgorithm, len: usize) -> Result<(), DerivationError> {
    let max = hash.max_output_len();
    if len > max {
        return Err(DerivationError::LengthExceeded {
            requested: len,
            max,
            hash,
        });
    }
    Ok(())
}
