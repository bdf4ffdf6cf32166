//! Deriver configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::crypto::HashAlgorithm;
use crate::error::{MasterKeyError, Result};
use crate::master_key::MasterKey;

/// Text encoding for printed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Hex,
    Base64,
}

impl Encoding {
    /// Decodes master material written in this encoding
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        use base64::Engine;

        let text = text.trim();
        match self {
            Self::Hex => Ok(hex::decode(text)?),
            Self::Base64 => Ok(base64::engine::general_purpose::STANDARD.decode(text)?),
        }
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        use base64::Engine;

        match self {
            Self::Hex => hex::encode(bytes),
            Self::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// How master keys are built and how output is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriverConfig {
    /// Hash behind HKDF
    pub hash: HashAlgorithm,
    /// Material shorter than this is reported as weak. Never below the
    /// hash output length.
    pub min_material_len: usize,
    /// Reject weak material instead of only warning
    pub enforce_min_material_len: bool,
    /// Output encoding for the CLI
    pub encoding: Encoding,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            hash: HashAlgorithm::Sha256,
            min_material_len: 32,
            enforce_min_material_len: false,
            encoding: Encoding::Hex,
        }
    }
}

impl DeriverConfig {
    /// Refuses material shorter than 32 bytes
    pub fn strict() -> Self {
        Self {
            enforce_min_material_len: true,
            ..Default::default()
        }
    }

    /// HKDF-SHA512: larger per-call limit, 64-byte recommended material
    pub fn wide() -> Self {
        Self {
            hash: HashAlgorithm::Sha512,
            min_material_len: HashAlgorithm::Sha512.output_len(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        debug!(path = %path.display(), hash = %config.hash, "loaded deriver config");
        Ok(config)
    }

    /// Threshold actually applied: the configured minimum, raised to the
    /// hash output length so it agrees with `MasterKey::meets_recommended_length`
    pub fn effective_min_material_len(&self) -> usize {
        self.min_material_len.max(self.hash.output_len())
    }

    pub fn material_is_weak(&self, len: usize) -> bool {
        len < self.effective_min_material_len()
    }

    /// Builds a master key, applying the minimum-length policy.
    ///
    /// With enforcement off, weak material is accepted and a warning logged.
    pub fn master_key(&self, material: impl Into<Vec<u8>>) -> Result<MasterKey> {
        let material = material.into();
        let min = self.effective_min_material_len();
        if self.material_is_weak(material.len()) {
            if self.enforce_min_material_len {
                return Err(MasterKeyError::MaterialTooShort {
                    min,
                    actual: material.len(),
                });
            }
            warn!(
                len = material.len(),
                recommended = min,
                "master key material shorter than recommended"
            );
        }
        Ok(MasterKey::with_hash(material, self.hash))
    }
}
