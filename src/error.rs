//! Error types for subkey derivation and the layers around it

use thiserror::Error;

use crate::crypto::HashAlgorithm;

/// Failure of a single subkey derivation.
///
/// HKDF-Expand can produce at most `255 × HashLen` bytes; asking for more is
/// the only way a derivation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DerivationError {
    #[error("Requested subkey length {requested} exceeds the {hash} maximum of {max} bytes")]
    LengthExceeded {
        requested: usize,
        max: usize,
        hash: HashAlgorithm,
    },
}

/// Errors raised by configuration loading, material parsing and the CLI.
#[derive(Debug, Error)]
pub enum MasterKeyError {
    #[error(transparent)]
    Derivation(#[from] DerivationError),

    #[error("Master key material too short: expected at least {min} bytes, got {actual}")]
    MaterialTooShort { min: usize, actual: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unknown hash algorithm: {0}")]
    InvalidHash(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RNG failed: {0}")]
    Rng(String),
}

pub type Result<T> = std::result::Result<T, MasterKeyError>;

impl MasterKeyError {
    /// Errors caused by what the caller passed in, as opposed to the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Derivation(_)
                | Self::MaterialTooShort { .. }
                | Self::InvalidHex(_)
                | Self::InvalidBase64(_)
                | Self::InvalidJson(_)
                | Self::InvalidHash(_)
        )
    }
}
