//! # masterkey
//!
//! Derives any number of independent, deterministic subkeys from one
//! high-entropy master key. Each subkey is scoped by a textual identifier
//! (its purpose), so an encryption key, an IV and a MAC key taken from the
//! same master never share bytes.
//!
//! ```
//! use masterkey::{purposes, MasterKey};
//!
//! let master = MasterKey::new([7u8; 64]);
//! let enc = master.subkey(purposes::ENCRYPTION, 32).unwrap();
//! let iv = master.subkey(&purposes::iv_identifier(b"checksum"), 16).unwrap();
//! assert_eq!(enc.len(), 32);
//! assert_ne!(&enc[..16], &iv[..]);
//! ```
//!
//! Derivation is HKDF (RFC 5869) with no salt: the master material is the
//! input keying material and the identifier is the `info` context. Output is
//! capped at `255 × HashLen` bytes per call (8160 for SHA-256).

pub mod config;
pub mod crypto;
pub mod error;
pub mod master_key;
pub mod purposes;

pub use config::{DeriverConfig, Encoding};
pub use crypto::{HashAlgorithm, SecretKey, Subkey};
pub use error::{DerivationError, MasterKeyError, Result};
pub use master_key::MasterKey;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
