//! Cryptographic core - HKDF expansion and derived key buffers

mod hkdf_derive;
mod subkey;

pub use hkdf_derive::{check_output_len, expand_into, HashAlgorithm};
pub use subkey::Subkey;

/// Fixed-size derived key, zeroized on drop
pub type SecretKey<const N: usize> = secrecy::SecretBox<[u8; N]>;
