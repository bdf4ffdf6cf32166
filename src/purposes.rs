//! Common purpose identifiers

/// Symmetric cipher key
pub const ENCRYPTION: &str = "encryption";

/// Message authentication key
pub const MAC: &str = "mac";

/// Prefix for content-bound initialization vectors
pub const IV_PREFIX: &str = "iv";

/// `"iv-<hex fingerprint>"`: an IV identifier tied to a content checksum, so
/// distinct plaintexts get distinct IVs under the same master key.
pub fn iv_identifier(fingerprint: &[u8]) -> String {
    format!("{}-{}", IV_PREFIX, hex::encode(fingerprint))
}

/// `"<namespace>:<purpose>"`
pub fn scoped(namespace: &str, purpose: &str) -> String {
    format!("{}:{}", namespace, purpose)
}
