//! Credential digests using SHA-256

use sha2::{Digest, Sha256};
use std::fmt::Debug;

/// Trait for turning a plaintext credential into its stored form
///
/// Implementations must be deterministic so a stored digest can be compared
/// against a freshly computed one.
pub trait CredentialHasher: Send + Sync + Debug {
    /// Digest a plaintext credential
    fn digest(&self, plaintext: &str) -> String;
}

/// SHA-256 hasher producing 64 lowercase hex characters
#[derive(Debug, Clone, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Sha256Hasher {
    fn digest(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let hasher = Sha256Hasher::new();

        assert_eq!(hasher.digest("Secret123"), hasher.digest("Secret123"));
        assert_ne!(hasher.digest("Secret123"), hasher.digest("Secret124"));
    }

    #[test]
    fn test_digest_shape() {
        let hasher = Sha256Hasher::new();
        let digest = hasher.digest("Secret123");

        assert_eq!(digest.len(), 64);
        assert_ne!(digest, "Secret123");
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_known_vector() {
        let hasher = Sha256Hasher::new();
        assert_eq!(
            hasher.digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
