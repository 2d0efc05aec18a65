// src/utils.rs
use sha2::{Digest, Sha256};

/// Computes SHA256 hash of content with normalized line endings.
#[must_use]
pub fn compute_sha256(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// First eight hex digits of [`compute_sha256`].
#[must_use]
pub fn short_hash(content: &str) -> String {
    let mut hash = compute_sha256(content);
    hash.truncate(8);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash_is_stable() {
        assert_eq!(short_hash("/out/foo/CMakeLists.txt"), short_hash("/out/foo/CMakeLists.txt"));
        assert_eq!(short_hash("x").len(), 8);
        assert_ne!(short_hash("/a/foo"), short_hash("/b/foo"));
    }
}
