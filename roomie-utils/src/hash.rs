use sha2::{Digest, Sha256};

/// Calculate SHA-256 hash of input bytes
///
/// Returns lowercase hex string of length 64.
pub fn sha256v(data: &[u8], extra: Option<&[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    if let Some(extra_data) = extra {
        hasher.update(extra_data);
    }
    hex::encode(hasher.finalize())
}

/// Pseudonymize a client address as `sha256(salt || ip)`.
///
/// # Example
/// ```
/// use roomie_utils::hash::hash_ip;
///
/// let hashed = hash_ip("salt", "203.0.113.7");
/// assert_eq!(hashed.len(), 64);
/// assert!(!hashed.contains("203.0.113.7"));
/// ```
#[inline]
pub fn hash_ip(salt: &str, ip: &str) -> String {
    sha256v(salt.as_bytes(), Some(ip.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256v() {
        let hash = sha256v(b"hello world", None);
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert_eq!(sha256v(b"hello ", Some(b"world")), hash);
    }

    #[test]
    fn test_hash_ip_is_salted() {
        let a = hash_ip("one", "10.0.0.1");
        let b = hash_ip("two", "10.0.0.1");
        assert_ne!(a, b);
        assert_eq!(a, sha256v(b"one10.0.0.1", None));
    }
}
