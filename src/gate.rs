//! Access-code hashing for the directory gate.
//!
//! The directory page ships only the SHA-256 hex digest of the shared code;
//! the client hashes user input with `crypto.subtle.digest("SHA-256", …)` and
//! compares. The two sides must produce identical digests, which pins this to
//! lowercase hex over the UTF-8 bytes of the trimmed code.
//!
//! This is a deterrent, not a security boundary: the digest and every member
//! row are present in the downloaded page regardless.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of the trimmed access code.
pub fn code_hash(code: &str) -> String {
    let digest = Sha256::digest(code.trim().as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference digests from `printf %s <code> | sha256sum`.

    #[test]
    fn matches_known_sha256_vectors() {
        assert_eq!(
            code_hash("1234"),
            "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"
        );
        assert_eq!(
            code_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn trims_before_hashing() {
        assert_eq!(code_hash("  1234  "), code_hash("1234"));
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let hash = code_hash("Borin'Old Cars");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
