// src/auth/token.rs
use base64::Engine;
use sha2::{Digest, Sha256};

/// Hash a token using SHA-256.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// Constant-time-ish compare for hashes (simple and sufficient here).
pub fn hashes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Compares through the digests so the presented token's length is not
/// observable in the comparison.
pub fn tokens_match(presented: &str, expected: &str) -> bool {
    hashes_equal(&hash_token(presented), &hash_token(expected))
}

/// Password half of an HTTP Basic credential (`base64(user:password)`).
pub fn basic_password(encoded: &str) -> Option<String> {
    let raw = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(raw).ok()?;
    let (_, password) = decoded.split_once(':')?;
    Some(password.to_string())
}
