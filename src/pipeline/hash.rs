use crate::error::{Result, SaltboxError};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Digest size of SHA-256 / HMAC-SHA256 in bytes
pub const HASH_SIZE: usize = 32;

/// Hash an ordered list of byte segments into a single 32-byte digest.
///
/// With no key this is plain SHA-256 over the concatenation of the segments;
/// with a key it is HMAC-SHA256 over the same bytes. Empty segments
/// contribute nothing either way.
pub fn hash_segments(segments: &[&[u8]], key: Option<&[u8]>) -> Result<[u8; HASH_SIZE]> {
    match key {
        Some(key) => {
            let mut mac = HmacSha256::new_from_slice(key).map_err(|e| {
                SaltboxError::AlgorithmUnavailable(format!("HMAC-SHA256: {}", e))
            })?;
            for segment in segments {
                if !segment.is_empty() {
                    mac.update(segment);
                }
            }
            Ok(mac.finalize().into_bytes().into())
        }
        None => {
            let mut hasher = Sha256::new();
            for segment in segments {
                if !segment.is_empty() {
                    hasher.update(segment);
                }
            }
            Ok(hasher.finalize().into())
        }
    }
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
