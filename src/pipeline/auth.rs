use crate::error::Result;
use crate::pipeline::derive::DERIVED_KEY_SIZE;
use crate::pipeline::hash::{constant_time_compare, hash_segments, HASH_SIZE};

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = HASH_SIZE;

/// Outcome of tag verification.
///
/// A mismatch is a warning, not a hard failure: decryption proceeds and the
/// cipher's own padding check acts as the effective integrity gate for this
/// format. Callers that want strict behavior can reject on `MismatchWarning`
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Verified,
    MismatchWarning,
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified)
    }
}

/// HMAC-SHA256 over salt || iv || ciphertext, keyed with the full 32-byte
/// derived key.
pub fn compute_tag(
    salt: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    key: &[u8; DERIVED_KEY_SIZE],
) -> Result<[u8; TAG_SIZE]> {
    hash_segments(&[salt, iv, ciphertext], Some(key.as_slice()))
}

/// Recompute the tag and compare it against the stored one in constant time.
pub fn verify_tag(
    stored: &[u8],
    salt: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    key: &[u8; DERIVED_KEY_SIZE],
) -> Result<Verification> {
    let computed = compute_tag(salt, iv, ciphertext, key)?;
    if constant_time_compare(&computed, stored) {
        Ok(Verification::Verified)
    } else {
        Ok(Verification::MismatchWarning)
    }
}
