use crate::error::Result;
use crate::pipeline::cipher::CIPHER_KEY_SIZE;
use crate::pipeline::hash::hash_segments;

/// Salt size in bytes
pub const SALT_SIZE: usize = 12;

/// Derived key size in bytes
pub const DERIVED_KEY_SIZE: usize = 32;

/// Static constant mixed into every key derivation, fixed by the container
/// format. A domain-separation tag, not a real secret. The trailing NUL is
/// part of the value; the context string carries no terminator.
pub const KEY_DERIVE_STATIC: &[u8; 10] = b"swapTeam\n\0";

/// 32-byte per-file key derived from (salt, static constant, context string).
///
/// The same bytes serve two roles: the first 16 are the AES key and the whole
/// 32 key the HMAC. Two views over one value is a format requirement -
/// deriving independent keys would make existing containers unreadable.
#[derive(Clone)]
pub struct DerivedKey([u8; DERIVED_KEY_SIZE]);

impl DerivedKey {
    /// First 16 bytes: the AES-128 cipher key
    pub fn cipher_key(&self) -> &[u8; CIPHER_KEY_SIZE] {
        self.0[..CIPHER_KEY_SIZE].try_into().unwrap()
    }

    /// All 32 bytes: the HMAC authentication key
    pub fn auth_key(&self) -> &[u8; DERIVED_KEY_SIZE] {
        &self.0
    }
}

/// Derive the per-file key: SHA-256(salt || KEY_DERIVE_STATIC || context).
///
/// Deterministic - this is what lets decryption rebuild the key from the
/// salt stored in the container plus the caller's context string.
pub fn derive_key(salt: &[u8; SALT_SIZE], context: &[u8]) -> Result<DerivedKey> {
    let digest = hash_segments(&[salt, KEY_DERIVE_STATIC, context], None)?;
    Ok(DerivedKey(digest))
}
