use crate::error::{Result, SaltboxError};
use crate::pipeline::auth::{compute_tag, verify_tag, Verification, TAG_SIZE};
use crate::pipeline::cipher::{self, BLOCK_SIZE, IV_SIZE};
use crate::pipeline::derive::{derive_key, SALT_SIZE};
use rand::rngs::OsRng;
use rand::RngCore;

/// Smallest byte count that can hold the fixed envelope fields.
/// Anything shorter cannot even be parsed; the smallest *valid* container is
/// this plus one ciphertext block.
pub const MIN_CONTAINER_LEN: usize = SALT_SIZE + IV_SIZE + TAG_SIZE;

const CIPHERTEXT_OFFSET: usize = SALT_SIZE + IV_SIZE;

/// Parsed view of a sealed container: salt | iv | ciphertext | tag.
/// Raw bytes, no magic, no length prefixes - the layout is the whole format.
#[derive(Debug)]
pub struct Container<'a> {
    pub salt: &'a [u8; SALT_SIZE],
    pub iv: &'a [u8; IV_SIZE],
    pub ciphertext: &'a [u8],
    pub tag: &'a [u8; TAG_SIZE],
}

impl<'a> Container<'a> {
    /// Split raw bytes into the envelope fields, validating the layout.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < MIN_CONTAINER_LEN {
            return Err(SaltboxError::MalformedContainer(format!(
                "{} bytes, need at least {}",
                bytes.len(),
                MIN_CONTAINER_LEN
            )));
        }

        let ciphertext = &bytes[CIPHERTEXT_OFFSET..bytes.len() - TAG_SIZE];
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(SaltboxError::MalformedContainer(format!(
                "ciphertext region of {} bytes is not a positive multiple of {}",
                ciphertext.len(),
                BLOCK_SIZE
            )));
        }

        Ok(Self {
            salt: bytes[..SALT_SIZE].try_into().unwrap(),
            iv: bytes[SALT_SIZE..CIPHERTEXT_OFFSET].try_into().unwrap(),
            ciphertext,
            tag: bytes[bytes.len() - TAG_SIZE..].try_into().unwrap(),
        })
    }
}

/// Result of opening a container: the plaintext plus the tag outcome.
/// The tag outcome is carried rather than enforced; see [`Verification`].
#[derive(Debug)]
pub struct Opened {
    pub plaintext: Vec<u8>,
    pub verification: Verification,
}

/// Total container size for a plaintext of `len` bytes
pub fn sealed_len(len: usize) -> usize {
    SALT_SIZE + IV_SIZE + cipher::encrypted_len(len) + TAG_SIZE
}

/// Encrypt `plaintext` under `context` into a fresh container.
///
/// Salt and IV are drawn from the OS CSPRNG per call, so sealing the same
/// plaintext twice yields different containers.
pub fn seal(plaintext: &[u8], context: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);

    let key = derive_key(&salt, context)?;
    let ciphertext = cipher::encrypt(plaintext, key.cipher_key(), &iv);
    let tag = compute_tag(&salt, &iv, &ciphertext, key.auth_key())?;

    let mut out = Vec::with_capacity(MIN_CONTAINER_LEN + ciphertext.len());
    out.extend_from_slice(&salt);
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    out.extend_from_slice(&tag);
    Ok(out)
}

/// Decrypt a container under `context`.
///
/// A tag mismatch does not abort: it is reported in the result and
/// decryption proceeds, since the padding check is what actually rejects a
/// wrong key. A padding failure aborts with `BadPadding` and no output.
pub fn open(container: &[u8], context: &[u8]) -> Result<Opened> {
    let parsed = Container::parse(container)?;
    let key = derive_key(parsed.salt, context)?;

    let verification = verify_tag(
        parsed.tag,
        parsed.salt,
        parsed.iv,
        parsed.ciphertext,
        key.auth_key(),
    )?;

    let plaintext = cipher::decrypt(parsed.ciphertext, key.cipher_key(), parsed.iv)?;

    Ok(Opened {
        plaintext,
        verification,
    })
}
