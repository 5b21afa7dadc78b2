use crate::error::{Result, SaltboxError};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const CIPHER_KEY_SIZE: usize = 16;

/// CBC initialization vector size in bytes
pub const IV_SIZE: usize = 16;

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Ciphertext length for a plaintext of `len` bytes.
///
/// PKCS#7 always pads, adding between 1 and 16 bytes, so the result is the
/// next block multiple strictly greater than `len`. Deterministic from the
/// length alone, which is why no query/execute round trip is needed.
pub fn encrypted_len(len: usize) -> usize {
    (len / BLOCK_SIZE + 1) * BLOCK_SIZE
}

/// AES-128-CBC encrypt with PKCS#7 padding.
///
/// Key and IV are read, never written: the caller's IV stays valid for the
/// container it is headed into.
pub fn encrypt(plaintext: &[u8], key: &[u8; CIPHER_KEY_SIZE], iv: &[u8; IV_SIZE]) -> Vec<u8> {
    Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// AES-128-CBC decrypt, validating and stripping the PKCS#7 padding.
///
/// A padding failure is the one reliable signal that the derived key was
/// wrong (or the ciphertext corrupted) and is fatal to the operation.
pub fn decrypt(
    ciphertext: &[u8],
    key: &[u8; CIPHER_KEY_SIZE],
    iv: &[u8; IV_SIZE],
) -> Result<Vec<u8>> {
    Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| SaltboxError::BadPadding)
}

/// Run the cipher in the given direction
pub fn transform(
    mode: Mode,
    data: &[u8],
    key: &[u8; CIPHER_KEY_SIZE],
    iv: &[u8; IV_SIZE],
) -> Result<Vec<u8>> {
    match mode {
        Mode::Encrypt => Ok(encrypt(data, key, iv)),
        Mode::Decrypt => decrypt(data, key, iv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; CIPHER_KEY_SIZE] = [0x42; CIPHER_KEY_SIZE];
    const IV: [u8; IV_SIZE] = [0x24; IV_SIZE];

    #[test]
    fn test_encrypted_len_always_pads() {
        assert_eq!(encrypted_len(0), 16);
        assert_eq!(encrypted_len(1), 16);
        assert_eq!(encrypted_len(15), 16);
        assert_eq!(encrypted_len(16), 32);
        assert_eq!(encrypted_len(17), 32);
        assert_eq!(encrypted_len(32), 48);
    }

    #[test]
    fn test_roundtrip() {
        let plaintext = b"attack at dawn";
        let ciphertext = encrypt(plaintext, &KEY, &IV);
        assert_eq!(ciphertext.len(), encrypted_len(plaintext.len()));
        let recovered = decrypt(&ciphertext, &KEY, &IV).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_roundtrip_empty() {
        let ciphertext = encrypt(b"", &KEY, &IV);
        assert_eq!(ciphertext.len(), BLOCK_SIZE);
        let recovered = decrypt(&ciphertext, &KEY, &IV).unwrap();
        assert!(recovered.is_empty());
    }

    #[test]
    fn test_roundtrip_block_aligned() {
        let plaintext = [0xABu8; 32];
        let ciphertext = encrypt(&plaintext, &KEY, &IV);
        assert_eq!(ciphertext.len(), 48);
        let recovered = decrypt(&ciphertext, &KEY, &IV).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_wrong_key_is_bad_padding() {
        let ciphertext = encrypt(b"some plaintext bytes", &KEY, &IV);
        let wrong_key = [0x43; CIPHER_KEY_SIZE];
        let result = decrypt(&ciphertext, &wrong_key, &IV);
        assert!(matches!(result, Err(SaltboxError::BadPadding)));
    }

    #[test]
    fn test_transform_matches_direct_calls() {
        let plaintext = b"transform me";
        let ciphertext = transform(Mode::Encrypt, plaintext, &KEY, &IV).unwrap();
        assert_eq!(ciphertext, encrypt(plaintext, &KEY, &IV));
        let recovered = transform(Mode::Decrypt, &ciphertext, &KEY, &IV).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_caller_iv_unchanged() {
        let iv = IV;
        let _ = encrypt(b"data", &KEY, &iv);
        assert_eq!(iv, IV);
    }
}
