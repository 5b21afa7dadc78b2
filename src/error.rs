use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaltboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Hash primitive unavailable: {0}")]
    AlgorithmUnavailable(String),

    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    #[error("Decryption failed: invalid block padding (wrong context string, or corrupted data)")]
    BadPadding,
}

pub type Result<T> = std::result::Result<T, SaltboxError>;
