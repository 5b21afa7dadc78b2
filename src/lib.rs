//! Saltbox - authenticated salted file container
//!
//! A fixed binary envelope for symmetric file encryption. The per-file key
//! is derived from a caller-supplied context string (the internal path that
//! identifies the logical content) plus a random salt, so the same context
//! bytes must be supplied again at decrypt time.
//!
//! ## Pipeline
//!
//! ```text
//! Encrypt: context + salt -> Derive -> AES-128-CBC (key[0..16], random IV)
//!          -> HMAC-SHA256 over salt||iv||ciphertext (full 32-byte key)
//!          -> salt(12) || iv(16) || ciphertext || tag(32)
//! ```
//!
//! Decrypt reads salt, IV, ciphertext, and tag back out of the envelope
//! instead of generating them. A tag mismatch is reported as a warning and
//! decryption continues; the cipher's padding check is what actually rejects
//! a wrong key.
//!
//! ## Example
//!
//! ```
//! use saltbox::container::{open, seal};
//!
//! let container = seal(b"HELLO", b"strings/english.lang").unwrap();
//! assert_eq!(container.len(), 76);
//!
//! let opened = open(&container, b"strings/english.lang").unwrap();
//! assert_eq!(opened.plaintext, b"HELLO");
//! assert!(opened.verification.is_verified());
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod pipeline;

pub use container::{open, seal, sealed_len, Container, Opened};
pub use error::{Result, SaltboxError};
pub use pipeline::auth::Verification;
