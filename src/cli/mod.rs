pub mod decrypt;
pub mod encrypt;
pub mod info;

pub use decrypt::*;
pub use encrypt::*;
pub use info::*;

use crate::pipeline::cipher::Mode;
use std::path::Path;

/// Pick a mode from the input file's extension, the way the tool behaves
/// when neither `encrypt` nor `decrypt` was asked for explicitly: a `.dec`
/// file (case-insensitive) gets encrypted, everything else gets decrypted.
pub fn detect_mode(path: &Path) -> Mode {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("dec") => Mode::Encrypt,
        _ => Mode::Decrypt,
    }
}
