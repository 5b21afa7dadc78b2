use crate::container::open;
use crate::error::Result;
use crate::pipeline::auth::Verification;
use std::path::Path;

/// Options for the decrypt command
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    /// Internal path used when the container was sealed
    pub context: String,
}

/// Outcome of a file decryption
#[derive(Debug)]
pub struct DecryptOutcome {
    pub bytes_written: usize,
    pub verification: Verification,
}

/// Decrypt a container file back into its payload.
///
/// A tag mismatch is reported in the outcome, not raised: the payload is
/// written regardless, matching the format's lenient authentication policy.
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &DecryptOptions,
) -> Result<DecryptOutcome> {
    let container = std::fs::read(input_path)?;
    let opened = open(&container, options.context.as_bytes())?;
    std::fs::write(output_path, &opened.plaintext)?;

    Ok(DecryptOutcome {
        bytes_written: opened.plaintext.len(),
        verification: opened.verification,
    })
}
