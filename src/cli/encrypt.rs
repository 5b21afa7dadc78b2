use crate::container::seal;
use crate::error::Result;
use std::path::Path;

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    /// Internal path bound into key derivation; decryption must supply the
    /// exact same bytes.
    pub context: String,
}

/// Encrypt a file into a container file.
/// Returns the number of container bytes written.
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &EncryptOptions,
) -> Result<usize> {
    let plaintext = std::fs::read(input_path)?;
    let container = seal(&plaintext, options.context.as_bytes())?;
    std::fs::write(output_path, &container)?;
    Ok(container.len())
}
