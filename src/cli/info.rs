use crate::container::Container;
use crate::error::Result;
use crate::pipeline::cipher::BLOCK_SIZE;
use std::fs;
use std::path::Path;

/// Display the field breakdown of a container file
pub fn show_info(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let container = Container::parse(&bytes)?;
    let blocks = container.ciphertext.len() / BLOCK_SIZE;

    let mut output = String::new();

    output.push_str("Saltbox Container\n");
    output.push_str("=================\n\n");

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Total size: {} bytes\n\n", bytes.len()));

    output.push_str("Envelope:\n");
    output.push_str(&format!("  Salt: {}\n", hex::encode(container.salt)));
    output.push_str(&format!("  IV:   {}\n", hex::encode(container.iv)));
    output.push_str(&format!(
        "  Ciphertext: {} bytes ({} block{})\n",
        container.ciphertext.len(),
        blocks,
        if blocks == 1 { "" } else { "s" }
    ));
    output.push_str(&format!("  Tag:  {}\n", hex::encode(container.tag)));
    output.push_str("\n");
    output.push_str("Payload length is hidden by the padding; decrypt with the\n");
    output.push_str("correct context string to recover it.\n");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encrypt::{encrypt_file, EncryptOptions};
    use tempfile::tempdir;

    #[test]
    fn test_show_info() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.dec");
        let sealed = dir.path().join("sealed.bfile");

        std::fs::write(&input, b"HELLO").unwrap();

        let options = EncryptOptions {
            context: "strings/english.lang".into(),
        };
        encrypt_file(&input, &sealed, &options).unwrap();

        let info = show_info(&sealed).unwrap();
        assert!(info.contains("Total size: 76 bytes"));
        assert!(info.contains("Ciphertext: 16 bytes (1 block)"));
        assert!(info.contains("Salt: "));
        assert!(info.contains("Tag:  "));
    }

    #[test]
    fn test_show_info_rejects_plain_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-a-container");
        std::fs::write(&path, b"too short").unwrap();
        assert!(show_info(&path).is_err());
    }
}
