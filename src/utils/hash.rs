use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;

/// Hex-encoded SHA-256 of a byte slice.
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Hex-encoded SHA-256 of a file's contents.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let data = fs::read(path)?;
    Ok(hash_bytes(&data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn hash_bytes_known_value() {
        assert_eq!(
            hash_bytes(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn hash_file_matches_hash_bytes() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), b"icon bytes").unwrap();

        assert_eq!(hash_file(file.path()).unwrap(), hash_bytes(b"icon bytes"));
    }

    #[test]
    fn hash_missing_file_errors() {
        assert!(hash_file(Path::new("/nonexistent/icon.png")).is_err());
    }
}
