use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory of `file` (and its ancestors) if missing.
pub fn ensure_parent_dir(file: &Path) -> io::Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Remove a file, treating an already-missing file as success.
pub fn remove_if_exists(file: &Path) -> io::Result<()> {
    match fs::remove_file(file) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Size of a file in bytes.
pub fn file_len(file: &Path) -> io::Result<u64> {
    Ok(fs::metadata(file)?.len())
}
