use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest lockfile we are willing to load (100 MB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular file no larger than `max_size` and
/// returns its size.
///
/// Uses `symlink_metadata()` so that a symlink is rejected instead of
/// silently followed.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read (missing file, permissions)
/// - The path is a symbolic link
/// - The path is a directory or other non-regular file
/// - The file exceeds `max_size`
pub fn validate_input_file(path: &Path, file_description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;
    Ok(metadata.len())
}

/// Rejects files above `max_size` bytes.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_input_file_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Cargo.lock");
        fs::write(&file_path, "version = 3").unwrap();

        let size = validate_input_file(&file_path, "Cargo.lock", MAX_FILE_SIZE).unwrap();
        assert_eq!(size, 11);
    }

    #[test]
    fn test_validate_input_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/Cargo.lock");
        let result = validate_input_file(&path, "Cargo.lock", MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read Cargo.lock metadata"));
    }

    #[test]
    fn test_validate_input_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_input_file(temp_dir.path(), "Cargo.lock", MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_input_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.lock");
        fs::write(&target, "").unwrap();
        let link = temp_dir.path().join("Cargo.lock");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_input_file(&link, "Cargo.lock", MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_input_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Cargo.lock");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_input_file(&file_path, "Cargo.lock", 4);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/Cargo.lock");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
    }
}
