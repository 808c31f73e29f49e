use crate::ports::outbound::LockfileReader;
use crate::shared::error::CheckdepsError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for loading Cargo.lock files from disk
///
/// Files are checked with [`validate_input_file`] before being read, so
/// symlinks, directories and oversized files are refused.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Builds a reader with a custom size limit in bytes.
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        if !lockfile_path.exists() {
            return Err(CheckdepsError::LockfileNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: "Pass the path of a Cargo.lock file, or run `cargo generate-lockfile` \
                             in the workspace first."
                    .to_string(),
            }
            .into());
        }

        validate_input_file(lockfile_path, "Cargo.lock", self.max_file_size).map_err(|e| {
            CheckdepsError::FileReadError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        fs::read_to_string(lockfile_path).map_err(|e| {
            CheckdepsError::FileReadError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_lockfile_success() {
        let temp_dir = TempDir::new().unwrap();
        let lockfile_path = temp_dir.path().join("Cargo.lock");
        fs::write(&lockfile_path, "version = 3\n").unwrap();

        let content = FileSystemReader::new()
            .read_lockfile(&lockfile_path)
            .unwrap();
        assert_eq!(content, "version = 3\n");
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_lockfile(&temp_dir.path().join("Cargo.lock"));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Cargo.lock file not found"));
        assert!(err.contains("cargo generate-lockfile"));
    }

    #[test]
    fn test_read_lockfile_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_lockfile(temp_dir.path());

        let err = result.unwrap_err().to_string();
        assert!(err.contains("not a regular file"));
    }

    #[test]
    fn test_read_lockfile_rejects_oversized_file() {
        let temp_dir = TempDir::new().unwrap();
        let lockfile_path = temp_dir.path().join("Cargo.lock");
        fs::write(&lockfile_path, "0123456789").unwrap();

        let result = FileSystemReader::with_max_file_size(4).read_lockfile(&lockfile_path);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_lockfile_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.lock");
        fs::write(&target, "version = 3\n").unwrap();
        let link = temp_dir.path().join("Cargo.lock");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_lockfile(&link);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }
}
