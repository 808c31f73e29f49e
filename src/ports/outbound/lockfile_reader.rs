use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to read
/// a Cargo.lock file.
pub trait LockfileReader {
    /// Reads the lockfile at the given path
    ///
    /// # Arguments
    /// * `lockfile_path` - Path to the Cargo.lock file
    ///
    /// # Returns
    /// The raw TOML content of the lockfile
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The path is a symlink or not a regular file
    /// - The file exceeds the size limit
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String>;
}
