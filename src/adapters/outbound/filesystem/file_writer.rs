use crate::ports::outbound::OutputPresenter;
use crate::shared::error::CheckdepsError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing rendered output to a file
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> CheckdepsError {
        CheckdepsError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    fn validate_destination(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }

        // Never follow a symlink planted at the destination.
        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(self
                    .write_error(
                        "Security: Output path is a symbolic link. For security reasons, \
                         writing to symbolic links is not allowed.",
                    )
                    .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_destination()?;
        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;
        eprintln!("✅ Output written to {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing rendered output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("deps.dot");

        FileSystemWriter::new(output_path.clone())
            .present("digraph {}\n")
            .unwrap();
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "digraph {}\n");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/directory/deps.dot"));
        let err = writer.present("digraph {}").unwrap_err().to_string();
        assert!(err.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_refuses_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        fs::write(&target, "keep").unwrap();
        let link = temp_dir.path().join("out.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemWriter::new(link).present("x").unwrap_err().to_string();
        assert!(err.contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_success() {
        assert!(StdoutPresenter::new().present("").is_ok());
    }
}
