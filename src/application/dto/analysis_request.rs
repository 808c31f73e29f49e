use std::path::PathBuf;

/// AnalysisRequest - input of the conflict analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Path to the Cargo.lock file
    pub lockfile_path: PathBuf,
    /// Whether to prune packages unrelated to any conflict
    pub trim: bool,
}

impl AnalysisRequest {
    pub fn new(lockfile_path: PathBuf, trim: bool) -> Self {
        Self {
            lockfile_path,
            trim,
        }
    }
}
