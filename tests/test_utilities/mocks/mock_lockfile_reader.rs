use std::path::Path;
use checkdeps::prelude::*;

/// Mock LockfileReader serving in-memory lockfile text
pub struct MockLockfileReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, _lockfile_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        Ok(self.content.clone())
    }
}
