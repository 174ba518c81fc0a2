use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::VersionControl;

/// Records every `initialize` call and reports a fixed commit id.
#[derive(Debug, Default)]
pub struct RecordingVersionControl {
    calls: RefCell<Vec<(PathBuf, String, String)>>,
}

impl RecordingVersionControl {
    pub const COMMIT_ID: &'static str = "0123456789abcdef0123456789abcdef01234567";

    pub fn new() -> Self {
        Self::default()
    }

    /// `(root, remote, message)` per call.
    pub fn calls(&self) -> Vec<(PathBuf, String, String)> {
        self.calls.borrow().clone()
    }
}

impl VersionControl for RecordingVersionControl {
    fn initialize(&self, root: &Path, remote: &str, message: &str) -> Result<String, AppError> {
        self.calls.borrow_mut().push((root.to_path_buf(), remote.to_string(), message.to_string()));
        Ok(Self::COMMIT_ID.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FailingVersionControl;

impl VersionControl for FailingVersionControl {
    fn initialize(&self, _root: &Path, _remote: &str, _message: &str) -> Result<String, AppError> {
        Err(AppError::Git {
            command: "git2::Repository::init".to_string(),
            details: "permission denied".to_string(),
        })
    }
}
