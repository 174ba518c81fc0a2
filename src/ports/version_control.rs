use std::path::Path;

use crate::domain::AppError;

/// Port for versioning a freshly generated tree.
pub trait VersionControl {
    /// Initialize a repository at `root`, commit every file with `message`,
    /// and register `remote` as `origin`. Returns the commit id.
    fn initialize(&self, root: &Path, remote: &str, message: &str) -> Result<String, AppError>;
}
