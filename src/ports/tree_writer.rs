use std::io;
use std::path::Path;

/// Port for writing a generated tree to storage.
pub trait TreeWriter {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and all of its ancestors; succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}
