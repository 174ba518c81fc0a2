use std::fs;
use std::io;
use std::path::Path;

use crate::ports::TreeWriter;

/// `TreeWriter` backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemTreeWriter;

impl FilesystemTreeWriter {
    /// Create a new filesystem tree writer.
    pub fn new() -> Self {
        Self
    }
}

impl TreeWriter for FilesystemTreeWriter {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}
