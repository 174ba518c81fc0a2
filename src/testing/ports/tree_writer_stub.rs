use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::TreeWriter;

/// In-memory tree that records write order.
#[derive(Debug, Default)]
pub struct MemoryTreeWriter {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    order: RefCell<Vec<PathBuf>>,
}

impl MemoryTreeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.order.borrow().clone()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl TreeWriter for MemoryTreeWriter {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path) || self.files.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let parent_exists = path
            .parent()
            .is_none_or(|parent| parent.as_os_str().is_empty() || self.has_dir(parent));
        if !parent_exists {
            return Err(io::Error::new(io::ErrorKind::NotFound, "parent directory missing"));
        }
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_vec());
        self.order.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Memory tree that fails the first operation whose path ends with a given suffix.
#[derive(Debug)]
pub struct FailingTreeWriter {
    inner: MemoryTreeWriter,
    suffix: PathBuf,
    on_dir: bool,
    kind: io::ErrorKind,
}

impl FailingTreeWriter {
    pub fn on_write(suffix: &str, kind: io::ErrorKind) -> Self {
        Self { inner: MemoryTreeWriter::new(), suffix: PathBuf::from(suffix), on_dir: false, kind }
    }

    pub fn on_dir(suffix: &str, kind: io::ErrorKind) -> Self {
        Self { inner: MemoryTreeWriter::new(), suffix: PathBuf::from(suffix), on_dir: true, kind }
    }

    pub fn inner(&self) -> &MemoryTreeWriter {
        &self.inner
    }

    fn fail(&self) -> io::Error {
        io::Error::new(self.kind, format!("injected failure at {}", self.suffix.display()))
    }
}

impl TreeWriter for FailingTreeWriter {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.on_dir && path.ends_with(&self.suffix) {
            return Err(self.fail());
        }
        self.inner.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if !self.on_dir && path.ends_with(&self.suffix) {
            return Err(self.fail());
        }
        self.inner.write_file(path, contents)
    }
}
