//! Rendered output files and the materialized tree.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// One output file ready to be written, relative to the service root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub contents: String,
}

impl RenderedFile {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { path: path.into(), contents: contents.into() }
    }
}

/// A fully written service tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTree {
    root: PathBuf,
    files: Vec<String>,
    fingerprint: String,
}

impl GeneratedTree {
    pub fn new(root: PathBuf, files: &[RenderedFile]) -> Self {
        Self {
            root,
            files: files.iter().map(|file| file.path.clone()).collect(),
            fingerprint: fingerprint(files),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative paths in the order they were written.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// SHA-256 over every written path and its contents, in write order.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// Hash a rendered file list; identical inputs give identical digests.
pub fn fingerprint(files: &[RenderedFile]) -> String {
    let mut hasher = Sha256::new();
    for file in files {
        hasher.update(file.path.as_bytes());
        hasher.update([0u8]);
        hasher.update(file.contents.as_bytes());
        hasher.update([0u8]);
    }
    hasher.finalize().iter().map(|byte| format!("{:02x}", byte)).collect()
}
