//! Writes rendered files beneath a service root.

use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, GeneratedTree, RenderedFile};
use crate::ports::TreeWriter;

/// Write `files` under `root` in order, creating ancestors as needed.
///
/// Stops at the first failure. Files written before it stay on disk.
pub fn materialize<W: TreeWriter + ?Sized>(
    writer: &W,
    root: &Path,
    files: &[RenderedFile],
) -> Result<GeneratedTree, AppError> {
    writer
        .create_dir_all(root)
        .map_err(|source| AppError::Materialization { path: root.to_path_buf(), source })?;

    for file in files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            writer.create_dir_all(parent).map_err(|source| AppError::Materialization {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        writer
            .write_file(&path, file.contents.as_bytes())
            .map_err(|source| AppError::Materialization { path: path.clone(), source })?;
        debug!(path = %file.path, bytes = file.contents.len(), "wrote file");
    }

    Ok(GeneratedTree::new(root.to_path_buf(), files))
}
