//! File persistence for rendered file sets.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::FileSet,
    error::FormworkResult,
};

/// Writes a rendered [`FileSet`] beneath a target directory.
///
/// Ensures the directory chain exists, then writes each file in render
/// order. Existing files at the exact same path are overwritten
/// (last-write-wins). A failure aborts the remaining writes in the set
/// without rolling back files already written — callers must treat a failed
/// scaffold as potentially leaving a partially populated target directory.
pub struct FileWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write every file in `files` under `target`.
    ///
    /// Returns the relative paths written, in order.
    #[instrument(skip_all, fields(target = %target.display(), files = files.len()))]
    pub fn write(&self, target: &Path, files: &FileSet) -> FormworkResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(target)?;

        let mut written = Vec::with_capacity(files.len());
        for file in files.files() {
            let path = target.join(&file.path);

            // Ensure parent exists (e.g. `src/` inside a fresh project).
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "file written");
            written.push(file.path.clone());
        }

        Ok(written)
    }
}
