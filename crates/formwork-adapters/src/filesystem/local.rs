//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use formwork_core::{
    application::{ports::Filesystem, ApplicationError},
    error::FormworkResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FormworkResult<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            ApplicationError::DirectoryCreate {
                path: path.to_path_buf(),
                reason: io_reason(&e),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> FormworkResult<()> {
        std::fs::write(path, content).map_err(|e| {
            ApplicationError::FileWrite {
                path: path.to_path_buf(),
                reason: io_reason(&e),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn io_reason(e: &io::Error) -> String {
    e.to_string()
}
