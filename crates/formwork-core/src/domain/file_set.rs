use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// One rendered file ready for materialization.
///
/// The path is relative to the artifact's target directory. Immutable once
/// rendered; content is fully determined by (kind, name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Ordered set of files for one scaffold invocation.
///
/// This is the output of template rendering. It contains no business logic,
/// only data; ordering is irrelevant to correctness but fixed for
/// determinism in tests.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<GeneratedFile>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.push(GeneratedFile::new(path, content));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidFileSet("file set is empty".into()));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::InvalidFileSet(format!(
                    "duplicate path: {path_str}"
                )));
            }
            if file.path.is_absolute() {
                return Err(DomainError::InvalidFileSet(format!(
                    "absolute path not allowed: {path_str}"
                )));
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_in_order() {
        let set = FileSet::new()
            .with_file("a.tsx", "a")
            .with_file("b.tsx", "b");

        assert_eq!(set.len(), 2);
        let paths: Vec<_> = set.paths().collect();
        assert_eq!(paths, [Path::new("a.tsx"), Path::new("b.tsx")]);
    }

    #[test]
    fn validates_duplicates() {
        let set = FileSet::new()
            .with_file("main.tsx", "")
            .with_file("main.tsx", "");

        assert!(set.validate().is_err());
    }

    #[test]
    fn validates_absolute_paths() {
        let set = FileSet::new().with_file("/etc/passwd", "nope");
        assert!(set.validate().is_err());
    }

    #[test]
    fn validates_empty() {
        assert!(FileSet::new().validate().is_err());
    }
}
