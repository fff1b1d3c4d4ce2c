//! Application layer errors.
//!
//! These errors represent failures in orchestration and persistence, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Project target directory already exists (collision is fatal, no merge).
    #[error("target directory already exists at {path}")]
    TargetExists { path: PathBuf },

    /// The external bootstrap process failed to start or exited non-zero.
    #[error("bootstrap command failed: {command}: {reason}")]
    BootstrapFailed { command: String, reason: String },

    /// Directory creation failed (permissions, invalid path).
    #[error("failed to create directory {path}: {reason}")]
    DirectoryCreate { path: PathBuf, reason: String },

    /// An individual file write failed.
    #[error("failed to write file {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::BootstrapFailed { command, .. } => vec![
                format!("The external command did not succeed: {}", command),
                "Ensure npm is installed and on your PATH".into(),
                "Check the command output above for details".into(),
            ],
            Self::DirectoryCreate { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::FileWrite { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check file permissions and available disk space".into(),
                "A failed scaffold may leave a partially populated directory; \
                 clean it up before re-running"
                    .into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::BootstrapFailed { .. }
            | Self::DirectoryCreate { .. }
            | Self::FileWrite { .. } => ErrorCategory::Internal,
        }
    }
}
