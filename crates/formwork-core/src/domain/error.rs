// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Name Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("artifact name cannot be empty")]
    EmptyName,

    #[error("artifact name '{name}' is not filesystem-safe: {reason}")]
    UnsafeName { name: String, reason: String },

    #[error("artifact name '{name}' is not a valid identifier: {reason}")]
    InvalidIdentifier { name: String, reason: String },

    // ========================================================================
    // Parsing Errors
    // ========================================================================
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),

    // ========================================================================
    // Rendering Invariant Violations
    // ========================================================================
    #[error("invalid file set: {0}")]
    InvalidFileSet(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Provide a non-empty artifact name".into(),
                "Example: formwork create-component Widget".into(),
            ],
            Self::UnsafeName { name, reason } => vec![
                format!(
                    "'{}' cannot be used as a directory or file name: {}",
                    name, reason
                ),
                "Avoid path separators, '..', and special characters".into(),
            ],
            Self::InvalidIdentifier { name, reason } => vec![
                format!(
                    "'{}' cannot be embedded in generated source code: {}",
                    name, reason
                ),
                "Start with a letter and use only letters, digits, and underscores".into(),
                "Examples: Widget, NavBar, useCounter".into(),
            ],
            Self::UnknownKind(kind) => vec![
                format!("'{}' is not a known artifact kind", kind),
                "Known kinds: project, component, hook".into(),
            ],
            Self::InvalidFileSet(msg) => vec![
                format!("Rendered file set is inconsistent: {}", msg),
                "This is a bug in a template definition, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName
            | Self::UnsafeName { .. }
            | Self::InvalidIdentifier { .. }
            | Self::UnknownKind(_) => ErrorCategory::Validation,
            Self::InvalidFileSet(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
