//! Application layer for Formwork.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldEngine, FileWriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All naming/rendering/planning rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{FileWriter, ScaffoldEngine, Summary};

// Re-export port traits (for adapter implementation)
pub use ports::{Bootstrap, BootstrapCommand, Filesystem};

pub use error::ApplicationError;
