//! Formwork Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Formwork
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          formwork-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (ScaffoldEngine, FileWriter)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, Bootstrap)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    formwork-adapters (Infrastructure)   │
//! │  (LocalFilesystem, ProcessBootstrap)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (ArtifactKind, ValidName, FileSet)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formwork_core::application::ScaffoldEngine;
//!
//! // Build the engine with injected adapters and a project root.
//! let engine = ScaffoldEngine::new(filesystem, bootstrap, root);
//! let summary = engine.scaffold_component("Widget")?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{Bootstrap, BootstrapCommand, Filesystem},
        ScaffoldEngine, Summary,
    };
    pub use crate::domain::{ArtifactKind, FileSet, GeneratedFile, ValidName};
    pub use crate::error::{FormworkError, FormworkResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
