//! Infrastructure adapters for Formwork.
//!
//! This crate implements the ports defined in
//! `formwork_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod bootstrap;
pub mod filesystem;

// Re-export commonly used adapters
pub use bootstrap::{FakeBootstrap, ProcessBootstrap};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
