//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `formwork-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: directory creation, file writes, existence checks
//!   - `Bootstrap`: the external package-manager process invocation
//! - **Driving (Input) Ports**: Called by the CLI, implemented by
//!   [`crate::application::ScaffoldEngine`]

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::FormworkResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `formwork_adapters::filesystem::LocalFilesystem` (production)
/// - `formwork_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The adapter is responsible for mapping I/O failures onto
/// `ApplicationError::DirectoryCreate` / `ApplicationError::FileWrite`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent if the
    /// chain already exists.
    fn create_dir_all(&self, path: &Path) -> FormworkResult<()>;

    /// Write content to a file, overwriting any existing file at that exact
    /// path (last-write-wins, no merge).
    fn write_file(&self, path: &Path, content: &str) -> FormworkResult<()>;

    /// Check if path exists. Queries external state, never mutates it.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external bootstrap collaborator.
///
/// Implemented by:
/// - `formwork_adapters::bootstrap::ProcessBootstrap` (production; blocking,
///   stdio-inheriting process spawn)
/// - `formwork_adapters::bootstrap::FakeBootstrap` (testing; records
///   commands, succeeds or fails on demand)
///
/// The call blocks until the process exits; there is no timeout and no
/// cancellation. A non-zero exit surfaces as
/// `ApplicationError::BootstrapFailed`.
#[cfg_attr(test, mockall::automock)]
pub trait Bootstrap: Send + Sync {
    /// Run one bootstrap command to completion.
    fn run(&self, command: &BootstrapCommand) -> FormworkResult<()>;
}

/// One constructed external command: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl BootstrapCommand {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// `npm create vite@latest <name> -- --template react-ts`, run from the
    /// project root (vite creates the `<name>` directory contents).
    pub fn create_vite_app(name: &str, root: &Path) -> Self {
        Self::new(
            "npm",
            ["create", "vite@latest", name, "--", "--template", "react-ts"],
            root,
        )
    }

    /// `npm install --save-dev jest @types/jest ts-jest`, run inside the
    /// freshly created project directory.
    pub fn install_jest(project_dir: &Path) -> Self {
        Self::new(
            "npm",
            ["install", "--save-dev", "jest", "@types/jest", "ts-jest"],
            project_dir,
        )
    }
}

impl fmt::Display for BootstrapCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
