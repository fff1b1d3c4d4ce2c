//! Scaffold engine - main application orchestrator.
//!
//! One public operation per artifact kind, each a short state machine:
//!
//! 1. Validate the name
//! 2. Plan the target directory (for projects: existence check + create)
//! 3. Bootstrap (projects only; external process via the `Bootstrap` port)
//! 4. Render the file set
//! 5. Write it
//!
//! No retries anywhere; every failure is terminal for that invocation and is
//! surfaced to the caller, never swallowed.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Bootstrap, BootstrapCommand, Filesystem},
        services::file_writer::FileWriter,
        ApplicationError,
    },
    domain::{planner, templates, ArtifactKind, ValidName},
    error::FormworkResult,
};

/// Result of a successful scaffold invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Absolute target directory the artifact landed in.
    pub target: PathBuf,
    /// Relative paths written beneath `target`, in render order.
    pub written: Vec<PathBuf>,
}

/// Main scaffolding engine.
///
/// Holds the injected capabilities (filesystem, bootstrap process) and the
/// project root the CLI resolved. The root is passed in rather than read
/// from ambient process state so the engine is testable without a real
/// process environment.
pub struct ScaffoldEngine {
    filesystem: Box<dyn Filesystem>,
    bootstrap: Box<dyn Bootstrap>,
    root: PathBuf,
}

impl ScaffoldEngine {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        bootstrap: Box<dyn Bootstrap>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            bootstrap,
            root: root.into(),
        }
    }

    /// Scaffold a new project: vite skeleton via the bootstrap collaborator,
    /// then the generated entry/test files and jest config.
    ///
    /// The target directory must not exist; it is created here, before
    /// bootstrap runs, and is NOT cleaned up if bootstrap fails (the process
    /// output usually explains the failure better than an empty directory
    /// would).
    #[instrument(skip_all, fields(name = raw_name))]
    pub fn scaffold_project(&self, raw_name: &str) -> FormworkResult<Summary> {
        let name = ValidName::parse(raw_name, ArtifactKind::Project)?;
        let target = planner::target_dir(&self.root, ArtifactKind::Project, &name);

        if self.filesystem.exists(&target) {
            return Err(ApplicationError::TargetExists { path: target }.into());
        }
        self.filesystem.create_dir_all(&target)?;

        info!(target = %target.display(), "bootstrapping project");
        self.bootstrap
            .run(&BootstrapCommand::create_vite_app(name.as_str(), &self.root))?;
        self.bootstrap.run(&BootstrapCommand::install_jest(&target))?;

        self.render_and_write(ArtifactKind::Project, &name, target)
    }

    /// Scaffold a component under `src/components/<name>/`.
    ///
    /// The directory may be created fresh; same-named files from an earlier
    /// run are overwritten.
    #[instrument(skip_all, fields(name = raw_name))]
    pub fn scaffold_component(&self, raw_name: &str) -> FormworkResult<Summary> {
        let name = ValidName::parse(raw_name, ArtifactKind::Component)?;
        let target = planner::target_dir(&self.root, ArtifactKind::Component, &name);
        self.render_and_write(ArtifactKind::Component, &name, target)
    }

    /// Scaffold a hook into the shared `src/hooks/` directory.
    #[instrument(skip_all, fields(name = raw_name))]
    pub fn scaffold_hook(&self, raw_name: &str) -> FormworkResult<Summary> {
        let name = ValidName::parse(raw_name, ArtifactKind::Hook)?;
        let target = planner::target_dir(&self.root, ArtifactKind::Hook, &name);
        self.render_and_write(ArtifactKind::Hook, &name, target)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Steps 4-6 shared by every kind: render, validate, persist.
    fn render_and_write(
        &self,
        kind: ArtifactKind,
        name: &ValidName,
        target: PathBuf,
    ) -> FormworkResult<Summary> {
        let files = templates::render(kind, name);
        files.validate()?;

        let written = FileWriter::new(&*self.filesystem).write(&target, &files)?;

        info!(
            kind = %kind,
            target = %target.display(),
            files = written.len(),
            "scaffold completed"
        );
        Ok(Summary { target, written })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockBootstrap, MockFilesystem};
    use crate::domain::DomainError;
    use crate::error::FormworkError;
    use std::path::Path;

    fn engine(fs: MockFilesystem, boot: MockBootstrap) -> ScaffoldEngine {
        ScaffoldEngine::new(Box::new(fs), Box::new(boot), "/work")
    }

    fn permissive_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    // ── validation gate ───────────────────────────────────────────────────

    #[test]
    fn invalid_name_rejects_before_any_side_effect() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(0);
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);
        let mut boot = MockBootstrap::new();
        boot.expect_run().times(0);

        let result = engine(fs, boot).scaffold_project("../escape");
        assert!(matches!(
            result,
            Err(FormworkError::Domain(DomainError::UnsafeName { .. }))
        ));
    }

    #[test]
    fn identifier_rules_enforced_for_components() {
        let mut boot = MockBootstrap::new();
        boot.expect_run().times(0);

        let result = engine(MockFilesystem::new(), boot).scaffold_component("1abc");
        assert!(matches!(
            result,
            Err(FormworkError::Domain(DomainError::InvalidIdentifier { .. }))
        ));
    }

    // ── project state machine ─────────────────────────────────────────────

    #[test]
    fn project_collision_is_fatal_before_bootstrap() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/work/demo"))
            .return_const(true);
        fs.expect_create_dir_all().times(0);
        let mut boot = MockBootstrap::new();
        boot.expect_run().times(0);

        let result = engine(fs, boot).scaffold_project("demo");
        assert!(matches!(
            result,
            Err(FormworkError::Application(ApplicationError::TargetExists { .. }))
        ));
    }

    #[test]
    fn project_runs_vite_then_jest_then_writes() {
        let fs = permissive_fs();
        let mut boot = MockBootstrap::new();
        let mut seq = mockall::Sequence::new();
        boot.expect_run()
            .withf(|cmd| cmd.args.first().map(String::as_str) == Some("create"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        boot.expect_run()
            .withf(|cmd| cmd.args.first().map(String::as_str) == Some("install"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let summary = engine(fs, boot).scaffold_project("demo").unwrap();
        assert_eq!(summary.target, PathBuf::from("/work/demo"));
        assert_eq!(
            summary.written,
            [
                PathBuf::from("src/App.tsx"),
                PathBuf::from("src/App.test.tsx"),
                PathBuf::from("jest.config.js"),
            ]
        );
    }

    #[test]
    fn bootstrap_failure_is_terminal_and_skips_rendering() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        // Only the planning-time directory creation happens.
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file().times(0);

        let mut boot = MockBootstrap::new();
        boot.expect_run().times(1).returning(|cmd| {
            Err(ApplicationError::BootstrapFailed {
                command: cmd.to_string(),
                reason: "exited with status 1".into(),
            }
            .into())
        });

        let result = engine(fs, boot).scaffold_project("demo");
        assert!(matches!(
            result,
            Err(FormworkError::Application(ApplicationError::BootstrapFailed { .. }))
        ));
    }

    // ── component / hook paths ────────────────────────────────────────────

    #[test]
    fn component_writes_into_named_subdirectory_without_bootstrap() {
        let fs = permissive_fs();
        let mut boot = MockBootstrap::new();
        boot.expect_run().times(0);

        let summary = engine(fs, boot).scaffold_component("Widget").unwrap();
        assert_eq!(summary.target, PathBuf::from("/work/src/components/Widget"));
        assert_eq!(
            summary.written,
            [PathBuf::from("Widget.tsx"), PathBuf::from("Widget.test.tsx")]
        );
    }

    #[test]
    fn component_has_no_existence_guard() {
        // Unlike projects, a pre-existing component directory is reused and
        // same-named files are overwritten.
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(0);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        let mut boot = MockBootstrap::new();
        boot.expect_run().times(0);

        assert!(engine(fs, boot).scaffold_component("Widget").is_ok());
    }

    #[test]
    fn hook_writes_single_file_into_shared_directory() {
        let fs = permissive_fs();
        let mut boot = MockBootstrap::new();
        boot.expect_run().times(0);

        let summary = engine(fs, boot).scaffold_hook("Counter").unwrap();
        assert_eq!(summary.target, PathBuf::from("/work/src/hooks"));
        assert_eq!(summary.written, [PathBuf::from("Counter.tsx")]);
    }
}
