//! Bootstrap adapter that spawns the real external process.

use std::process::{Command, Stdio};

use tracing::{info, instrument};

use formwork_core::{
    application::{
        ports::{Bootstrap, BootstrapCommand},
        ApplicationError,
    },
    error::FormworkResult,
};

/// Production bootstrap implementation using `std::process::Command`.
///
/// The child inherits this process's stdin/stdout/stderr so the package
/// manager's own progress output and prompts reach the user directly. The
/// call blocks until the child exits; there is no timeout.
#[derive(Debug, Clone, Copy)]
pub struct ProcessBootstrap;

impl ProcessBootstrap {
    /// Create a new process bootstrap adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap for ProcessBootstrap {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &BootstrapCommand) -> FormworkResult<()> {
        info!(cwd = %command.cwd.display(), "running bootstrap command");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::BootstrapFailed {
                command: command.to_string(),
                reason: format!("failed to start: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::BootstrapFailed {
                command: command.to_string(),
                reason: match status.code() {
                    Some(code) => format!("exited with status {code}"),
                    None => "terminated by signal".into(),
                },
            }
            .into());
        }

        info!("bootstrap command completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_core::error::FormworkError;
    use std::path::Path;

    // These tests spawn tiny real processes; `true` and `false` are
    // POSIX-guaranteed and cheap.

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_ok() {
        let cmd = BootstrapCommand::new("true", Vec::<String>::new(), Path::new("."));
        assert!(ProcessBootstrap::new().run(&cmd).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_bootstrap_failed() {
        let cmd = BootstrapCommand::new("false", Vec::<String>::new(), Path::new("."));
        let result = ProcessBootstrap::new().run(&cmd);
        match result {
            Err(FormworkError::Application(ApplicationError::BootstrapFailed {
                reason, ..
            })) => {
                assert!(reason.contains("status 1"), "reason: {reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_bootstrap_failed() {
        let cmd = BootstrapCommand::new(
            "formwork-definitely-not-a-real-program",
            Vec::<String>::new(),
            Path::new("."),
        );
        let result = ProcessBootstrap::new().run(&cmd);
        match result {
            Err(FormworkError::Application(ApplicationError::BootstrapFailed {
                reason, ..
            })) => {
                assert!(reason.contains("failed to start"), "reason: {reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
