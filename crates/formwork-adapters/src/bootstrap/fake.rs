//! Recording bootstrap fake for tests.

use std::sync::{Arc, Mutex};

use formwork_core::{
    application::{
        ports::{Bootstrap, BootstrapCommand},
        ApplicationError,
    },
    error::FormworkResult,
};

/// Test double for the bootstrap port.
///
/// Records every command it is asked to run and either succeeds or fails
/// all invocations, so engine control flow can be exercised without
/// touching npm.
#[derive(Debug, Clone, Default)]
pub struct FakeBootstrap {
    fail: bool,
    commands: Arc<Mutex<Vec<BootstrapCommand>>>,
}

impl FakeBootstrap {
    /// A fake whose every invocation succeeds.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// A fake whose every invocation fails with a non-zero exit.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Commands recorded so far, in invocation order.
    pub fn commands(&self) -> Vec<BootstrapCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl Bootstrap for FakeBootstrap {
    fn run(&self, command: &BootstrapCommand) -> FormworkResult<()> {
        self.commands.lock().unwrap().push(command.clone());

        if self.fail {
            return Err(ApplicationError::BootstrapFailed {
                command: command.to_string(),
                reason: "exited with status 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
