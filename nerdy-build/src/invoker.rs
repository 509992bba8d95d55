//! Launching external tools.

use std::process::Command;

use tracing::debug;

use crate::command::CommandLine;
use crate::error::BuildError;
use crate::status::ExitStatus;

/// Runs a command line to completion and reports its exit status.
pub trait ProcessInvoker {
    /// Runs `command`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Launch`] when the executable cannot be started.
    /// A tool that starts and then fails is reported through the returned
    /// [`ExitStatus`], not as an error.
    fn invoke(&self, command: &CommandLine) -> Result<ExitStatus, BuildError>;
}

/// Spawns tools as child processes sharing this process's working directory
/// and standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInvoker;

impl ProcessInvoker for SystemInvoker {
    fn invoke(&self, command: &CommandLine) -> Result<ExitStatus, BuildError> {
        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|source| BuildError::Launch {
                program: command.program().to_owned(),
                source,
            })?;
        debug!(program = command.program(), %status, "external tool exited");
        Ok(ExitStatus::from(status))
    }
}
