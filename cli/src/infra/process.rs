//! Infrastructure implementation of the `ProcessLauncher` port.

use std::path::PathBuf;
use std::process::{Command, ExitCode};

use crate::application::ports::ProcessLauncher;
use crate::domain::{ExecError, Invocation};

/// Resolves executables with `which` and replaces the current process.
pub struct SystemProcess;

fn command(invocation: &Invocation) -> Command {
    let mut cmd = Command::new(&invocation.program);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        if let Some(arg0) = invocation.argv.first() {
            cmd.arg0(arg0);
        }
    }
    cmd.args(invocation.argv.iter().skip(1));
    cmd.current_dir(&invocation.cwd);
    cmd
}

impl ProcessLauncher for SystemProcess {
    fn locate(&self, program: &str) -> Result<PathBuf, ExecError> {
        which::which(program).map_err(|e| {
            tracing::debug!(program, error = %e, "executable lookup failed");
            ExecError::ExecutableNotFound(program.to_string())
        })
    }

    #[cfg(unix)]
    fn exec(&self, invocation: &Invocation) -> Result<ExitCode, ExecError> {
        use std::os::unix::process::CommandExt;
        // `exec` only returns on failure.
        let source = command(invocation).exec();
        Err(ExecError::Launch {
            program: invocation.program.display().to_string(),
            source,
        })
    }

    #[cfg(not(unix))]
    fn exec(&self, invocation: &Invocation) -> Result<ExitCode, ExecError> {
        let status = command(invocation)
            .status()
            .map_err(|source| ExecError::Launch {
                program: invocation.program.display().to_string(),
                source,
            })?;
        Ok(status
            .code()
            .and_then(|c| u8::try_from(c).ok())
            .map_or(ExitCode::FAILURE, ExitCode::from))
    }
}
