//! Application service: hand the process over to `docker-compose run`.

use std::process::ExitCode;

use crate::application::ports::ProcessLauncher;
use crate::domain::compose::COMPOSE_EXECUTABLE;
use crate::domain::{Entry, ExecError, Invocation};

/// Build the `docker-compose run` invocation for `entry`.
///
/// # Errors
///
/// Returns [`ExecError::ExecutableNotFound`] if `docker-compose` is not on
/// `PATH`.
pub fn invocation(
    launcher: &impl ProcessLauncher,
    entry: &Entry,
    extra: &[String],
) -> Result<Invocation, ExecError> {
    let program = launcher.locate(COMPOSE_EXECUTABLE)?;
    let mut argv = vec![COMPOSE_EXECUTABLE.to_string()];
    argv.extend(entry.run_args(extra));
    Ok(Invocation {
        program,
        argv,
        cwd: entry.source_path().to_path_buf(),
    })
}

/// Replace the current process with `docker-compose run` for `entry`.
///
/// Only returns on launch failure, or with the child's status on platforms
/// without process replacement.
///
/// # Errors
///
/// Returns an [`ExecError`] if the executable cannot be located or started.
pub fn run(
    launcher: &impl ProcessLauncher,
    entry: &Entry,
    extra: &[String],
) -> Result<ExitCode, ExecError> {
    let invocation = invocation(launcher, entry, extra)?;
    tracing::debug!(
        program = %invocation.program.display(),
        argv = ?invocation.argv,
        cwd = %invocation.cwd.display(),
        "exec"
    );
    launcher.exec(&invocation)
}
