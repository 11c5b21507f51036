//! `dip diff`: compare a service's definition with its remote.

use std::io::Write as _;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;
use crate::application::services::reconcile;
use crate::output::human::DIVERGENCE_WARNING;

/// Arguments for the diff command.
#[derive(Args)]
pub struct DiffArgs {
    /// Name of the installed service
    pub name: String,

    /// Exit with status 1 when the service has diverged
    #[arg(long)]
    pub exit_code: bool,
}

/// Run `dip diff <name>`.
///
/// # Errors
///
/// Returns an error if `name` is not installed or stdout cannot be written.
pub async fn run(app: &AppContext, args: &DiffArgs) -> Result<ExitCode> {
    let registry = app.store.load();
    let entry = registry.lookup(&args.name)?;

    let mut buf = Vec::new();
    let diverged = reconcile::diff(&app.vcs, &app.resolver, entry, &mut buf).await;
    if buf.is_empty() {
        if diverged {
            app.output.warn(DIVERGENCE_WARNING);
        }
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&buf)?;
        stdout.flush()?;
    }

    if diverged && args.exit_code {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
