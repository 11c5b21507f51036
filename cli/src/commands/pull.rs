//! `dip pull`: refresh a service's images.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;
use crate::application::services::reconcile;
use crate::output::progress::Spinner;

/// Run `dip pull <name>`.
///
/// # Errors
///
/// Returns an error if `name` is not installed, its service is not declared,
/// or docker-compose fails.
pub async fn run(app: &AppContext, name: &str) -> Result<ExitCode> {
    let registry = app.store.load();
    let entry = registry.lookup(name)?;

    let spinner = Spinner::start(app.output.show_progress(), &format!("Pulling {entry}..."));
    match reconcile::pull(&app.compose, &app.resolver, entry).await {
        Ok(service) => {
            spinner.done(&format!("Pulled {service}"));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            spinner.failed(&format!("Pull failed for {entry}"));
            Err(e)
        }
    }
}
