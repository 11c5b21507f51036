//! `dip list`: installed services and what they track.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;
use crate::application::services::listing;

/// Run `dip list`.
///
/// # Errors
///
/// This command does not currently fail; per-entry git errors are shown
/// inline.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let registry = app.store.load();
    let rows = listing::list(&app.vcs, &registry).await;
    app.renderer().render_listing(&rows);
    Ok(ExitCode::SUCCESS)
}
