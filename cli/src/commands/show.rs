//! `dip show`: print a service's definition files.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::RegistryStore;
use crate::application::services::{definition, reconcile};

/// Run `dip show <name>`.
///
/// A divergence warning (and the entry's configured pause) precedes the
/// definitions when the local copy differs from, or cannot be compared with,
/// its remote.
///
/// # Errors
///
/// Returns an error if `name` is not installed or its definition cannot be
/// read.
pub async fn run(app: &AppContext, name: &str) -> Result<ExitCode> {
    let registry = app.store.load();
    let entry = registry.lookup(name)?;

    if reconcile::diff(&app.vcs, &app.resolver, entry, &mut std::io::sink()).await {
        app.renderer().render_divergence(entry.sleep());
        if let Some(secs) = entry.sleep() {
            tokio::time::sleep(Duration::from_secs(secs)).await;
        }
    }

    let definitions = definition::definitions(&app.resolver, entry)?;
    app.renderer().render_definitions(&definitions);
    Ok(ExitCode::SUCCESS)
}
