//! Application service: reconcile an entry with its pinned remote.
//!
//! `diff` answers "has the local definition drifted from upstream?" and
//! `pull` refreshes the images of the entry's service.

use std::io::Write;

use anyhow::{Context, Result};

use crate::application::ports::{ComposeEngine, DefinitionResolver, DiffOutcome, VersionControl};
use crate::application::services::definition;
use crate::domain::compose::{blob_ref, repo_relative_path};
use crate::domain::{Entry, RemotePin};

/// Whether the local definition of `entry` has diverged from its pin.
///
/// Entries without a remote never diverge. When a comparison is made, the
/// diff text is written to `sink`. Any inconclusive comparison (fetch
/// failure, unknown revision, missing definition, git unavailable) counts
/// as diverged.
pub async fn diff(
    vcs: &impl VersionControl,
    resolver: &impl DefinitionResolver,
    entry: &Entry,
    sink: &mut impl Write,
) -> bool {
    let Some(pin) = entry.pin() else {
        return false;
    };
    match compare(vcs, resolver, entry, pin).await {
        Ok(DiffOutcome::Clean) => false,
        Ok(DiffOutcome::Diverged(text)) => {
            if let Err(e) = sink.write_all(text.as_bytes()) {
                tracing::warn!(entry = %entry, error = %e, "cannot write diff output");
            }
            true
        }
        Err(e) => {
            tracing::warn!(entry = %entry, error = %format!("{e:#}"), "divergence check inconclusive");
            true
        }
    }
}

async fn compare(
    vcs: &impl VersionControl,
    resolver: &impl DefinitionResolver,
    entry: &Entry,
    pin: &RemotePin,
) -> Result<DiffOutcome> {
    let files = definition::definition_files(resolver, entry)?;
    let local = resolver.canonical(
        files
            .first()
            .context("definition list unexpectedly empty")?,
    );
    let dir = entry.source_path();

    let branch = match pin.branch() {
        Some(branch) => branch.to_string(),
        None => vcs
            .active_branch(dir)
            .await
            .context("resolving active branch")?,
    };
    vcs.fetch(dir, pin.remote())
        .await
        .with_context(|| format!("fetching {}", pin.remote()))?;

    let toplevel = match vcs.toplevel(dir).await {
        Ok(top) => Some(resolver.canonical(&top)),
        Err(e) => {
            tracing::debug!(error = %format!("{e:#}"), "repository top-level unknown");
            None
        }
    };
    let relative = repo_relative_path(&local, toplevel.as_deref());
    let target = blob_ref(&pin.revision(&branch), &relative);
    tracing::debug!(%target, local = %local.display(), "comparing definition with remote");
    vcs.diff(dir, &target, &local).await
}

/// Pull the images of `entry`'s service. Returns the service name.
///
/// # Errors
///
/// Returns an error if the service is not declared or the engine fails.
/// The registry is never affected.
pub async fn pull(
    engine: &impl ComposeEngine,
    resolver: &impl DefinitionResolver,
    entry: &Entry,
) -> Result<String> {
    let service = definition::service(resolver, entry)?;
    let files = definition::definition_files(resolver, entry)?;
    engine.pull(&files, &service).await?;
    Ok(service)
}
