//! Application service: rows for `dip list`.

use crate::application::ports::VersionControl;
use crate::domain::{ListingRow, Registry, Tracking};

/// One row per entry, in name order.
///
/// Entries tracking a remote without a pinned branch show the branch
/// currently checked out in their working copy. A failing query marks only
/// that row; the remaining entries are still listed.
pub async fn list(vcs: &impl VersionControl, registry: &Registry) -> Vec<ListingRow> {
    let mut rows = Vec::with_capacity(registry.len());
    for entry in registry.entries() {
        let tracking = match entry.pin() {
            None => Tracking::Untracked,
            Some(pin) if pin.branch().is_some() => Tracking::Remote(pin.to_string()),
            Some(pin) => match vcs.active_branch(entry.source_path()).await {
                Ok(branch) => Tracking::Remote(pin.revision(&branch)),
                Err(e) => {
                    tracing::warn!(entry = %entry, error = %format!("{e:#}"), "active branch query failed");
                    Tracking::VcsError
                }
            },
        };
        rows.push(ListingRow {
            name: entry.name().to_string(),
            path: entry.source_path().to_path_buf(),
            tracking,
        });
    }
    rows
}
