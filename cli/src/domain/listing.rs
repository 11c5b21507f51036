//! Rows rendered by `dip list`.

use std::path::PathBuf;

/// Placeholder shown when the version-control query for a row fails.
pub const VCS_ERROR_MARKER: &str = "[git error]";

/// What an entry tracks upstream, as displayed in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tracking {
    /// No remote configured.
    Untracked,
    /// `<remote>/<branch>`, either pinned or resolved from the working copy.
    Remote(String),
    /// The active-branch query failed for this entry.
    VcsError,
}

/// One line of `dip list` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub name: String,
    pub path: PathBuf,
    pub tracking: Tracking,
}

impl ListingRow {
    /// `name path [tracking]`, space separated.
    #[must_use]
    pub fn line(&self) -> String {
        let base = format!("{} {}", self.name, self.path.display());
        match &self.tracking {
            Tracking::Untracked => base,
            Tracking::Remote(revision) => format!("{base} {revision}"),
            Tracking::VcsError => format!("{base} {VCS_ERROR_MARKER}"),
        }
    }
}
