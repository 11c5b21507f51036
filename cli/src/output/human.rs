//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::{ListingRow, Tracking};
use crate::domain::listing::VCS_ERROR_MARKER;
use crate::output::{OutputContext, Styles};

/// Warning printed by `dip show` when the local definition cannot be trusted.
pub const DIVERGENCE_WARNING: &str = "Local service has diverged from remote or is inaccessible.";

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render `dip list`: a blank line, one row per entry, a blank line.
    pub fn render_listing(&self, rows: &[ListingRow]) {
        print!("{}", listing_text(rows, &self.ctx.styles));
    }

    /// Render the divergence banner shown before definitions.
    pub fn render_divergence(&self, sleep: Option<u64>) {
        print!("{}", divergence_text(sleep, &self.ctx.styles));
    }

    /// Render each definition surrounded by blank lines.
    pub fn render_definitions(&self, definitions: &[String]) {
        print!("{}", definitions_text(definitions));
    }
}

/// Text of `dip list` for `rows`.
#[must_use]
pub fn listing_text(rows: &[ListingRow], styles: &Styles) -> String {
    let mut out = String::from("\n");
    for row in rows {
        let mut line = format!(
            "{} {}",
            row.name.style(styles.name),
            row.path.display().style(styles.dim)
        );
        match &row.tracking {
            Tracking::Untracked => {}
            Tracking::Remote(revision) => {
                line.push(' ');
                line.push_str(&revision.style(styles.remote).to_string());
            }
            Tracking::VcsError => {
                line.push(' ');
                line.push_str(&VCS_ERROR_MARKER.style(styles.error).to_string());
            }
        }
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Divergence banner, with the pause notice when `sleep` is set.
#[must_use]
pub fn divergence_text(sleep: Option<u64>, styles: &Styles) -> String {
    let mut out = format!("\n{}\n", DIVERGENCE_WARNING.style(styles.warning));
    if let Some(secs) = sleep {
        out.push_str(&format!("Sleeping for {secs}s\n\n"));
    }
    out
}

/// Definitions, each preceded by a blank line and followed by one.
#[must_use]
pub fn definitions_text(definitions: &[String]) -> String {
    definitions
        .iter()
        .map(|text| format!("\n{}\n\n", text.trim_end_matches('\n')))
        .collect()
}
