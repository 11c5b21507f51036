//! Colour palette for terminal output.

use owo_colors::Style;

/// Styles applied to each kind of text dip prints. All plain by default.
#[derive(Default, Clone, Copy)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Progress arrows.
    pub info: Style,
    /// Entry names in `dip list`.
    pub name: Style,
    /// Definition paths.
    pub dim: Style,
    /// Pinned `remote/branch`.
    pub remote: Style,
}

impl Styles {
    /// The coloured palette, used when the target stream is a terminal.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().blue(),
            name: Style::new().bold(),
            dim: Style::new().dimmed(),
            remote: Style::new().cyan(),
        }
    }
}
