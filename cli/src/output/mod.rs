//! Terminal presentation: styles, renderers, progress.
//!
//! Stdout carries command results (listings, definitions, diffs, config
//! values). Stderr carries warnings and progress, so each stream gets its
//! own palette depending on whether it is attached to a terminal.

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::fmt::Display;

use console::Term;
use owo_colors::{OwoColorize as _, Style};
pub use human::HumanRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Which standard stream a status line goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Styling and verbosity shared by every command.
pub struct OutputContext {
    /// Palette for stdout.
    pub styles: Styles,
    /// Palette for stderr.
    pub err_styles: Styles,
    /// Suppress status lines and progress.
    pub quiet: bool,
    stderr_tty: bool,
}

impl OutputContext {
    /// Build from the global flags. `NO_COLOR` in the environment has the
    /// same effect as `--no-color`.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let color_allowed = !no_color && std::env::var_os("NO_COLOR").is_none();
        let stderr_tty = Term::stderr().is_term();
        let palette = |tty: bool| {
            if color_allowed && tty {
                Styles::colored()
            } else {
                Styles::default()
            }
        };

        Self {
            styles: palette(Term::stdout().is_term()),
            err_styles: palette(stderr_tty),
            quiet,
            stderr_tty,
        }
    }

    /// Spinners draw on stderr, so they only make sense there on a terminal.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.stderr_tty && !self.quiet
    }

    /// `  ✓ msg` on stdout.
    pub fn success(&self, msg: &str) {
        self.status(Stream::Stdout, "✓", self.styles.success, msg);
    }

    /// `  ⚠ msg` on stderr.
    pub fn warn(&self, msg: &str) {
        self.status(Stream::Stderr, "⚠", self.err_styles.warning, msg);
    }

    /// Print an indented status line with a styled glyph. Nothing is
    /// printed in quiet mode.
    pub fn status(&self, stream: Stream, glyph: &str, style: Style, msg: impl Display) {
        if self.quiet {
            return;
        }
        match stream {
            Stream::Stdout => println!("  {} {msg}", glyph.style(style)),
            Stream::Stderr => eprintln!("  {} {msg}", glyph.style(style)),
        }
    }
}
