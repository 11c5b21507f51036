//! Spinner for long-running docker-compose calls.

#![allow(clippy::expect_used)] // templates below are literals

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];

/// An indeterminate spinner on stderr. When disabled it is backed by a
/// hidden bar, so callers never branch on whether it is visible.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start ticking with `msg`, or stay invisible when `enabled` is false.
    ///
    /// # Panics
    ///
    /// Never in practice: the template is a literal.
    #[must_use]
    pub fn start(enabled: bool, msg: &str) -> Self {
        if !enabled {
            return Self { bar: ProgressBar::hidden() };
        }
        let bar = ProgressBar::new_spinner().with_style(
            ProgressStyle::default_spinner()
                .tick_strings(TICKS)
                .template("  {spinner:.cyan} {msg}")
                .expect("spinner template"),
        );
        bar.set_message(msg.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Replace the spinner with `✓ msg`.
    pub fn done(self, msg: &str) {
        self.finish("✓", msg);
    }

    /// Replace the spinner with `✗ msg`.
    pub fn failed(self, msg: &str) {
        self.finish("✗", msg);
    }

    fn finish(self, glyph: &'static str, msg: &str) {
        self.bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {prefix} {msg}")
                .expect("finish template"),
        );
        self.bar.set_prefix(glyph);
        self.bar.finish_with_message(msg.to_string());
    }
}
