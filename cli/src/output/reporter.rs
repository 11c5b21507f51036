//! `ProgressReporter` backed by the terminal.

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, Stream};

/// Prints registry service progress as status lines: steps and successes on
/// stdout, warnings on stderr. Silent in quiet mode.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        self.ctx.status(Stream::Stdout, "→", self.ctx.styles.info, message);
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.status(Stream::Stderr, "!", self.ctx.err_styles.warning, message);
    }
}
