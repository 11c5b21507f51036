//! Application context: unified state passed to every command handler.
//!
//! `AppContext` owns the output context and one instance of every
//! infrastructure adapter. Command handlers borrow what they need from it.

use anyhow::Result;

use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::compose::{ComposeCli, ComposeFiles};
use crate::infra::git::GitCli;
use crate::infra::launcher::LocalLauncherWriter;
use crate::infra::process::SystemProcess;
use crate::infra::registry_store::JsonRegistryStore;
use crate::output::{HumanRenderer, OutputContext, TerminalReporter};

/// Environment variable that answers every prompt with "yes".
pub const YES_ENV: &str = "DIP_YES";

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Registry persistence.
    pub store: JsonRegistryStore,
    /// Git queries for divergence checks and listings.
    pub vcs: GitCli<TokioCommandRunner>,
    /// docker-compose image operations.
    pub compose: ComposeCli<TokioCommandRunner>,
    /// Definition file lookup.
    pub resolver: ComposeFiles,
    /// Launcher shim writer.
    pub launcher: LocalLauncherWriter,
    /// Executable lookup and process replacement.
    pub process: SystemProcess,
    /// When `true`, skip interactive prompts and assume consent.
    ///
    /// Set when the `CI` or `DIP_YES` environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry location cannot be determined.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let non_interactive =
            std::env::var_os("CI").is_some() || std::env::var_os(YES_ENV).is_some();

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            store: JsonRegistryStore::new()?,
            vcs: GitCli::new(TokioCommandRunner::default()),
            compose: ComposeCli::new(TokioCommandRunner::default()),
            resolver: ComposeFiles,
            launcher: LocalLauncherWriter,
            process: SystemProcess,
            non_interactive,
        })
    }

    /// Human renderer bound to this context's output.
    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }

    /// Progress reporter bound to this context's output.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Ask the user for confirmation, defaulting to "no".
    ///
    /// When `non_interactive` is `true`, returns `true` without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.non_interactive {
            return Ok(true);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
