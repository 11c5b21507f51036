//! Command implementations

pub mod config;
pub mod diff;
pub mod install;
pub mod list;
pub mod pull;
pub mod reset;
pub mod run;
pub mod show;
pub mod uninstall;

use clap::Args;

/// A single installed-service name.
#[derive(Args)]
pub struct NameArg {
    /// Name of the installed service
    pub name: String,
}
