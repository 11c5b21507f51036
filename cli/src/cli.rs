//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Install and run docker-compose services as local commands
#[derive(Parser)]
#[command(
    name = "dip",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install a service as a local command
    Install(commands::install::InstallArgs),

    /// Remove an installed service
    Uninstall(commands::NameArg),

    /// List installed services
    List,

    /// Show a service's definition
    Show(commands::NameArg),

    /// Compare a service's definition with its remote
    Diff(commands::diff::DiffArgs),

    /// Pull a service's images
    Pull(commands::NameArg),

    /// Run a service
    Run(commands::run::RunArgs),

    /// Print registry values
    Config(commands::config::ConfigArgs),

    /// Delete the registry
    Reset(commands::reset::ResetArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            verbose,
            command,
        } = self;
        crate::logging::init(verbose);
        let app = AppContext::new(&AppFlags { no_color, quiet })?;

        match command {
            Command::Install(args) => commands::install::run(&app, args),
            Command::Uninstall(args) => commands::uninstall::run(&app, &args.name),
            Command::List => commands::list::run(&app).await,
            Command::Show(args) => commands::show::run(&app, &args.name).await,
            Command::Diff(args) => commands::diff::run(&app, &args).await,
            Command::Pull(args) => commands::pull::run(&app, &args.name).await,
            Command::Run(args) => commands::run::run(&app, &args),
            Command::Config(args) => commands::config::run(&app, &args),
            Command::Reset(args) => commands::reset::run(&app, &args),
        }
    }
}
