//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::process`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while persisting or querying the registry document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot save configuration to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot remove configuration {}: {source}", path.display())]
    Reset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No configuration value at '{key}'")]
    UnknownKey { key: String },
}

// ── Entry errors ──────────────────────────────────────────────────────────────

/// Errors related to a single installed entry.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("'{0}' is not installed.")]
    NotFound(String),

    #[error("Invalid name '{0}': must start with a letter or digit and contain only letters, digits, '.', '_' or '-'")]
    InvalidName(String),

    #[error("Invalid environment variable '{0}': expected KEY=VALUE")]
    InvalidEnv(String),

    #[error("Invalid remote '{0}': expected <remote> or <remote>/<branch>")]
    InvalidRemote(String),

    #[error("Branch '{0}' is set without a remote")]
    BranchWithoutRemote(String),

    #[error("No docker-compose definition found in {}", .0.display())]
    NoDefinition(PathBuf),

    #[error("Service '{service}' is not defined in {}", path.display())]
    ServiceNotFound { service: String, path: PathBuf },
}

// ── Execution errors ──────────────────────────────────────────────────────────

/// Errors raised when launching or driving the compose tooling.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Cannot find '{0}' on PATH. Is docker-compose installed?")]
    ExecutableNotFound(String),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to pull images for '{service}': {message}")]
    Pull { service: String, message: String },
}
