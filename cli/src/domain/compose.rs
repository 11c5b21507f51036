//! Pure helpers for docker-compose definitions.
//!
//! Filename conventions, service-name extraction and the git blob reference
//! used when comparing a definition against its pinned remote.

use std::path::{Component, Path};

use anyhow::{Context, Result};

/// Underlying compose executable looked up on `PATH`.
pub const COMPOSE_EXECUTABLE: &str = "docker-compose";

/// Candidate primary definition files, in lookup order.
pub const PRIMARY_DEFINITION_FILES: &[&str] = &[
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yaml",
    "compose.yml",
];

/// Override files layered on top of the primary definition when present.
pub const OVERRIDE_DEFINITION_FILES: &[&str] =
    &["docker-compose.override.yml", "docker-compose.override.yaml"];

/// Service names declared under the top-level `services:` mapping.
///
/// Returns an empty list when the definition declares no services.
///
/// # Errors
///
/// Returns an error if `yaml` is not valid YAML.
pub fn service_names(yaml: &str) -> Result<Vec<String>> {
    let doc: serde_yaml::Value = serde_yaml::from_str(yaml).context("invalid compose YAML")?;
    let Some(services) = doc.get("services").and_then(serde_yaml::Value::as_mapping) else {
        return Ok(Vec::new());
    };
    Ok(services
        .keys()
        .filter_map(serde_yaml::Value::as_str)
        .map(String::from)
        .collect())
}

/// Path of `definition` relative to the repository top-level, `/`-separated.
///
/// Falls back to `definition` itself with its root stripped when the
/// top-level is unknown or is not a prefix.
#[must_use]
pub fn repo_relative_path(definition: &Path, toplevel: Option<&Path>) -> String {
    let relative = toplevel
        .and_then(|top| definition.strip_prefix(top).ok())
        .unwrap_or(definition);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Git blob reference `<revision>:<relative-path>`.
#[must_use]
pub fn blob_ref(revision: &str, relative: &str) -> String {
    format!("{revision}:{relative}")
}
