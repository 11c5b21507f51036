//! docker-compose implementations of `DefinitionResolver` and `ComposeEngine`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ComposeEngine, DefinitionResolver};
use crate::domain::ExecError;
use crate::domain::compose::{
    COMPOSE_EXECUTABLE, OVERRIDE_DEFINITION_FILES, PRIMARY_DEFINITION_FILES,
};
use crate::infra::command_runner::PULL_TIMEOUT;

/// Resolves definition files on the local filesystem.
pub struct ComposeFiles;

impl DefinitionResolver for ComposeFiles {
    fn definition_files(&self, dir: &Path) -> Vec<PathBuf> {
        let Some(primary) = PRIMARY_DEFINITION_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
        else {
            return Vec::new();
        };
        let mut files = vec![primary];
        files.extend(
            OVERRIDE_DEFINITION_FILES
                .iter()
                .map(|name| dir.join(name))
                .filter(|p| p.is_file()),
        );
        files
    }

    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }

    fn canonical(&self, path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|e| {
            tracing::debug!(path = %path.display(), error = %e, "cannot resolve path");
            path.to_path_buf()
        })
    }
}

/// `ComposeEngine` that drives the `docker-compose` CLI.
pub struct ComposeCli<R> {
    runner: R,
}

impl<R: CommandRunner> ComposeCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> ComposeEngine for ComposeCli<R> {
    async fn pull(&self, files: &[PathBuf], service: &str) -> Result<()> {
        let files: Vec<String> = files
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let mut args: Vec<&str> = Vec::with_capacity(files.len() * 2 + 2);
        for file in &files {
            args.push("-f");
            args.push(file);
        }
        args.push("pull");
        args.push(service);

        let out = self
            .runner
            .run_with_timeout(COMPOSE_EXECUTABLE, &args, PULL_TIMEOUT)
            .await
            .map_err(|e| ExecError::Pull {
                service: service.to_string(),
                message: format!("{e:#}"),
            })?;
        if !out.status.success() {
            return Err(ExecError::Pull {
                service: service.to_string(),
                message: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(())
    }
}
