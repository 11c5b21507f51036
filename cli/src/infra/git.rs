//! Git implementation of the `VersionControl` port, via the `git` CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, DiffOutcome, VersionControl};

const GIT: &str = "git";

/// `VersionControl` that shells out to `git -C <path> ...`.
pub struct GitCli<R> {
    runner: R,
}

impl<R: CommandRunner> GitCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn git(&self, path: &Path, args: &[&str]) -> Result<std::process::Output> {
        let dir = path.to_string_lossy().into_owned();
        let mut full: Vec<&str> = vec!["-C", dir.as_str()];
        full.extend_from_slice(args);
        self.runner.run(GIT, &full).await
    }

    async fn git_stdout(&self, path: &Path, args: &[&str]) -> Result<String> {
        let out = self.git(path, args).await?;
        anyhow::ensure!(
            out.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&out.stderr).trim()
        );
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}

impl<R: CommandRunner> VersionControl for GitCli<R> {
    async fn active_branch(&self, path: &Path) -> Result<String> {
        let branch = self
            .git_stdout(path, &["rev-parse", "--abbrev-ref", "HEAD"])
            .await?;
        anyhow::ensure!(branch != "HEAD", "{} has a detached HEAD", path.display());
        Ok(branch)
    }

    async fn toplevel(&self, path: &Path) -> Result<PathBuf> {
        self.git_stdout(path, &["rev-parse", "--show-toplevel"])
            .await
            .map(PathBuf::from)
    }

    async fn fetch(&self, path: &Path, remote: &str) -> Result<()> {
        self.git_stdout(path, &["fetch", "--quiet", remote])
            .await
            .map(|_| ())
    }

    async fn diff(&self, path: &Path, target: &str, local: &Path) -> Result<DiffOutcome> {
        let local = local.to_string_lossy();
        let out = self
            .git(path, &["--no-pager", "diff", "--exit-code", target, &*local])
            .await
            .context("running git diff")?;
        match out.status.code() {
            Some(0) => Ok(DiffOutcome::Clean),
            Some(1) => Ok(DiffOutcome::Diverged(
                String::from_utf8_lossy(&out.stdout).into_owned(),
            )),
            code => anyhow::bail!(
                "git diff exited with {}: {}",
                code.map_or_else(|| "signal".to_string(), |c| c.to_string()),
                String::from_utf8_lossy(&out.stderr).trim()
            ),
        }
    }
}
