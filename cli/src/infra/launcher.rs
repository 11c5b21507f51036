//! Filesystem implementation of the `LauncherWriter` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::LauncherWriter;
use crate::domain::launcher::{LAUNCHER_MODE, launcher_script};

/// Writes launcher scripts into a local directory.
pub struct LocalLauncherWriter;

impl LauncherWriter for LocalLauncherWriter {
    fn write(&self, install_dir: &Path, name: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(install_dir)
            .with_context(|| format!("creating directory {}", install_dir.display()))?;
        let path = install_dir.join(name);
        std::fs::write(&path, launcher_script(name))
            .with_context(|| format!("writing launcher {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(LAUNCHER_MODE))
                .with_context(|| format!("setting permissions on {}", path.display()))?;
        }
        #[cfg(not(unix))]
        let _ = LAUNCHER_MODE;

        Ok(path)
    }

    fn remove(&self, install_dir: &Path, name: &str) -> Result<()> {
        let path = install_dir.join(name);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "launcher already absent");
                Ok(())
            }
            Err(e) => Err(e).with_context(|| format!("removing launcher {}", path.display())),
        }
    }
}
