//! Infrastructure implementation of the `RegistryStore` port.
//!
//! The registry is a pretty-printed JSON document, written atomically
//! (temp file in the same directory + rename) so a failed save never leaves
//! a truncated file behind.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::RegistryStore;
use crate::domain::{ConfigError, Registry, RegistryDocument};

/// Environment variable overriding the registry location.
pub const CONFIG_ENV: &str = "DIP_CONFIG";

/// Production `RegistryStore` backed by a JSON file.
pub struct JsonRegistryStore {
    path: PathBuf,
}

impl JsonRegistryStore {
    /// Create a store at `$DIP_CONFIG`, or `~/.dip/settings.json` by default.
    ///
    /// # Errors
    ///
    /// Returns an error if `DIP_CONFIG` is unset and the home directory
    /// cannot be determined.
    pub fn new() -> Result<Self> {
        if let Some(val) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_path(PathBuf::from(val)));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".dip").join("settings.json")))
    }

    /// Create a store with an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<Registry> {
        let content = std::fs::read_to_string(&self.path)?;
        let doc: RegistryDocument = serde_json::from_str(&content)?;
        Ok(Registry::from_document(&self.path, doc))
    }

    fn write(path: &Path, registry: &Registry) -> std::io::Result<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        std::fs::create_dir_all(parent)?;
        let mut content = serde_json::to_string_pretty(registry.document())?;
        content.push('\n');

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o600))?;
        }

        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl RegistryStore for JsonRegistryStore {
    fn load(&self) -> Registry {
        match self.read() {
            Ok(registry) => registry,
            Err(e) => {
                let missing = e
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
                if missing {
                    tracing::debug!(path = %self.path.display(), "no registry yet");
                } else {
                    tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable registry");
                }
                Registry::empty(&self.path)
            }
        }
    }

    fn save(&self, registry: &Registry) -> Result<(), ConfigError> {
        let path = registry.path();
        Self::write(path, registry).map_err(|source| ConfigError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), entries = registry.len(), "registry saved");
        Ok(())
    }

    fn reset(&self) -> Result<(), ConfigError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ConfigError::Reset {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
