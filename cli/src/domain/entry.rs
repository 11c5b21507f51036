//! Installed entry record and the remote pin it may track.
//!
//! Pure types only; no I/O. An [`Entry`] is constructed through
//! [`Entry::new`] (or deserialized from the registry document), both of which
//! enforce the same invariants:
//!
//! - the name is non-empty and safe to use as a file and service name
//! - a branch is never set without a remote
//! - environment keys are unique (guaranteed by [`EnvVars`])

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::env::EnvVars;
use crate::domain::error::EntryError;

/// Tag used by the alternate (`{:#}`) rendering of an [`Entry`].
pub const ENTRY_TAG: &str = "Dip";

/// Entry names become launcher file names and compose service names.
pub static ENTRY_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern; cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid regex")
});

/// Returns `true` if `name` can be used as an entry name.
#[must_use]
pub fn is_valid_entry_name(name: &str) -> bool {
    ENTRY_NAME_RE.is_match(name)
}

// ── Remote pin ───────────────────────────────────────────────────────────────

/// Upstream remote an entry tracks, optionally narrowed to one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePin {
    remote: String,
    branch: Option<String>,
}

impl RemotePin {
    /// Build a pin from already-split parts.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::InvalidRemote`] if the remote or branch is empty.
    pub fn new(remote: impl Into<String>, branch: Option<String>) -> Result<Self, EntryError> {
        let remote = remote.into();
        if remote.is_empty() || branch.as_deref().is_some_and(str::is_empty) {
            let shown = match &branch {
                Some(b) => format!("{remote}/{b}"),
                None => remote,
            };
            return Err(EntryError::InvalidRemote(shown));
        }
        Ok(Self { remote, branch })
    }

    /// Split a `<remote>[/<branch>]` token on its first `/`.
    ///
    /// `"origin/master"` pins branch `master` of `origin`; `"origin"` pins the
    /// remote only. Branch names may themselves contain `/`.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::InvalidRemote`] if either part is empty.
    pub fn parse(token: &str) -> Result<Self, EntryError> {
        let pin = match token.split_once('/') {
            Some((remote, branch)) => Self::new(remote, Some(branch.to_string())),
            None => Self::new(token, None),
        };
        pin.map_err(|_| EntryError::InvalidRemote(token.to_string()))
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Remote-tracking revision for `branch`, e.g. `origin/master`.
    #[must_use]
    pub fn revision(&self, branch: &str) -> String {
        format!("{}/{branch}", self.remote)
    }
}

impl FromStr for RemotePin {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RemotePin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Some(branch) => write!(f, "{}/{branch}", self.remote),
            None => f.write_str(&self.remote),
        }
    }
}

// ── Entry ────────────────────────────────────────────────────────────────────

/// One installed service definition plus its installation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord", into = "EntryRecord")]
pub struct Entry {
    name: String,
    source_path: PathBuf,
    install_path: PathBuf,
    env: EnvVars,
    pin: Option<RemotePin>,
    sleep: Option<u64>,
}

impl Entry {
    /// Create an entry with no environment, no remote pin and no sleep.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::InvalidName`] if `name` fails [`ENTRY_NAME_RE`].
    pub fn new(
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        install_path: impl Into<PathBuf>,
    ) -> Result<Self, EntryError> {
        let name = name.into();
        if !is_valid_entry_name(&name) {
            return Err(EntryError::InvalidName(name));
        }
        Ok(Self {
            name,
            source_path: source_path.into(),
            install_path: install_path.into(),
            env: EnvVars::new(),
            pin: None,
            sleep: None,
        })
    }

    /// Parse raw JSON in the persisted entry shape as the entry `name`.
    ///
    /// A `name` field inside `raw` is ignored. The `env` map keeps the key
    /// order written in `raw`.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON object describing a valid entry.
    pub fn from_raw(name: &str, raw: &str) -> anyhow::Result<Self> {
        let mut record: EntryRecord = serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("invalid entry data for '{name}': {e}"))?;
        record.name = name.to_string();
        Ok(Self::try_from(record)?)
    }

    #[must_use]
    pub fn with_env(mut self, env: EnvVars) -> Self {
        self.env = env;
        self
    }

    #[must_use]
    pub fn with_pin(mut self, pin: Option<RemotePin>) -> Self {
        self.pin = pin;
        self
    }

    #[must_use]
    pub fn with_sleep(mut self, sleep: Option<u64>) -> Self {
        self.sleep = sleep;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    #[must_use]
    pub fn install_path(&self) -> &Path {
        &self.install_path
    }

    #[must_use]
    pub fn env(&self) -> &EnvVars {
        &self.env
    }

    #[must_use]
    pub fn pin(&self) -> Option<&RemotePin> {
        self.pin.as_ref()
    }

    #[must_use]
    pub fn remote(&self) -> Option<&str> {
        self.pin.as_ref().map(RemotePin::remote)
    }

    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.pin.as_ref().and_then(RemotePin::branch)
    }

    /// Seconds to pause after warning about divergence, if configured.
    #[must_use]
    pub fn sleep(&self) -> Option<u64> {
        self.sleep
    }

    /// Location of this entry's launcher artifact.
    #[must_use]
    pub fn launcher_path(&self) -> PathBuf {
        self.install_path.join(&self.name)
    }

    /// Arguments following the executable name for `docker-compose run`.
    ///
    /// One `-e KEY=VALUE` pair per environment variable, in insertion order,
    /// then the service name, then `extra` verbatim.
    #[must_use]
    pub fn run_args(&self, extra: &[String]) -> Vec<String> {
        let mut args = vec!["run".to_string(), "--rm".to_string()];
        for (key, value) in self.env.iter() {
            args.push("-e".to_string());
            args.push(format!("{key}={value}"));
        }
        args.push(self.name.clone());
        args.extend(extra.iter().cloned());
        args
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{ENTRY_TAG}({})", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// On-disk shape of an [`Entry`].
#[derive(Clone, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(default)]
    name: String,
    path: PathBuf,
    home: PathBuf,
    #[serde(default)]
    env: EnvVars,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sleep: Option<u64>,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = EntryError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        let pin = match (record.remote, record.branch) {
            (Some(remote), branch) => Some(RemotePin::new(remote, branch)?),
            (None, Some(branch)) => return Err(EntryError::BranchWithoutRemote(branch)),
            (None, None) => None,
        };
        Ok(Entry::new(record.name, record.path, record.home)?
            .with_env(record.env)
            .with_pin(pin)
            .with_sleep(record.sleep))
    }
}

impl From<Entry> for EntryRecord {
    fn from(entry: Entry) -> Self {
        let (remote, branch) = match entry.pin {
            Some(pin) => (Some(pin.remote), pin.branch),
            None => (None, None),
        };
        Self {
            name: entry.name,
            path: entry.source_path,
            home: entry.install_path,
            env: entry.env,
            remote,
            branch,
            sleep: entry.sleep,
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
