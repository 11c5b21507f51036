//! The name → entry registry and its persisted document shape.
//!
//! Pure data structure: loading and saving live behind the
//! `RegistryStore` port, launcher writes behind `LauncherWriter`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::entry::Entry;
use crate::domain::error::{ConfigError, EntryError};

/// Tag used by the alternate (`{:#}`) rendering of a [`Registry`].
pub const REGISTRY_TAG: &str = "DipConfig";

/// Persisted document: `{"dips": {<name>: <entry>, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDocument {
    #[serde(default)]
    pub dips: BTreeMap<String, Entry>,
}

/// In-memory registry bound to the file it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    path: PathBuf,
    doc: RegistryDocument,
}

impl Registry {
    /// Empty registry that will be persisted at `path`.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::from_document(path, RegistryDocument::default())
    }

    /// Wrap a parsed document. Entries are re-keyed by their own name.
    #[must_use]
    pub fn from_document(path: impl Into<PathBuf>, doc: RegistryDocument) -> Self {
        let mut dips = BTreeMap::new();
        for (key, entry) in doc.dips {
            let name = entry.name().to_string();
            if let Some(dropped) = dips.insert(name.clone(), entry) {
                tracing::warn!(
                    key = %key,
                    name = %name,
                    dropped = %dropped.source_path().display(),
                    "duplicate entry name in registry document, keeping the later one"
                );
            }
        }
        Self {
            path: path.into(),
            doc: RegistryDocument { dips },
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn document(&self) -> &RegistryDocument {
        &self.doc
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.doc.dips.get(name)
    }

    /// Exact-key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::NotFound`] if no entry is registered as `name`.
    pub fn lookup(&self, name: &str) -> Result<&Entry, EntryError> {
        self.get(name)
            .ok_or_else(|| EntryError::NotFound(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.doc.dips.contains_key(name)
    }

    /// Insert or replace an entry, keyed by its name.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.doc.dips.insert(entry.name().to_string(), entry)
    }

    /// Remove an entry. Absent names are not an error.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.doc.dips.remove(name)
    }

    /// Assign raw JSON entry data under `name`, replacing any existing
    /// entry. See [`Entry::from_raw`] for the accepted shape.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` does not describe a valid entry. The
    /// registry is unchanged then.
    pub fn set_raw(&mut self, name: &str, raw: &str) -> Result<()> {
        let entry = Entry::from_raw(name, raw)?;
        self.insert(entry);
        Ok(())
    }

    /// Entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.doc.dips.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.doc.dips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc.dips.is_empty()
    }

    /// Walk `keys` into the entries map, e.g. `["fizz", "env", "FIZZ"]`.
    ///
    /// An empty key path returns the whole entries map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] naming the first missing key.
    pub fn query(&self, keys: &[String]) -> Result<serde_json::Value, ConfigError> {
        let mut value = serde_json::to_value(&self.doc.dips).unwrap_or_default();
        let mut walked: Vec<&str> = Vec::with_capacity(keys.len());
        for key in keys {
            walked.push(key);
            value = match value {
                serde_json::Value::Object(mut map) => map.remove(key.as_str()),
                _ => None,
            }
            .ok_or_else(|| ConfigError::UnknownKey {
                key: walked.join("."),
            })?;
        }
        Ok(value)
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{REGISTRY_TAG}({})", self.path.display())
        } else {
            write!(f, "{}", self.path.display())
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
