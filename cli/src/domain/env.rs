//! Ordered environment mapping injected into `docker-compose run`.
//!
//! Keys are unique and keep their first insertion position; re-inserting a
//! key replaces its value in place. Serialized as a plain JSON object whose
//! key order matches insertion order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::EntryError;

/// Insertion-ordered `KEY -> VALUE` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars(Vec<(String, String)>);

impl EnvVars {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.0.push((key, value));
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse `KEY=VALUE` pairs as given on the command line.
    ///
    /// Splits on the first `=`, so values may themselves contain `=`.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::InvalidEnv`] when a pair has no `=` or an empty key.
    pub fn parse_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self, EntryError> {
        let mut env = Self::new();
        for raw in pairs {
            let raw = raw.as_ref();
            match raw.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    env.insert(key, value);
                }
                _ => return Err(EntryError::InvalidEnv(raw.to_string())),
            }
        }
        Ok(env)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (k, v) in iter {
            env.insert(k, v);
        }
        env
    }
}

impl Serialize for EnvVars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EnvVars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EnvVisitor;

        impl<'de> Visitor<'de> for EnvVisitor {
            type Value = EnvVars;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of environment variable names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<EnvVars, A::Error> {
                let mut env = EnvVars::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    env.insert(k, v);
                }
                Ok(env)
            }
        }

        deserializer.deserialize_map(EnvVisitor)
    }
}
