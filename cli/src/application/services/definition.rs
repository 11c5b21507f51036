//! Application service: reading an entry's service definition.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::DefinitionResolver;
use crate::domain::compose;
use crate::domain::{Entry, EntryError};

/// Resolved definition files for `entry`, primary first.
///
/// # Errors
///
/// Returns [`EntryError::NoDefinition`] if the source directory holds none.
pub fn definition_files(resolver: &impl DefinitionResolver, entry: &Entry) -> Result<Vec<PathBuf>> {
    let files = resolver.definition_files(entry.source_path());
    if files.is_empty() {
        return Err(EntryError::NoDefinition(entry.source_path().to_path_buf()).into());
    }
    Ok(files)
}

/// Full text of the primary definition file.
///
/// # Errors
///
/// Returns an error if no definition exists or it cannot be read.
pub fn definition(resolver: &impl DefinitionResolver, entry: &Entry) -> Result<String> {
    let files = definition_files(resolver, entry)?;
    let primary = files
        .first()
        .ok_or_else(|| EntryError::NoDefinition(entry.source_path().to_path_buf()))?;
    resolver.read(primary)
}

/// Texts of every resolved definition file, primary first.
///
/// # Errors
///
/// Returns an error if no definition exists or any file cannot be read.
pub fn definitions(resolver: &impl DefinitionResolver, entry: &Entry) -> Result<Vec<String>> {
    definition_files(resolver, entry)?
        .iter()
        .map(|path| resolver.read(path))
        .collect()
}

/// Service names declared across every resolved definition file, in
/// first-seen order. Override files may add services of their own.
///
/// # Errors
///
/// Returns an error if any definition cannot be read or parsed.
pub fn services(resolver: &impl DefinitionResolver, entry: &Entry) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for path in definition_files(resolver, entry)? {
        let text = resolver.read(&path)?;
        let declared = compose::service_names(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        for name in declared {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    Ok(names)
}

/// The service this entry runs: the one named after the entry.
///
/// # Errors
///
/// Returns [`EntryError::ServiceNotFound`] if the definition does not
/// declare it.
pub fn service(resolver: &impl DefinitionResolver, entry: &Entry) -> Result<String> {
    let names = services(resolver, entry)?;
    if names.iter().any(|n| n == entry.name()) {
        Ok(entry.name().to_string())
    } else {
        Err(EntryError::ServiceNotFound {
            service: entry.name().to_string(),
            path: entry.source_path().to_path_buf(),
        }
        .into())
    }
}
