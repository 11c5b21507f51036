//! Unit tests for reading an entry's definition files.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use dip_cli::application::services::definition;
use dip_cli::domain::{Entry, EntryError};

use crate::mocks::FakeResolver;

const PRIMARY: &str = "/path/to/fizz/docker-compose.yml";
const OVERRIDE: &str = "/path/to/fizz/docker-compose.override.yml";

fn fizz() -> Entry {
    Entry::new("fizz", "/path/to/fizz", "/path/to/bin").unwrap()
}

fn both_files() -> FakeResolver {
    FakeResolver::default()
        .with(PRIMARY, "services:\n  fizz:\n    image: alpine\n  db:\n    image: postgres\n")
        .with(OVERRIDE, "services:\n  db:\n    ports: [\"5432\"]\n  cache:\n    image: redis\n")
}

#[test]
fn test_definition_is_primary_text() {
    let text = definition::definition(&both_files(), &fizz()).unwrap();
    assert!(text.contains("image: alpine"));
    assert!(!text.contains("redis"));
}

#[test]
fn test_definitions_lists_primary_then_override() {
    let texts = definition::definitions(&both_files(), &fizz()).unwrap();
    assert_eq!(texts.len(), 2);
    assert!(texts[1].contains("redis"));
}

#[test]
fn test_services_merges_all_files_without_duplicates() {
    let names = definition::services(&both_files(), &fizz()).unwrap();
    assert_eq!(names, ["fizz", "db", "cache"]);
}

#[test]
fn test_no_definition_is_error() {
    let err = definition::definition(&FakeResolver::default(), &fizz()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EntryError>(),
        Some(EntryError::NoDefinition(_))
    ));
}
