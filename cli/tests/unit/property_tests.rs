//! Property-based tests for token parsing and validation.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use dip_cli::domain::compose::repo_relative_path;
use dip_cli::domain::{EnvVars, Entry, RemotePin, is_valid_entry_name};

// ============================================================================
// RemotePin::parse
// ============================================================================

proptest! {
    /// `<remote>/<branch>` always splits on the first slash.
    #[test]
    fn prop_remote_branch_token_splits_on_first_slash(
        remote in "[a-z][a-z0-9_-]{0,11}",
        branch in "[a-z0-9][a-z0-9/_.-]{0,15}",
    ) {
        let pin = RemotePin::parse(&format!("{remote}/{branch}")).expect("valid token");
        prop_assert_eq!(pin.remote(), remote.as_str());
        prop_assert_eq!(pin.branch(), Some(branch.as_str()));
    }

    /// A token without a slash pins the remote only.
    #[test]
    fn prop_remote_only_token_has_no_branch(remote in "[a-z][a-z0-9_-]{0,11}") {
        let pin = RemotePin::parse(&remote).expect("valid token");
        prop_assert_eq!(pin.remote(), remote.as_str());
        prop_assert_eq!(pin.branch(), None);
    }

    /// Displaying a parsed pin gives back the original token.
    #[test]
    fn prop_pin_display_round_trips(token in "[a-z]{1,8}(/[a-z]{1,8}){0,2}") {
        let pin = RemotePin::parse(&token).expect("valid token");
        prop_assert_eq!(pin.to_string(), token);
    }
}

// ============================================================================
// Entry names
// ============================================================================

proptest! {
    /// Names with a path separator are never accepted.
    #[test]
    fn prop_names_with_separator_are_rejected(
        head in "[a-z]{1,8}",
        tail in "[a-z]{0,8}",
    ) {
        let name = format!("{head}/{tail}");
        prop_assert!(!is_valid_entry_name(&name));
        prop_assert!(Entry::new(name, "/src", "/bin").is_err());
    }

    /// Accepted names survive a trip through the registry document.
    #[test]
    fn prop_valid_names_survive_serialization(name in "[A-Za-z0-9][A-Za-z0-9._-]{0,20}") {
        let entry = Entry::new(name.clone(), "/src", "/bin").expect("valid name");
        let json = serde_json::to_string(&entry).expect("serialize");
        let back: Entry = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(back.name(), name.as_str());
    }
}

// ============================================================================
// Environment pairs
// ============================================================================

proptest! {
    /// Values keep everything after the first `=`.
    #[test]
    fn prop_env_pairs_split_on_first_equals(
        key in "[A-Z_][A-Z0-9_]{0,10}",
        value in "[ -~]{0,20}",
    ) {
        let env = EnvVars::parse_pairs(&[format!("{key}={value}")]).expect("valid pair");
        prop_assert_eq!(env.get(&key), Some(value.as_str()));
    }

    /// Repeated keys keep the last value and a single slot.
    #[test]
    fn prop_env_repeated_key_last_wins(key in "[A-Z]{1,6}", a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
        let env = EnvVars::parse_pairs(&[format!("{key}={a}"), format!("{key}={b}")])
            .expect("valid pairs");
        prop_assert_eq!(env.len(), 1);
        prop_assert_eq!(env.get(&key), Some(b.as_str()));
    }
}

// ============================================================================
// Repository-relative paths
// ============================================================================

proptest! {
    /// Stripping a top-level prefix leaves a `/`-joined relative path.
    #[test]
    fn prop_repo_relative_path_strips_toplevel(
        top in prop::collection::vec("[a-z]{1,6}", 0..3),
        rest in prop::collection::vec("[a-z]{1,6}", 1..4),
    ) {
        let toplevel = format!("/{}", top.join("/"));
        let definition = format!("{}/{}", toplevel.trim_end_matches('/'), rest.join("/"));
        let relative = repo_relative_path(
            std::path::Path::new(&definition),
            Some(std::path::Path::new(&toplevel)),
        );
        prop_assert_eq!(relative, rest.join("/"));
    }
}
