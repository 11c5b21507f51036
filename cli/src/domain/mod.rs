//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::process`. All functions are
//! synchronous and take data in, returning data out.

pub mod compose;
pub mod entry;
pub mod env;
pub mod error;
pub mod invocation;
pub mod launcher;
pub mod listing;
pub mod registry;

pub use entry::{Entry, RemotePin, is_valid_entry_name};
pub use env::EnvVars;
pub use error::{ConfigError, EntryError, ExecError};
pub use invocation::Invocation;
pub use listing::{ListingRow, Tracking};
pub use registry::{Registry, RegistryDocument};
