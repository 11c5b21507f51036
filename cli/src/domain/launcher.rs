//! Launcher artifact contents.
//!
//! A launcher is a small POSIX shell script named after the entry that
//! re-enters `dip run <name>`, forwarding its own arguments.

/// Program the launcher re-enters.
pub const LAUNCHER_PROGRAM: &str = "dip";

/// Permission bits applied to launcher scripts on unix.
pub const LAUNCHER_MODE: u32 = 0o755;

/// Script body for the launcher of entry `name`.
///
/// `name` is interpolated unquoted; callers only pass names accepted by
/// [`crate::domain::entry::is_valid_entry_name`].
#[must_use]
pub fn launcher_script(name: &str) -> String {
    format!("#!/bin/sh\nexec {LAUNCHER_PROGRAM} run {name} -- \"$@\"\n")
}
