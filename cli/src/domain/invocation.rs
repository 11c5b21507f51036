//! A fully-resolved process image to hand over to.

use std::path::PathBuf;

/// Program, argv and working directory for a process replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Absolute path of the executable.
    pub program: PathBuf,
    /// Full argument vector, `argv[0]` included.
    pub argv: Vec<String>,
    /// Working directory for the new image.
    pub cwd: PathBuf,
}
