//! Integration tests for dip CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! Every test points `DIP_CONFIG` and `DIP_BIN` at a temp directory.

mod cli_tests;
mod git_divergence;
mod install_command;
mod service_commands;
mod support;
