//! Unit tests for dip CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod definition_service;
mod property_tests;
