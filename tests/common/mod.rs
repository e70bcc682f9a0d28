//! Common test utilities for printwatch CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated home directory plus a documents directory
//! - `TestResult`: captured output of one CLI invocation

pub mod env;

pub use env::*;
