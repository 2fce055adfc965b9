//! Common test utilities for CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with temp project and home directories
//! - Fixtures: Reusable configuration content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
