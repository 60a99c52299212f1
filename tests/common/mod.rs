#![allow(dead_code)]

//! Common test utilities for climenu CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project/home directories plus helpers to run the binary
//! - Fixtures: reusable menu documents and action files

pub mod env;

pub use env::*;
pub use fixtures::*;
