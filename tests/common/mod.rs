//! Common test utilities for decorator contract and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated home directory plus helpers to run the CLI
//! - Fakes for the host-facing ports (prompter, shell, deserializer factory)

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fakes::*;
