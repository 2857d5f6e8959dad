//! Command handlers for the CLI.

pub mod config;
pub mod decorate;

use std::io::{self, Write};

/// Print one JSON event per line on stdout.
pub fn emit_json(event: &serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, event)?;
    out.write_all(b"\n")
}
