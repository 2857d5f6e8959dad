//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Home directory and endpoint file location
//! - `properties/` - Properties text codec
//! - `repositories/` - Endpoint file repository
//! - `registry/` - Schema-registry backed deserializers
//! - `prompt/` - Terminal endpoint prompter
//! - `shell/` - Terminal host shell and editor launcher

pub mod fs;
pub mod prompt;
pub mod properties;
pub mod registry;
pub mod repositories;
pub mod shell;

// Re-export for convenience
pub use fs::{decorator_home_dir, default_properties_path};
pub use prompt::TerminalPrompter;
pub use registry::SchemaRegistryFactory;
pub use repositories::{lock_path_for, PropertiesFileRepository};
pub use shell::TerminalShell;
