//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod properties_file;

pub use properties_file::{lock_path_for, PropertiesFileRepository};
