//! PropertiesRepository port
//!
//! Persists the flat cluster → endpoint file (`~/.kafka-avro-decorator.properties`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Raw key/value content of the endpoint file.
pub type Properties = BTreeMap<String, String>;

pub trait PropertiesRepository: Send + Sync {
    /// Read the file, creating an empty one when it does not exist.
    fn load(&self) -> Result<Properties, StoreError>;

    /// Replace the file content with `properties`.
    fn save(&self, properties: &Properties) -> Result<(), StoreError>;

    /// Location shown to the operator and handed to editors.
    fn path(&self) -> &Path;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access {path}: {message}")]
    AccessError { path: PathBuf, message: String },

    #[error(
        "endpoint file corrupted: {path}\n  → Fix: Correct the line or delete the file\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
