//! Deserializer ports - the schema-registry client collaborator.
//!
//! A `DeserializerFactory` builds one client per registry endpoint; the
//! client turns `(topic, bytes)` into a structured record.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::value_objects::{ClientConfig, RegistryEndpoint};

/// Decodes payloads using the schema registry it was built for.
pub trait MessageDeserializer: Send + Sync {
    /// Decode `payload` read from `topic` into a JSON-shaped record.
    fn deserialize(&self, topic: &str, payload: &[u8]) -> Result<serde_json::Value, DecodeError>;
}

/// Builds deserializers. Construction may contact the registry.
pub trait DeserializerFactory: Send + Sync {
    fn create(
        &self,
        endpoint: &RegistryEndpoint,
        config: &ClientConfig,
    ) -> Result<Arc<dyn MessageDeserializer>, DecodeError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid client option '{option}': {message}")]
    InvalidOption { option: String, message: String },

    #[error("cannot create registry client for {endpoint}: {message}")]
    Client { endpoint: String, message: String },

    #[error("cannot deserialize record from topic '{topic}': {message}")]
    Deserialize { topic: String, message: String },

    #[error("decoder panicked: {message}")]
    Panicked { message: String },
}
