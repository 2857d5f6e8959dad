//! avro-decorator - schema-registry backed message decoration
//!
//! Turns raw Kafka message bytes into readable Avro records for an inspection
//! tool. The host hands over the cluster identity, topic and payload; this
//! crate works out which schema registry serves that cluster (asking the
//! operator once when it does not know), keeps one decoding client per
//! registry endpoint, and always answers with a display string.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    bootstrap, AvroMessageDecorator, ConfigurationStore, DeserializerCache, EndpointResolver,
    MessageDecorator, ThreadDispatcher, DISPLAY_NAME, MISSING_ENDPOINT,
};
pub use config::DecoratorSettings;
pub use domain::value_objects::{ClientConfig, ClusterId, EndpointInput, RawMessage, RegistryEndpoint};
pub use error::{DecoratorError, DecoratorResult};
