//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and the embedding host provide concrete implementations.

pub mod deserializer;
pub mod host_shell;
pub mod prompter;
pub mod properties_repository;

pub use deserializer::{DecodeError, DeserializerFactory, MessageDeserializer};
pub use host_shell::HostShell;
pub use prompter::{CancelPrompter, EndpointPrompter};
pub use properties_repository::{Properties, PropertiesRepository, StoreError};
