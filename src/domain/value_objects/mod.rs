//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod endpoint_input;
mod identity;
mod message;

pub use endpoint_input::{EndpointInput, InputError};
pub use identity::{ClientConfig, ClusterId, RegistryEndpoint};
pub use message::RawMessage;
