//! Domain Layer
//!
//! Value types and port traits shared by the resolver, the client cache and
//! the decorator facade.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ClusterId, RegistryEndpoint, EndpointInput)
//! - `ports/` - Interface definitions for infrastructure and the embedding host
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - Prompts, notifications, persistence and decoding go through traits

pub mod ports;
pub mod value_objects;
