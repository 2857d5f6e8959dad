//! Application Layer
//!
//! Wires the domain ports into the decoration flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Owns the shared runtime state (store, prompt flag, client cache)
//! - Never talks to the filesystem, terminal or network directly
//!
//! ## Components
//!
//! - `AvroMessageDecorator` - Host-facing entry point (`decorate`)
//! - `EndpointResolver` - Store lookup plus single-flight operator prompt
//! - `ConfigurationStore` - Cluster → endpoint/options map with write-back
//! - `DeserializerCache` - One registry client per endpoint
//! - `ThreadDispatcher` - Serial UI thread the prompts run on

mod bootstrap;
pub mod cache;
pub mod decorator;
pub mod resolver;
pub mod store;
pub mod ui_dispatcher;

#[cfg(test)]
pub(crate) mod testing;

pub use bootstrap::{bootstrap, DecoratorRuntime, UI_THREAD_NAME};
pub use cache::DeserializerCache;
pub use decorator::{
    AvroMessageDecorator, MessageDecorator, DISPLAY_NAME, MISSING_ENDPOINT, SETTINGS_CAPTION,
};
pub use resolver::EndpointResolver;
pub use store::{ClusterEntry, ConfigurationStore};
pub use ui_dispatcher::{DispatchError, ThreadDispatcher, UiDispatcher, UiTask};
