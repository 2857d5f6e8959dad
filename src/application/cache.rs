//! Deserializer cache
//!
//! One client per registry endpoint for the life of the decorator. Clusters
//! sharing an endpoint share the client, built with the options of whichever
//! cluster asked first.

use std::sync::Arc;

use dashmap::DashMap;

use crate::domain::ports::{DecodeError, DeserializerFactory, MessageDeserializer};
use crate::domain::value_objects::{ClientConfig, RegistryEndpoint};

pub struct DeserializerCache {
    clients: DashMap<RegistryEndpoint, Arc<dyn MessageDeserializer>>,
    factory: Arc<dyn DeserializerFactory>,
}

impl DeserializerCache {
    pub fn new(factory: Arc<dyn DeserializerFactory>) -> Self {
        Self {
            clients: DashMap::new(),
            factory,
        }
    }

    /// Cached client for `endpoint`, building it with `config` on first use.
    ///
    /// Concurrent first calls build once. A failed build is not cached.
    pub fn get_or_create(
        &self,
        endpoint: &RegistryEndpoint,
        config: &ClientConfig,
    ) -> Result<Arc<dyn MessageDeserializer>, DecodeError> {
        if let Some(client) = self.clients.get(endpoint) {
            return Ok(Arc::clone(client.value()));
        }

        let client = self
            .clients
            .entry(endpoint.clone())
            .or_try_insert_with(|| {
                tracing::debug!(endpoint = %endpoint, options = config.len(), "creating deserializer");
                self.factory.create(endpoint, config)
            })?;
        Ok(Arc::clone(client.value()))
    }

    pub fn contains(&self, endpoint: &RegistryEndpoint) -> bool {
        self.clients.contains_key(endpoint)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
