//! Message decorator
//!
//! Entry point the host calls for every message it displays. Turns the raw
//! payload into text: the decoded record, a placeholder while the endpoint is
//! unknown, or a one-line error. Never fails and never blocks on a prompt.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::cache::DeserializerCache;
use super::resolver::EndpointResolver;
use super::store::ConfigurationStore;
use super::ui_dispatcher::panic_message;
use crate::domain::ports::{DecodeError, HostShell};
use crate::domain::value_objects::{ClusterId, RawMessage, RegistryEndpoint};

/// Name the host shows for this decorator.
pub const DISPLAY_NAME: &str = "Avro";

/// Text returned while a cluster has no registry endpoint.
pub const MISSING_ENDPOINT: &str = "Missing schema registry endpoint";

/// Caption of the settings action installed in the host.
pub const SETTINGS_CAPTION: &str = "Avro plugin settings...";

/// Contract between the host and a payload decorator.
pub trait MessageDecorator: Send + Sync {
    fn display_name(&self) -> &str;

    /// Text shown in place of the raw payload.
    fn decorate(&self, message: &RawMessage<'_>) -> String;
}

pub struct AvroMessageDecorator {
    store: Arc<ConfigurationStore>,
    resolver: EndpointResolver,
    cache: DeserializerCache,
    shell: Arc<dyn HostShell>,
    settings_installed: AtomicBool,
}

impl AvroMessageDecorator {
    pub fn new(
        store: Arc<ConfigurationStore>,
        resolver: EndpointResolver,
        cache: DeserializerCache,
        shell: Arc<dyn HostShell>,
    ) -> Self {
        Self {
            store,
            resolver,
            cache,
            shell,
            settings_installed: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &Arc<ConfigurationStore> {
        &self.store
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    pub fn cache(&self) -> &DeserializerCache {
        &self.cache
    }

    fn install_settings_entry(&self) {
        if self
            .settings_installed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.shell
                .install_settings_entry(SETTINGS_CAPTION, self.store.path());
        }
    }

    fn decode(
        &self,
        cluster: &ClusterId,
        endpoint: &RegistryEndpoint,
        message: &RawMessage<'_>,
    ) -> Result<serde_json::Value, DecodeError> {
        let config = self.store.client_config(cluster);
        let client = self.cache.get_or_create(endpoint, &config)?;
        client.deserialize(message.topic, message.payload)
    }
}

impl MessageDecorator for AvroMessageDecorator {
    fn display_name(&self) -> &str {
        DISPLAY_NAME
    }

    fn decorate(&self, message: &RawMessage<'_>) -> String {
        self.install_settings_entry();

        let cluster = ClusterId::from(message.cluster_id);
        let Some(endpoint) = self.resolver.resolve(&cluster) else {
            return MISSING_ENDPOINT.to_string();
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.decode(&cluster, &endpoint, message)
        }))
        .unwrap_or_else(|payload| {
            Err(DecodeError::Panicked {
                message: panic_message(&*payload),
            })
        });

        match outcome {
            Ok(record) => render(record),
            Err(e) => {
                tracing::error!(
                    cluster = %cluster,
                    broker = message.broker_host,
                    topic = message.topic,
                    partition = message.partition,
                    offset = message.offset,
                    extra = message.extra.map_or(0, |extra| extra.len()),
                    endpoint = %endpoint,
                    error = %e,
                    "cannot decorate message"
                );
                format!("Error: {}", e)
            }
        }
    }
}

/// Records render as JSON text; a bare string record renders without quotes.
fn render(record: serde_json::Value) -> String {
    match record {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}
