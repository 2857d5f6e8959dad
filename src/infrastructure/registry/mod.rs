//! Schema-registry backed deserializers
//!
//! Builds Avro decoders from `schema_registry_converter`. Payloads use the
//! Confluent wire format (magic byte, 4-byte schema id, Avro body), so the
//! topic name is not needed to find the schema.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use schema_registry_converter::blocking::avro::AvroDecoder;
use schema_registry_converter::blocking::schema_registry::SrSettings;

use crate::domain::ports::{DecodeError, DeserializerFactory, MessageDeserializer};
use crate::domain::value_objects::{ClientConfig, RegistryEndpoint};

const SCHEMA_REGISTRY_PREFIX: &str = "schema.registry.";
const BASIC_AUTH_USER_INFO: &str = "basic.auth.user.info";
const BASIC_AUTH_CREDENTIALS_SOURCE: &str = "basic.auth.credentials.source";
const BEARER_AUTH_TOKEN: &str = "bearer.auth.token";
const REQUEST_TIMEOUT_MS: &str = "request.timeout.ms";

/// Connection settings distilled from an endpoint and its client options.
#[derive(Debug, Default, PartialEq, Eq)]
struct RegistrySettings {
    urls: Vec<String>,
    basic_auth: Option<(String, Option<String>)>,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
}

impl RegistrySettings {
    fn from_options(
        endpoint: &RegistryEndpoint,
        config: &ClientConfig,
    ) -> Result<Self, DecodeError> {
        let urls: Vec<String> = endpoint.urls().map(normalize_url).collect();
        if urls.is_empty() {
            return Err(DecodeError::Client {
                endpoint: endpoint.to_string(),
                message: "no registry URL given".to_string(),
            });
        }

        let mut settings = Self {
            urls,
            ..Self::default()
        };

        for (option, value) in config {
            let name = option.strip_prefix(SCHEMA_REGISTRY_PREFIX).unwrap_or(option);
            match name {
                BASIC_AUTH_USER_INFO => {
                    let (user, password) = match value.split_once(':') {
                        Some((user, password)) => (user, Some(password.to_string())),
                        None => (value.as_str(), None),
                    };
                    if user.is_empty() {
                        return Err(DecodeError::InvalidOption {
                            option: option.clone(),
                            message: "expected 'user:password'".to_string(),
                        });
                    }
                    settings.basic_auth = Some((user.to_string(), password));
                }
                BEARER_AUTH_TOKEN => settings.bearer_token = Some(value.clone()),
                REQUEST_TIMEOUT_MS => {
                    let millis = value.parse::<u64>().map_err(|_| DecodeError::InvalidOption {
                        option: option.clone(),
                        message: format!("'{}' is not a number of milliseconds", value),
                    })?;
                    settings.timeout = Some(Duration::from_millis(millis));
                }
                BASIC_AUTH_CREDENTIALS_SOURCE => {}
                _ => tracing::debug!(option = %option, "ignoring unknown client option"),
            }
        }

        Ok(settings)
    }

    fn into_sr_settings(self, endpoint: &RegistryEndpoint) -> Result<SrSettings, DecodeError> {
        let mut urls = self.urls.into_iter();
        let first = urls.next().ok_or_else(|| DecodeError::Client {
            endpoint: endpoint.to_string(),
            message: "no registry URL given".to_string(),
        })?;

        let mut builder = SrSettings::new_builder(first);
        for url in urls {
            builder.add_url(url);
        }
        if let Some((user, password)) = &self.basic_auth {
            builder.set_basic_authorization(user, password.as_deref());
        }
        if let Some(token) = &self.bearer_token {
            builder.set_token_authorization(token);
        }
        if let Some(timeout) = self.timeout {
            builder.set_timeout(timeout);
        }
        builder.build().map_err(|e| DecodeError::Client {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

/// `host:8081` → `http://host:8081`; trailing slashes dropped.
fn normalize_url(url: &str) -> String {
    let url = url.trim_end_matches('/');
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

type DecodeFn = dyn Fn(Option<&[u8]>) -> Result<serde_json::Value, String> + Send + Sync;

/// Avro deserializer bound to one registry endpoint.
pub struct AvroRegistryDeserializer {
    endpoint: RegistryEndpoint,
    // Boxed so the converter's decoder type stays out of this crate's API.
    decode: Box<DecodeFn>,
}

impl MessageDeserializer for AvroRegistryDeserializer {
    fn deserialize(&self, topic: &str, payload: &[u8]) -> Result<serde_json::Value, DecodeError> {
        let payload = (!payload.is_empty()).then_some(payload);
        (self.decode)(payload).map_err(|message| {
            tracing::debug!(endpoint = %self.endpoint, topic, error = %message, "avro decode failed");
            DecodeError::Deserialize {
                topic: topic.to_string(),
                message,
            }
        })
    }
}

/// Default `DeserializerFactory`: one Avro decoder per registry endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRegistryFactory;

impl SchemaRegistryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl DeserializerFactory for SchemaRegistryFactory {
    fn create(
        &self,
        endpoint: &RegistryEndpoint,
        config: &ClientConfig,
    ) -> Result<Arc<dyn MessageDeserializer>, DecodeError> {
        let settings = RegistrySettings::from_options(endpoint, config)?;
        tracing::debug!(
            endpoint = %endpoint,
            urls = ?settings.urls,
            basic_auth = settings.basic_auth.is_some(),
            bearer_auth = settings.bearer_token.is_some(),
            "building schema registry client"
        );

        let decoder = Mutex::new(AvroDecoder::new(settings.into_sr_settings(endpoint)?));
        let decode: Box<DecodeFn> = Box::new(move |payload| {
            let decoded = decoder.lock().decode(payload).map_err(|e| e.to_string())?;
            serde_json::Value::try_from(decoded.value).map_err(|e| e.to_string())
        });

        Ok(Arc::new(AvroRegistryDeserializer {
            endpoint: endpoint.clone(),
            decode,
        }))
    }
}
