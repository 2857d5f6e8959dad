//! Endpoint input typed by the operator
//!
//! Format: `endpoint` or `endpoint?key1=value1&key2=value2`. The query part
//! carries client options; names and values are form-URL-decoded.

use thiserror::Error;

use super::identity::{ClientConfig, RegistryEndpoint};

/// A parsed endpoint plus the client options that came with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointInput {
    pub endpoint: RegistryEndpoint,
    pub config: ClientConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("endpoint is empty")]
    EmptyEndpoint,

    #[error("invalid percent-encoding in '{fragment}'")]
    InvalidEscape { fragment: String },

    #[error("'{fragment}' does not decode to valid UTF-8")]
    InvalidUtf8 { fragment: String },

    #[error("option '{name}' is given more than once")]
    DuplicateOption { name: String },
}

impl EndpointInput {
    /// Parse operator input.
    ///
    /// Returns `Ok(None)` for blank input, which callers treat as a cancelled
    /// prompt. Query pairs without `=` or with an empty name or value are
    /// skipped; a pair is split on its first `=` so values may contain `=`.
    pub fn parse(raw: &str) -> Result<Option<Self>, InputError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let (endpoint, query) = match raw.split_once('?') {
            Some((endpoint, query)) => (endpoint.trim(), Some(query)),
            None => (raw, None),
        };
        if endpoint.is_empty() {
            return Err(InputError::EmptyEndpoint);
        }

        let mut config = ClientConfig::new();
        for pair in query.into_iter().flat_map(|q| q.split('&')) {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            if name.is_empty() || value.is_empty() {
                continue;
            }
            let name = form_decode(name)?;
            let value = form_decode(value)?;
            if config.contains_key(&name) {
                return Err(InputError::DuplicateOption { name });
            }
            config.insert(name, value);
        }

        Ok(Some(Self {
            endpoint: RegistryEndpoint::new(endpoint),
            config,
        }))
    }
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space, `%XX` a byte.
fn form_decode(fragment: &str) -> Result<String, InputError> {
    let bytes = fragment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' => {
                let byte = bytes
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or_else(|| InputError::InvalidEscape {
                        fragment: fragment.to_string(),
                    })?;
                decoded.push(byte);
                i += 3;
            }
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded).map_err(|_| InputError::InvalidUtf8 {
        fragment: fragment.to_string(),
    })
}
