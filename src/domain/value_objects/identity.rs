//! Cluster and registry identities
//!
//! Both are opaque strings supplied from outside; the newtypes keep a cluster
//! key from being handed where an endpoint is expected.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Client options scoped to one cluster (e.g. `basic.auth.user.info`).
pub type ClientConfig = BTreeMap<String, String>;

/// Identifies the cluster a message came from, usually its ZooKeeper address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClusterId(String);

impl ClusterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix under which this cluster's client options are stored.
    pub fn option_prefix(&self) -> String {
        format!("{}.", self.0)
    }

    /// Store key for one client option of this cluster.
    pub fn option_key(&self, option: &str) -> String {
        format!("{}.{}", self.0, option)
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClusterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ClusterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Address of a schema registry. May hold several comma-separated URLs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RegistryEndpoint(String);

impl RegistryEndpoint {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self(endpoint.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Individual URLs, trimmed, without empty segments.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').map(str::trim).filter(|url| !url.is_empty())
    }
}

impl fmt::Display for RegistryEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegistryEndpoint {
    fn from(endpoint: &str) -> Self {
        Self::new(endpoint)
    }
}

impl From<String> for RegistryEndpoint {
    fn from(endpoint: String) -> Self {
        Self(endpoint)
    }
}
