//! Configuration store
//!
//! In-memory view of the endpoint file: `<cluster>` → registry endpoint and
//! `<cluster>.<option>` → client option. Loaded once, mutated in place,
//! written back in full on every `save`.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::domain::ports::{HostShell, Properties, PropertiesRepository, StoreError};
use crate::domain::value_objects::{ClientConfig, ClusterId, EndpointInput, RegistryEndpoint};

/// One configured cluster, as listed by `clusters()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterEntry {
    pub cluster: ClusterId,
    pub endpoint: RegistryEndpoint,
    pub config: ClientConfig,
}

pub struct ConfigurationStore {
    entries: RwLock<Properties>,
    repository: Arc<dyn PropertiesRepository>,
    shell: Arc<dyn HostShell>,
    save_lock: Mutex<()>,
}

impl ConfigurationStore {
    /// Load the store from `repository`.
    ///
    /// Never fails: an unreadable file is reported to the operator and the
    /// store starts empty so decoding keeps working for the session.
    pub fn load(repository: Arc<dyn PropertiesRepository>, shell: Arc<dyn HostShell>) -> Self {
        match Self::try_load(Arc::clone(&repository), Arc::clone(&shell)) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(path = %repository.path().display(), error = %e, "cannot load endpoint file");
                shell.notify_error("Cannot load avro plugin properties", &e.to_string());
                Self::from_entries(Properties::new(), repository, shell)
            }
        }
    }

    /// Load the store, failing on a file that cannot be read.
    ///
    /// Callers that save afterwards use this so an unreadable file is never
    /// replaced by an empty one.
    pub fn try_load(
        repository: Arc<dyn PropertiesRepository>,
        shell: Arc<dyn HostShell>,
    ) -> Result<Self, StoreError> {
        let entries = repository.load()?;
        tracing::debug!(
            path = %repository.path().display(),
            entries = entries.len(),
            "loaded endpoint file"
        );
        Ok(Self::from_entries(entries, repository, shell))
    }

    fn from_entries(
        entries: Properties,
        repository: Arc<dyn PropertiesRepository>,
        shell: Arc<dyn HostShell>,
    ) -> Self {
        Self {
            entries: RwLock::new(entries),
            repository,
            shell,
            save_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        self.repository.path()
    }

    /// Endpoint stored for `cluster`; an empty value counts as absent.
    pub fn endpoint(&self, cluster: &ClusterId) -> Option<RegistryEndpoint> {
        self.entries
            .read()
            .get(cluster.as_str())
            .filter(|endpoint| !endpoint.is_empty())
            .map(|endpoint| RegistryEndpoint::new(endpoint.as_str()))
    }

    /// Client options of `cluster` with the `<cluster>.` prefix stripped.
    pub fn client_config(&self, cluster: &ClusterId) -> ClientConfig {
        let prefix = cluster.option_prefix();
        self.entries
            .read()
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .filter(|option| !option.is_empty())
                    .map(|option| (option.to_string(), value.clone()))
            })
            .collect()
    }

    pub fn set_endpoint(&self, cluster: &ClusterId, endpoint: &RegistryEndpoint) {
        self.entries
            .write()
            .insert(cluster.as_str().to_string(), endpoint.as_str().to_string());
    }

    pub fn set_config(&self, cluster: &ClusterId, key: &str, value: &str) {
        self.entries
            .write()
            .insert(cluster.option_key(key), value.to_string());
    }

    /// Store an endpoint and its options in one step.
    ///
    /// Options already stored for the cluster and not named in `input` stay.
    pub fn apply(&self, cluster: &ClusterId, input: &EndpointInput) {
        let mut entries = self.entries.write();
        entries.insert(
            cluster.as_str().to_string(),
            input.endpoint.as_str().to_string(),
        );
        for (option, value) in &input.config {
            entries.insert(cluster.option_key(option), value.clone());
        }
    }

    /// Drop the endpoint and every option of `cluster`. Returns whether anything was removed.
    ///
    /// Keys of other clusters nested under `<cluster>.` stay.
    pub fn remove_cluster(&self, cluster: &ClusterId) -> bool {
        let mut entries = self.entries.write();
        let is_cluster = |owner: &str| owner == cluster.as_str() || entries.contains_key(owner);
        let owned: Vec<String> = entries
            .keys()
            .filter(|key| {
                key.as_str() == cluster.as_str()
                    || option_owner(key, is_cluster) == Some(cluster.as_str())
            })
            .cloned()
            .collect();
        for key in &owned {
            entries.remove(key);
        }
        !owned.is_empty()
    }

    /// Configured clusters in key order.
    ///
    /// A key is an option when it splits into a stored key, a `.` and an
    /// option name; everything else is a cluster.
    pub fn clusters(&self) -> Vec<ClusterEntry> {
        let entries = self.entries.read();
        let is_cluster = |owner: &str| entries.contains_key(owner);

        let mut clusters: Vec<ClusterEntry> = entries
            .iter()
            .filter(|(key, _)| option_owner(key, is_cluster).is_none())
            .map(|(key, endpoint)| ClusterEntry {
                cluster: ClusterId::new(key.as_str()),
                endpoint: RegistryEndpoint::new(endpoint.as_str()),
                config: ClientConfig::new(),
            })
            .collect();

        for (key, value) in entries.iter() {
            let Some(owner) = option_owner(key, is_cluster) else {
                continue;
            };
            if let Some(entry) = clusters.iter_mut().find(|entry| entry.cluster.as_str() == owner) {
                entry
                    .config
                    .insert(key[owner.len() + 1..].to_string(), value.clone());
            }
        }
        clusters
    }

    /// Copy of the raw entries.
    pub fn snapshot(&self) -> Properties {
        self.entries.read().clone()
    }

    /// Write the whole store to disk.
    ///
    /// On failure the operator is notified and the error returned; the
    /// in-memory state is kept as is.
    pub fn save(&self) -> Result<(), StoreError> {
        let _guard = self.save_lock.lock();
        let snapshot = self.snapshot();
        match self.repository.save(&snapshot) {
            Ok(()) => {
                tracing::debug!(
                    path = %self.path().display(),
                    entries = snapshot.len(),
                    "saved endpoint file"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %self.path().display(), error = %e, "cannot save endpoint file");
                self.shell
                    .notify_error("Cannot save avro plugin properties", &e.to_string());
                Err(e)
            }
        }
    }
}

/// Cluster owning `key` as one of its options.
///
/// The shortest stored prefix wins. The remainder must look like a client
/// option name, so `zk.example.com:2181` is its own cluster next to `zk`.
fn option_owner<'k>(key: &'k str, is_cluster: impl Fn(&str) -> bool) -> Option<&'k str> {
    key.match_indices('.')
        .map(|(i, _)| (&key[..i], &key[i + 1..]))
        .find(|(owner, option)| is_option_name(option) && is_cluster(owner))
        .map(|(owner, _)| owner)
}

fn is_option_name(option: &str) -> bool {
    !option.is_empty()
        && option
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
