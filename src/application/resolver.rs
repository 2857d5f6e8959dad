//! Endpoint resolver
//!
//! Finds the registry endpoint of a cluster, asking the operator when the
//! store has none. At most one prompt is open per resolver, whatever the
//! cluster; callers never wait for it and get `None` until the answer has
//! been stored.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::store::ConfigurationStore;
use super::ui_dispatcher::UiDispatcher;
use crate::domain::ports::{EndpointPrompter, HostShell};
use crate::domain::value_objects::{ClusterId, EndpointInput, RegistryEndpoint};

/// Claim on the prompt flag, released on drop.
struct PromptSlot {
    flag: Arc<AtomicBool>,
}

impl PromptSlot {
    fn claim(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for PromptSlot {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct EndpointResolver {
    store: Arc<ConfigurationStore>,
    prompter: Arc<dyn EndpointPrompter>,
    dispatcher: Arc<dyn UiDispatcher>,
    shell: Arc<dyn HostShell>,
    prompt_open: Arc<AtomicBool>,
}

impl EndpointResolver {
    pub fn new(
        store: Arc<ConfigurationStore>,
        prompter: Arc<dyn EndpointPrompter>,
        dispatcher: Arc<dyn UiDispatcher>,
        shell: Arc<dyn HostShell>,
    ) -> Self {
        Self {
            store,
            prompter,
            dispatcher,
            shell,
            prompt_open: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether an endpoint prompt scheduled by this resolver is still open.
    pub fn is_prompt_open(&self) -> bool {
        self.prompt_open.load(Ordering::Acquire)
    }

    /// Endpoint for `cluster`, or `None` while it is unknown.
    ///
    /// A miss schedules a prompt on the UI dispatcher unless one is already
    /// open; the answer is only visible to later calls.
    pub fn resolve(&self, cluster: &ClusterId) -> Option<RegistryEndpoint> {
        if let Some(endpoint) = self.store.endpoint(cluster) {
            return Some(endpoint);
        }

        let Some(slot) = PromptSlot::claim(&self.prompt_open) else {
            tracing::debug!(cluster = %cluster, "endpoint prompt already open");
            return None;
        };

        // Another prompt may have stored it between the lookup and the claim.
        if let Some(endpoint) = self.store.endpoint(cluster) {
            return Some(endpoint);
        }

        tracing::debug!(cluster = %cluster, "scheduling endpoint prompt");
        let task = PromptTask {
            cluster: cluster.clone(),
            store: Arc::clone(&self.store),
            prompter: Arc::clone(&self.prompter),
            shell: Arc::clone(&self.shell),
            _slot: slot,
        };
        if let Err(e) = self.dispatcher.post(Box::new(move || task.run())) {
            tracing::warn!(cluster = %cluster, error = %e, "cannot schedule endpoint prompt");
        }
        None
    }
}

/// One scheduled prompt. Holds the prompt slot until it has run or is dropped.
struct PromptTask {
    cluster: ClusterId,
    store: Arc<ConfigurationStore>,
    prompter: Arc<dyn EndpointPrompter>,
    shell: Arc<dyn HostShell>,
    _slot: PromptSlot,
}

impl PromptTask {
    fn run(self) {
        if self.store.endpoint(&self.cluster).is_some() {
            tracing::debug!(cluster = %self.cluster, "endpoint already stored; skipping prompt");
            return;
        }

        let Some(line) = self.prompter.prompt_endpoint(&self.cluster) else {
            tracing::debug!(cluster = %self.cluster, "endpoint prompt cancelled");
            return;
        };

        match EndpointInput::parse(&line) {
            Ok(Some(input)) => {
                tracing::info!(
                    cluster = %self.cluster,
                    endpoint = %input.endpoint,
                    options = input.config.len(),
                    "storing schema registry endpoint"
                );
                self.store.apply(&self.cluster, &input);
                // Failures are reported by the store; the endpoint stays usable in memory.
                let _ = self.store.save();
            }
            Ok(None) => {
                tracing::debug!(cluster = %self.cluster, "empty endpoint input ignored");
            }
            Err(e) => {
                tracing::warn!(cluster = %self.cluster, error = %e, "rejected endpoint input");
                self.shell.notify_error("Cannot process URL", &e.to_string());
            }
        }
    }
}
