//! Endpoint Prompter Port
//!
//! Asks the operator which schema registry serves a cluster. Called on the
//! UI dispatcher thread only; implementations may block until the operator
//! answers.

use crate::domain::value_objects::ClusterId;

pub trait EndpointPrompter: Send + Sync {
    /// Ask for the endpoint of `cluster`.
    ///
    /// Returns the raw line typed by the operator, or `None` when the prompt
    /// was cancelled.
    fn prompt_endpoint(&self, cluster: &ClusterId) -> Option<String>;
}

/// Prompter that always cancels.
///
/// Use this when no operator can answer (non-interactive runs, `--no-prompt`).
pub struct CancelPrompter;

impl EndpointPrompter for CancelPrompter {
    fn prompt_endpoint(&self, _cluster: &ClusterId) -> Option<String> {
        None
    }
}
