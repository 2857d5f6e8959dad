//! Terminal Endpoint Prompter
//!
//! Asks for a registry endpoint on the controlling terminal.

use dialoguer::Input;

use crate::domain::ports::EndpointPrompter;
use crate::domain::value_objects::ClusterId;

/// Prompt text shown for an unresolved cluster.
pub fn prompt_text(cluster: &ClusterId) -> String {
    format!("Enter schema registry endpoint for {}", cluster)
}

/// Interactive prompter reading one line from the terminal.
///
/// An empty line or a terminal error counts as cancel.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl EndpointPrompter for TerminalPrompter {
    fn prompt_endpoint(&self, cluster: &ClusterId) -> Option<String> {
        eprintln!("Format: endpoint or endpoint?option=value&option2=value2");
        match Input::<String>::new()
            .with_prompt(prompt_text(cluster))
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::warn!(cluster = %cluster, error = %e, "endpoint prompt failed");
                None
            }
        }
    }
}
