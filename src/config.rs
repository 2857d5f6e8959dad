//! Runtime settings
//!
//! Resolution order:
//! 1. CLI flags (`--properties`, `--no-prompt`)
//! 2. Environment (`AVRO_DECORATOR_PROPERTIES`, `AVRO_DECORATOR_HOME`)
//! 3. Built-in default (`~/.kafka-avro-decorator.properties`, prompt when stdin is a terminal)

use std::path::PathBuf;

use is_terminal::IsTerminal;

use crate::infrastructure::default_properties_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorSettings {
    /// Endpoint file read at startup and rewritten on every change.
    pub properties_path: PathBuf,
    /// Whether an operator can answer endpoint prompts.
    pub interactive: bool,
}

impl DecoratorSettings {
    /// Settings for `properties_path`, prompting allowed.
    pub fn new(properties_path: impl Into<PathBuf>) -> Self {
        Self {
            properties_path: properties_path.into(),
            interactive: true,
        }
    }

    /// Default path from the environment; interactive only on a terminal.
    pub fn from_env() -> Self {
        Self {
            properties_path: default_properties_path(),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    /// Apply CLI overrides on top of these settings.
    pub fn with_overrides(mut self, properties_path: Option<PathBuf>, no_prompt: bool) -> Self {
        if let Some(path) = properties_path {
            self.properties_path = path;
        }
        if no_prompt {
            self.interactive = false;
        }
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}
