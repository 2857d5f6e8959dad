//! Terminal host shell
//!
//! The CLI's stand-in for an inspection tool's dialogs and menus.

mod editor;

use std::path::Path;

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::domain::ports::HostShell;

pub use editor::open_in_editor;

/// Writes notifications to stderr, coloured when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalShell {
    color: bool,
}

impl TerminalShell {
    /// Detect colour support from stderr and `NO_COLOR`.
    pub fn new() -> Self {
        let color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { color }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Text of an error notification.
    pub fn render_error(&self, title: &str, message: &str) -> String {
        if self.color {
            format!("{} {}: {}", "[ERROR]".red().bold(), title.bold(), message)
        } else {
            format!("[ERROR] {}: {}", title, message)
        }
    }
}

impl Default for TerminalShell {
    fn default() -> Self {
        Self::new()
    }
}

impl HostShell for TerminalShell {
    fn notify_error(&self, title: &str, message: &str) {
        eprintln!("{}", self.render_error(title, message));
    }

    fn install_settings_entry(&self, caption: &str, properties_path: &Path) {
        tracing::debug!(
            caption,
            path = %properties_path.display(),
            "settings are edited with `avro-decorator config edit`"
        );
    }
}
