//! Host Shell Port
//!
//! The pieces of the embedding tool the decorator talks back to: an error
//! dialog and a place to hang the "edit settings" action.

use std::path::Path;

pub trait HostShell: Send + Sync {
    /// Show a non-fatal error to the operator.
    fn notify_error(&self, title: &str, message: &str);

    /// Offer a way to edit the persisted endpoint file.
    ///
    /// Called once per decorator; hosts without a menu may ignore it.
    fn install_settings_entry(&self, caption: &str, properties_path: &Path);
}
