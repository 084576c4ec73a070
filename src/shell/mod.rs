//! Minimal view of the desktop shell hosting the application.
//!
//! The shell runtime (windowing, clipboard, dialogs, notifications) is a
//! trust boundary owned by the host; this crate adds no logic on top of
//! it. Only the operations the integration helpers actually invoke are
//! declared — deliberately not a restatement of the shell's API surface.

pub mod integration;

use std::path::PathBuf;

/// System clipboard access.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
    fn read_text(&self) -> Option<String>;
}

/// Desktop notification delivery.
pub trait Notifications {
    fn notify(&mut self, summary: &str, body: &str);
}

/// Native file dialogs.
pub trait Dialogs {
    /// Prompts for a save target; `None` when the user cancels.
    fn save_file(&mut self, suggested_name: &str) -> Option<PathBuf>;
}
