//! Glue between a mounted chart widget and the shell services.
//!
//! Like every widget operation, these helpers are presence-checked:
//! without a live engine instance they do nothing and report the absence
//! through their return value, never through an error.

use std::path::PathBuf;

use crate::engine::EngineBackend;
use crate::widget::ChartWidget;

use super::{Clipboard, Dialogs, Notifications};

/// Copies the widget's current image export to the clipboard.
///
/// Returns `false` when the widget holds no engine instance.
pub fn copy_image_to_clipboard<B: EngineBackend>(
    widget: &ChartWidget<B>,
    clipboard: &mut dyn Clipboard,
) -> bool {
    let Some(image) = widget.to_base64_image() else {
        return false;
    };
    clipboard.write_text(&image);
    true
}

/// Prompts for a save target for the widget's image export and reports
/// the outcome as a notification.
///
/// The exported data is handed back to the caller with the chosen path;
/// writing the file is the host's responsibility. Returns `None` when the
/// widget is not mounted or the user cancels the dialog.
pub fn export_image_interactive<B: EngineBackend>(
    widget: &ChartWidget<B>,
    dialogs: &mut dyn Dialogs,
    notifications: &mut dyn Notifications,
    suggested_name: &str,
) -> Option<(PathBuf, String)> {
    let image = widget.to_base64_image()?;
    let path = dialogs.save_file(suggested_name)?;
    notifications.notify(
        "Chart exported",
        &format!("Image data ready for {}", path.display()),
    );
    Some((path, image))
}
