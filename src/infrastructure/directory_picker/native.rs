//! Native directory chooser adapter using rfd

use std::path::PathBuf;

use async_trait::async_trait;
use rfd::AsyncFileDialog;

use crate::application::ports::{DirectoryChooserOptions, DirectoryPicker};

/// Directory chooser backed by the platform dialog (xdg-desktop-portal on
/// Linux, NSOpenPanel on macOS, IFileDialog on Windows)
pub struct RfdDirectoryPicker;

impl RfdDirectoryPicker {
    /// Create a new native picker
    pub fn new() -> Self {
        Self
    }

    fn dialog(options: &DirectoryChooserOptions) -> AsyncFileDialog {
        let mut dialog = AsyncFileDialog::new();
        if let Some(title) = &options.title {
            dialog = dialog.set_title(title.as_str());
        }
        if let Some(dir) = &options.starting_directory {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }
}

impl Default for RfdDirectoryPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryPicker for RfdDirectoryPicker {
    async fn choose(&self, options: &DirectoryChooserOptions) -> Option<PathBuf> {
        // pick_folder only ever offers directories, matching the
        // directory-only options this port is given
        Self::dialog(options)
            .pick_folder()
            .await
            .map(|handle| handle.path().to_path_buf())
    }
}
