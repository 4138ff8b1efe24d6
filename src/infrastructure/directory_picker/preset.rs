//! Non-interactive directory picker adapter

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{DirectoryChooserOptions, DirectoryPicker};

/// Picker that answers with a path decided up front.
///
/// Used when the directory is given on the command line; `None` behaves
/// like a cancelled dialog.
pub struct PresetDirectoryPicker {
    answer: Option<PathBuf>,
}

impl PresetDirectoryPicker {
    pub fn new(answer: Option<PathBuf>) -> Self {
        Self { answer }
    }

    /// Picker that always cancels
    pub fn cancelled() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl DirectoryPicker for PresetDirectoryPicker {
    async fn choose(&self, _options: &DirectoryChooserOptions) -> Option<PathBuf> {
        self.answer.clone()
    }
}
