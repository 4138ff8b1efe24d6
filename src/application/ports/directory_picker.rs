//! Directory picker port interface

use std::path::PathBuf;

use async_trait::async_trait;

/// Configuration for the modal directory chooser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryChooserOptions {
    pub can_choose_files: bool,
    pub can_choose_directories: bool,
    /// Empty means no content type restriction beyond directories
    pub allowed_content_types: Vec<String>,
    pub allows_other_file_types: bool,
    pub title: Option<String>,
    /// Directory the chooser opens in
    pub starting_directory: Option<PathBuf>,
}

impl DirectoryChooserOptions {
    /// Directory-only chooser used for the output directory
    pub fn directories_only() -> Self {
        Self {
            can_choose_files: false,
            can_choose_directories: true,
            allowed_content_types: Vec::new(),
            allows_other_file_types: false,
            title: None,
            starting_directory: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_starting_directory(mut self, dir: Option<PathBuf>) -> Self {
        self.starting_directory = dir;
        self
    }
}

impl Default for DirectoryChooserOptions {
    fn default() -> Self {
        Self::directories_only()
    }
}

/// Port for a modal directory chooser
#[async_trait]
pub trait DirectoryPicker: Send + Sync {
    /// Present the chooser and wait for the user.
    ///
    /// # Returns
    /// The chosen path, or None if the user cancelled
    async fn choose(&self, options: &DirectoryChooserOptions) -> Option<PathBuf>;
}

/// Blanket implementation for boxed picker types
#[async_trait]
impl DirectoryPicker for Box<dyn DirectoryPicker> {
    async fn choose(&self, options: &DirectoryChooserOptions) -> Option<PathBuf> {
        self.as_ref().choose(options).await
    }
}
