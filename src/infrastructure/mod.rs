//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the desktop session and native dialogs.

pub mod directory_picker;
pub mod login_item;
pub mod preferences;

// Re-export adapters
pub use directory_picker::{PresetDirectoryPicker, RfdDirectoryPicker};
pub use login_item::{create_login_item_service, LaunchAgent, UnsupportedLoginItem, XdgAutostart};
pub use preferences::{MemoryPreferenceStore, TomlPreferenceStore, PREFS_FILE_ENV};
