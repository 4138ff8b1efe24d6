//! Application layer - Use cases and port interfaces
//!
//! Contains the settings surface, the login item controller
//! and trait definitions for external system interactions.

pub mod login_item;
pub mod ports;
pub mod settings;

// Re-export use cases
pub use login_item::LoginItemController;
pub use settings::{
    read_background_color, read_recording_preferences, SettingsError, SettingsSurface,
    SettingsView,
};
