//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod directory_picker;
pub mod login_item;
pub mod preference_store;

// Re-export common types
pub use directory_picker::{DirectoryChooserOptions, DirectoryPicker};
pub use login_item::{Direction, LoginItemService, LoginItemStatus, RegistrationError};
pub use preference_store::{check_kind, PreferenceStore};
