//! Preference store adapters

mod memory;
mod toml_file;

pub use memory::MemoryPreferenceStore;
pub use toml_file::{TomlPreferenceStore, PREFS_FILE_ENV};
