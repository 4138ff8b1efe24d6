//! Directory picker infrastructure module

mod native;
mod preset;

pub use native::RfdDirectoryPicker;
pub use preset::PresetDirectoryPicker;
