//! Domain layer - Core business logic
//!
//! Contains value objects, the preference schema, the color codec
//! and domain errors. This layer has no dependencies on external systems.

pub mod color;
pub mod error;
pub mod preferences;

// Re-export common types
pub use color::Rgba;
pub use error::*;
pub use preferences::{
    AudioFormat, AudioQuality, Countdown, EffectiveAudioQuality, Encoder, PreferenceKey,
    PreferenceValue, RecordingPreferences, SettingEdit, VideoFormat,
};
