//! Recording preferences: key schema, stored values and typed views

mod edit;
mod formats;
mod key;
mod recording;
mod value;

pub use edit::{parse_bool, SettingEdit};
pub use formats::{
    AudioFormat, AudioQuality, Countdown, EffectiveAudioQuality, Encoder, VideoFormat,
};
pub use key::{PreferenceKey, ALL_KEYS};
pub use recording::RecordingPreferences;
pub use value::{PreferenceValue, ValueKind};
