//! Typed snapshot of the recording preferences

use std::path::PathBuf;

use super::formats::{
    AudioFormat, AudioQuality, Countdown, EffectiveAudioQuality, Encoder, VideoFormat,
};
use super::key::PreferenceKey;
use super::value::PreferenceValue;

/// Recording preferences as read from the store.
///
/// Built from raw values with per-key fallback: a missing or
/// uninterpretable value resolves to the key's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingPreferences {
    pub video_format: VideoFormat,
    pub encoder: Encoder,
    pub audio_format: AudioFormat,
    pub audio_quality: AudioQuality,
    pub hide_self: bool,
    pub countdown: Countdown,
    pub hide_desktop_files: bool,
    pub save_directory: Option<PathBuf>,
}

impl Default for RecordingPreferences {
    fn default() -> Self {
        Self {
            video_format: VideoFormat::default(),
            encoder: Encoder::default(),
            audio_format: AudioFormat::default(),
            audio_quality: AudioQuality::default(),
            hide_self: true,
            countdown: Countdown::default(),
            hide_desktop_files: false,
            save_directory: None,
        }
    }
}

impl RecordingPreferences {
    /// Build a snapshot by looking up each key
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(PreferenceKey) -> Option<PreferenceValue>,
    {
        let defaults = Self::default();
        Self {
            video_format: text_choice(lookup(PreferenceKey::VideoFormat))
                .unwrap_or(defaults.video_format),
            encoder: text_choice(lookup(PreferenceKey::Encoder)).unwrap_or(defaults.encoder),
            audio_format: text_choice(lookup(PreferenceKey::AudioFormat))
                .unwrap_or(defaults.audio_format),
            audio_quality: text_choice(lookup(PreferenceKey::AudioQuality))
                .unwrap_or(defaults.audio_quality),
            hide_self: lookup(PreferenceKey::HideSelf)
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.hide_self),
            countdown: lookup(PreferenceKey::Countdown)
                .and_then(|v| v.as_int())
                .and_then(Countdown::from_secs)
                .unwrap_or(defaults.countdown),
            hide_desktop_files: lookup(PreferenceKey::HideDesktopFiles)
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.hide_desktop_files),
            save_directory: lookup(PreferenceKey::SaveDirectory)
                .and_then(|v| v.as_text().map(str::to_owned))
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Quality the encoder should use, "lossless" for ALAC/FLAC
    pub fn effective_audio_quality(&self) -> EffectiveAudioQuality {
        EffectiveAudioQuality::resolve(self.audio_format, self.audio_quality)
    }

    /// Audio format after the container fallback (Opus in MP4 becomes AAC)
    pub fn effective_audio_format(&self) -> AudioFormat {
        self.audio_format.for_container(self.video_format)
    }

    /// Whether the quality selector accepts edits
    pub fn is_quality_editable(&self) -> bool {
        self.effective_audio_quality().is_editable()
    }
}

fn text_choice<T: std::str::FromStr>(value: Option<PreferenceValue>) -> Option<T> {
    value.as_ref().and_then(|v| v.as_text()).and_then(|s| s.parse().ok())
}
