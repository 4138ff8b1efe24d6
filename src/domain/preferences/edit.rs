//! A single user edit to a preference

use std::path::PathBuf;

use crate::domain::color::Rgba;
use crate::domain::error::ConfigError;

use super::formats::{AudioFormat, AudioQuality, Countdown, Encoder, VideoFormat};
use super::key::PreferenceKey;
use super::value::PreferenceValue;

/// One edit made on the settings surface
#[derive(Debug, Clone, PartialEq)]
pub enum SettingEdit {
    VideoFormat(VideoFormat),
    Encoder(Encoder),
    AudioFormat(AudioFormat),
    AudioQuality(AudioQuality),
    HideSelf(bool),
    Countdown(Countdown),
    HideDesktopFiles(bool),
    SaveDirectory(PathBuf),
    /// `None` clears the stored color
    BackgroundColor(Option<Rgba>),
}

impl SettingEdit {
    /// Parse a textual value for the given key
    pub fn parse(key: PreferenceKey, value: &str) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            key: key.to_string(),
            message,
        };

        let edit = match key {
            PreferenceKey::VideoFormat => {
                Self::VideoFormat(value.parse().map_err(|e| invalid(format!("{}", e)))?)
            }
            PreferenceKey::Encoder => {
                Self::Encoder(value.parse().map_err(|e| invalid(format!("{}", e)))?)
            }
            PreferenceKey::AudioFormat => {
                Self::AudioFormat(value.parse().map_err(|e| invalid(format!("{}", e)))?)
            }
            PreferenceKey::AudioQuality => {
                Self::AudioQuality(value.parse().map_err(|e| invalid(format!("{}", e)))?)
            }
            PreferenceKey::Countdown => {
                Self::Countdown(value.parse().map_err(|e| invalid(format!("{}", e)))?)
            }
            PreferenceKey::HideSelf => Self::HideSelf(
                parse_bool(value).ok_or_else(|| invalid("Value must be 'true' or 'false'".into()))?,
            ),
            PreferenceKey::HideDesktopFiles => Self::HideDesktopFiles(
                parse_bool(value).ok_or_else(|| invalid("Value must be 'true' or 'false'".into()))?,
            ),
            PreferenceKey::SaveDirectory => {
                if value.trim().is_empty() {
                    return Err(invalid("Path must not be empty".into()));
                }
                Self::SaveDirectory(PathBuf::from(value.trim()))
            }
            PreferenceKey::UserColor => match value.trim().to_lowercase().as_str() {
                "none" | "" => Self::BackgroundColor(None),
                _ => Self::BackgroundColor(Some(
                    value.parse().map_err(|e| invalid(format!("{}", e)))?,
                )),
            },
        };

        Ok(edit)
    }

    /// Key this edit writes to
    pub const fn key(&self) -> PreferenceKey {
        match self {
            Self::VideoFormat(_) => PreferenceKey::VideoFormat,
            Self::Encoder(_) => PreferenceKey::Encoder,
            Self::AudioFormat(_) => PreferenceKey::AudioFormat,
            Self::AudioQuality(_) => PreferenceKey::AudioQuality,
            Self::HideSelf(_) => PreferenceKey::HideSelf,
            Self::Countdown(_) => PreferenceKey::Countdown,
            Self::HideDesktopFiles(_) => PreferenceKey::HideDesktopFiles,
            Self::SaveDirectory(_) => PreferenceKey::SaveDirectory,
            Self::BackgroundColor(_) => PreferenceKey::UserColor,
        }
    }

    /// Value written through immediately, or None for edits that are
    /// held until the surface closes
    pub fn immediate_value(&self) -> Option<PreferenceValue> {
        match self {
            Self::VideoFormat(v) => Some(PreferenceValue::text(v.as_str())),
            Self::Encoder(v) => Some(PreferenceValue::text(v.as_str())),
            Self::AudioFormat(v) => Some(PreferenceValue::text(v.as_str())),
            Self::AudioQuality(v) => Some(PreferenceValue::text(v.as_str())),
            Self::HideSelf(b) | Self::HideDesktopFiles(b) => Some(PreferenceValue::Bool(*b)),
            Self::Countdown(c) => Some(PreferenceValue::Int(c.as_secs().into())),
            Self::SaveDirectory(path) => {
                Some(PreferenceValue::text(path.to_string_lossy().into_owned()))
            }
            Self::BackgroundColor(_) => None,
        }
    }
}

/// Parse a boolean value
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
