//! Preference key schema

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UnknownKeyError;

use super::formats::{AudioFormat, AudioQuality, Countdown, Encoder, VideoFormat};
use super::value::{PreferenceValue, ValueKind};

/// All persisted preference keys, in display order
pub const ALL_KEYS: &[PreferenceKey] = &[
    PreferenceKey::VideoFormat,
    PreferenceKey::Encoder,
    PreferenceKey::HideSelf,
    PreferenceKey::AudioFormat,
    PreferenceKey::AudioQuality,
    PreferenceKey::Countdown,
    PreferenceKey::HideDesktopFiles,
    PreferenceKey::SaveDirectory,
    PreferenceKey::UserColor,
];

/// Closed set of persisted preference keys.
///
/// The string identifiers are stable: renaming one orphans every value
/// persisted under the old name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    AudioFormat,
    AudioQuality,
    VideoFormat,
    Encoder,
    HideSelf,
    Countdown,
    HideDesktopFiles,
    SaveDirectory,
    UserColor,
}

impl PreferenceKey {
    /// Get the persisted identifier for this key
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AudioFormat => "audioFormat",
            Self::AudioQuality => "audioQuality",
            Self::VideoFormat => "videoFormat",
            Self::Encoder => "encoder",
            Self::HideSelf => "hideSelf",
            Self::Countdown => "countdown",
            Self::HideDesktopFiles => "hideDesktopFiles",
            Self::SaveDirectory => "saveDirectory",
            Self::UserColor => "userColor",
        }
    }

    /// Get the value kind stored under this key
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::AudioFormat
            | Self::AudioQuality
            | Self::VideoFormat
            | Self::Encoder
            | Self::SaveDirectory => ValueKind::Text,
            Self::HideSelf | Self::HideDesktopFiles => ValueKind::Bool,
            Self::Countdown => ValueKind::Int,
            Self::UserColor => ValueKind::Data,
        }
    }

    /// Get the default value, or None for keys that start out unset
    pub fn default_value(&self) -> Option<PreferenceValue> {
        match self {
            Self::AudioFormat => Some(PreferenceValue::text(AudioFormat::default().as_str())),
            Self::AudioQuality => Some(PreferenceValue::text(AudioQuality::default().as_str())),
            Self::VideoFormat => Some(PreferenceValue::text(VideoFormat::default().as_str())),
            Self::Encoder => Some(PreferenceValue::text(Encoder::default().as_str())),
            Self::HideSelf => Some(PreferenceValue::Bool(true)),
            Self::Countdown => Some(PreferenceValue::Int(Countdown::default().as_secs().into())),
            Self::HideDesktopFiles => Some(PreferenceValue::Bool(false)),
            Self::SaveDirectory | Self::UserColor => None,
        }
    }

    /// Check whether a stored value is meaningful for this key.
    /// Color bytes are only checked for kind; the codec decides the rest.
    pub fn accepts(&self, value: &PreferenceValue) -> bool {
        match (self, value) {
            (Self::AudioFormat, PreferenceValue::Text(s)) => s.parse::<AudioFormat>().is_ok(),
            (Self::AudioQuality, PreferenceValue::Text(s)) => s.parse::<AudioQuality>().is_ok(),
            (Self::VideoFormat, PreferenceValue::Text(s)) => s.parse::<VideoFormat>().is_ok(),
            (Self::Encoder, PreferenceValue::Text(s)) => s.parse::<Encoder>().is_ok(),
            (Self::HideSelf | Self::HideDesktopFiles, PreferenceValue::Bool(_)) => true,
            (Self::Countdown, PreferenceValue::Int(secs)) => Countdown::from_secs(*secs).is_some(),
            (Self::SaveDirectory, PreferenceValue::Text(s)) => !s.is_empty(),
            (Self::UserColor, PreferenceValue::Data(_)) => true,
            _ => false,
        }
    }
}

impl FromStr for PreferenceKey {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_KEYS
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownKeyError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_stable() {
        let names: Vec<&str> = ALL_KEYS.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "videoFormat",
                "encoder",
                "hideSelf",
                "audioFormat",
                "audioQuality",
                "countdown",
                "hideDesktopFiles",
                "saveDirectory",
                "userColor",
            ]
        );
    }

    #[test]
    fn parse_exact_and_case_insensitive() {
        assert_eq!(
            "audioFormat".parse::<PreferenceKey>().unwrap(),
            PreferenceKey::AudioFormat
        );
        assert_eq!(
            "HIDEDESKTOPFILES".parse::<PreferenceKey>().unwrap(),
            PreferenceKey::HideDesktopFiles
        );
        assert_eq!(
            " userColor ".parse::<PreferenceKey>().unwrap(),
            PreferenceKey::UserColor
        );
    }

    #[test]
    fn parse_unknown() {
        let err = "launchAtLogin".parse::<PreferenceKey>().unwrap_err();
        assert_eq!(err.input, "launchAtLogin");
    }

    #[test]
    fn defaults_match_kind() {
        for key in ALL_KEYS {
            if let Some(value) = key.default_value() {
                assert_eq!(value.kind(), key.kind(), "default for {}", key);
            }
        }
    }

    #[test]
    fn defaults_are_accepted() {
        for key in ALL_KEYS {
            if let Some(value) = key.default_value() {
                assert!(key.accepts(&value), "default for {}", key);
            }
        }
    }

    #[test]
    fn accepts_rejects_bad_values() {
        assert!(!PreferenceKey::AudioFormat.accepts(&PreferenceValue::text("mp3")));
        assert!(!PreferenceKey::Countdown.accepts(&PreferenceValue::Int(4)));
        assert!(!PreferenceKey::HideSelf.accepts(&PreferenceValue::text("true")));
        assert!(!PreferenceKey::SaveDirectory.accepts(&PreferenceValue::text("")));
        assert!(PreferenceKey::UserColor.accepts(&PreferenceValue::Data(vec![1, 2, 3])));
    }

    #[test]
    fn optional_keys_have_no_default() {
        assert!(PreferenceKey::SaveDirectory.default_value().is_none());
        assert!(PreferenceKey::UserColor.default_value().is_none());
    }

    #[test]
    fn scalar_defaults() {
        assert_eq!(
            PreferenceKey::HideSelf.default_value(),
            Some(PreferenceValue::Bool(true))
        );
        assert_eq!(
            PreferenceKey::Countdown.default_value(),
            Some(PreferenceValue::Int(0))
        );
        assert_eq!(
            PreferenceKey::VideoFormat.default_value(),
            Some(PreferenceValue::text("mp4"))
        );
    }
}
