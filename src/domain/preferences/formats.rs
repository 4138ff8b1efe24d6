//! Recording format value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidChoiceError;

/// Output container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VideoFormat {
    Mov,
    #[default]
    Mp4,
}

impl VideoFormat {
    pub const ALL: &'static [VideoFormat] = &[Self::Mov, Self::Mp4];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mov => "mov",
            Self::Mp4 => "mp4",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mov => "MOV",
            Self::Mp4 => "MP4",
        }
    }
}

impl FromStr for VideoFormat {
    type Err = InvalidChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mov" => Ok(Self::Mov),
            "mp4" => Ok(Self::Mp4),
            _ => Err(InvalidChoiceError {
                kind: "video format",
                input: s.to_string(),
                valid: "mov, mp4",
            }),
        }
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Video codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoder {
    #[default]
    H264,
    H265,
}

impl Encoder {
    pub const ALL: &'static [Encoder] = &[Self::H264, Self::H265];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::H264 => "h264",
            Self::H265 => "h265",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::H264 => "H.264",
            Self::H265 => "H.265",
        }
    }
}

impl FromStr for Encoder {
    type Err = InvalidChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h264" | "h.264" => Ok(Self::H264),
            "h265" | "h.265" | "hevc" => Ok(Self::H265),
            _ => Err(InvalidChoiceError {
                kind: "encoder",
                input: s.to_string(),
                valid: "h264, h265",
            }),
        }
    }
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audio codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioFormat {
    #[default]
    Aac,
    Alac,
    Flac,
    Opus,
}

impl AudioFormat {
    pub const ALL: &'static [AudioFormat] = &[Self::Aac, Self::Alac, Self::Flac, Self::Opus];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aac => "aac",
            Self::Alac => "alac",
            Self::Flac => "flac",
            Self::Opus => "opus",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aac => "AAC",
            Self::Alac => "ALAC (Lossless)",
            Self::Flac => "FLAC (Lossless)",
            Self::Opus => "Opus",
        }
    }

    /// Lossless formats have no bitrate to choose
    pub const fn is_lossless(&self) -> bool {
        matches!(self, Self::Alac | Self::Flac)
    }

    /// Format the capture pipeline must actually use for the given container.
    /// MP4 cannot carry Opus, so AAC is substituted.
    pub const fn for_container(self, container: VideoFormat) -> Self {
        match (self, container) {
            (Self::Opus, VideoFormat::Mp4) => Self::Aac,
            (format, _) => format,
        }
    }
}

impl FromStr for AudioFormat {
    type Err = InvalidChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aac" => Ok(Self::Aac),
            "alac" => Ok(Self::Alac),
            "flac" => Ok(Self::Flac),
            "opus" => Ok(Self::Opus),
            _ => Err(InvalidChoiceError {
                kind: "audio format",
                input: s.to_string(),
                valid: "aac, alac, flac, opus",
            }),
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lossy audio quality level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum AudioQuality {
    Normal,
    Good,
    #[default]
    High,
    Extreme,
}

impl AudioQuality {
    pub const ALL: &'static [AudioQuality] =
        &[Self::Normal, Self::Good, Self::High, Self::Extreme];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Good => "good",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }

    pub const fn bitrate_kbps(&self) -> u32 {
        match self {
            Self::Normal => 128,
            Self::Good => 192,
            Self::High => 256,
            Self::Extreme => 320,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal - 128Kbps",
            Self::Good => "Good - 192Kbps",
            Self::High => "High - 256Kbps",
            Self::Extreme => "Extreme - 320Kbps",
        }
    }
}

impl FromStr for AudioQuality {
    type Err = InvalidChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "good" => Ok(Self::Good),
            "high" => Ok(Self::High),
            "extreme" => Ok(Self::Extreme),
            _ => Err(InvalidChoiceError {
                kind: "audio quality",
                input: s.to_string(),
                valid: "normal, good, high, extreme",
            }),
        }
    }
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Quality actually in effect for an audio format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveAudioQuality {
    Lossless,
    Lossy(AudioQuality),
}

impl EffectiveAudioQuality {
    /// Resolve the stored quality against the selected format
    pub const fn resolve(format: AudioFormat, stored: AudioQuality) -> Self {
        if format.is_lossless() {
            Self::Lossless
        } else {
            Self::Lossy(stored)
        }
    }

    /// Whether the user may pick a quality
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Lossy(_))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lossless => "lossless",
            Self::Lossy(q) => q.as_str(),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lossless => "Lossless",
            Self::Lossy(q) => q.label(),
        }
    }
}

impl fmt::Display for EffectiveAudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pre-recording delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Countdown {
    #[default]
    None,
    Three,
    Five,
    Ten,
}

impl Countdown {
    pub const ALL: &'static [Countdown] = &[Self::None, Self::Three, Self::Five, Self::Ten];

    pub const fn as_secs(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Three => 3,
            Self::Five => 5,
            Self::Ten => 10,
        }
    }

    /// Map a number of seconds to one of the allowed delays
    pub const fn from_secs(secs: i64) -> Option<Self> {
        match secs {
            0 => Some(Self::None),
            3 => Some(Self::Three),
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            _ => None,
        }
    }
}

impl FromStr for Countdown {
    type Err = InvalidChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let digits = trimmed.strip_suffix('s').unwrap_or(&trimmed);
        digits
            .parse::<i64>()
            .ok()
            .and_then(Self::from_secs)
            .ok_or_else(|| InvalidChoiceError {
                kind: "countdown",
                input: s.to_string(),
                valid: "0, 3, 5, 10 (seconds)",
            })
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs())
    }
}
