//! Domain error types

use thiserror::Error;

/// Error when a preference key is not part of the schema
#[derive(Debug, Clone, Error)]
#[error("Unknown preference key: \"{input}\". Valid keys are: audioFormat, audioQuality, videoFormat, encoder, hideSelf, countdown, hideDesktopFiles, saveDirectory, userColor")]
pub struct UnknownKeyError {
    pub input: String,
}

/// Error when an enumerated preference value cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid {kind}: \"{input}\". Valid values are: {valid}")]
pub struct InvalidChoiceError {
    pub kind: &'static str,
    pub input: String,
    pub valid: &'static str,
}

/// Error when a color string cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid color: \"{input}\". Expected #RRGGBB or #RRGGBBAA (e.g., #0A141E)")]
pub struct InvalidColorError {
    pub input: String,
}

/// Error when a color cannot be encoded for persistence
#[derive(Debug, Clone, Error)]
#[error("Cannot encode color: channel {channel} is {value}, expected a value in 0.0..=1.0")]
pub struct ColorEncodeError {
    pub channel: char,
    pub value: f32,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read preferences file: {0}")]
    ReadError(String),

    #[error("Failed to parse preferences file: {0}")]
    ParseError(String),

    #[error("Failed to write preferences file: {0}")]
    WriteError(String),

    #[error("Invalid value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Preferences file already exists at: {0}")]
    AlreadyExists(String),
}
