//! Login item port interface

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Whether the application launches at user login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoginItemStatus {
    Enabled,
    #[default]
    Disabled,
}

impl LoginItemStatus {
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for LoginItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a registration change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Enable,
    Disable,
}

impl Direction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Login item registration errors
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("Failed to {direction} launch at login: {message}")]
    Failed { direction: Direction, message: String },

    #[error("Launch at login is not supported on this platform")]
    Unsupported { direction: Direction },
}

impl RegistrationError {
    pub fn failed(direction: Direction, message: impl Into<String>) -> Self {
        Self::Failed {
            direction,
            message: message.into(),
        }
    }

    /// Direction of the change that failed
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Failed { direction, .. } | Self::Unsupported { direction } => *direction,
        }
    }
}

/// Port for the OS service that launches applications at login
#[async_trait]
pub trait LoginItemService: Send + Sync {
    /// Current registration as reported by the OS
    async fn status(&self) -> LoginItemStatus;

    /// Register the application to launch at login
    async fn register(&self) -> Result<(), RegistrationError>;

    /// Remove the launch-at-login registration
    async fn unregister(&self) -> Result<(), RegistrationError>;
}

/// Blanket implementation for boxed service types
#[async_trait]
impl LoginItemService for Box<dyn LoginItemService> {
    async fn status(&self) -> LoginItemStatus {
        self.as_ref().status().await
    }

    async fn register(&self) -> Result<(), RegistrationError> {
        self.as_ref().register().await
    }

    async fn unregister(&self) -> Result<(), RegistrationError> {
        self.as_ref().unregister().await
    }
}
