//! Preference store port interface

use async_trait::async_trait;

use crate::domain::error::ConfigError;
use crate::domain::preferences::{PreferenceKey, PreferenceValue};

/// Port for durable preference storage.
///
/// Reads never fail: anything the store cannot produce a value for is
/// reported as absent. Writes are durable once they return `Ok`.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Get the stored value for a key, or None if absent.
    async fn get(&self, key: PreferenceKey) -> Option<PreferenceValue>;

    /// Store a value.
    ///
    /// # Errors
    /// `ConfigError::ValidationError` if the value kind does not match the
    /// key, `ConfigError::WriteError` if it could not be persisted.
    async fn set(&self, key: PreferenceKey, value: PreferenceValue) -> Result<(), ConfigError>;

    /// Remove a stored value. Removing an absent key is not an error.
    async fn remove(&self, key: PreferenceKey) -> Result<(), ConfigError>;

    /// Human-readable location of the backing storage
    fn location(&self) -> String;

    /// Get the stored value, or `default` if absent
    async fn get_or(&self, key: PreferenceKey, default: PreferenceValue) -> PreferenceValue {
        self.get(key).await.unwrap_or(default)
    }
}

/// Reject values whose kind does not match the key
pub fn check_kind(key: PreferenceKey, value: &PreferenceValue) -> Result<(), ConfigError> {
    if value.kind() == key.kind() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("expected {} value, got {}", key.kind(), value.kind()),
        })
    }
}

/// Blanket implementation for shared store references
#[async_trait]
impl<S: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<S> {
    async fn get(&self, key: PreferenceKey) -> Option<PreferenceValue> {
        self.as_ref().get(key).await
    }

    async fn set(&self, key: PreferenceKey, value: PreferenceValue) -> Result<(), ConfigError> {
        self.as_ref().set(key, value).await
    }

    async fn remove(&self, key: PreferenceKey) -> Result<(), ConfigError> {
        self.as_ref().remove(key).await
    }

    fn location(&self) -> String {
        self.as_ref().location()
    }
}
