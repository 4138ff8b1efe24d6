//! In-memory preference store adapter

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{check_kind, PreferenceStore};
use crate::domain::error::ConfigError;
use crate::domain::preferences::{PreferenceKey, PreferenceValue};

/// Preference store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<PreferenceKey, PreferenceValue>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with values
    pub fn with_values(values: impl IntoIterator<Item = (PreferenceKey, PreferenceValue)>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: PreferenceKey) -> Option<PreferenceValue> {
        self.values.lock().await.get(&key).cloned()
    }

    async fn set(&self, key: PreferenceKey, value: PreferenceValue) -> Result<(), ConfigError> {
        check_kind(key, &value)?;
        self.values.lock().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: PreferenceKey) -> Result<(), ConfigError> {
        self.values.lock().await.remove(&key);
        Ok(())
    }

    fn location(&self) -> String {
        "(memory)".to_string()
    }
}
