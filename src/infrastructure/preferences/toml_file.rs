//! TOML file preference store adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tokio::fs;
use toml::{Table, Value};
use tracing::{debug, warn};

use crate::application::ports::{check_kind, PreferenceStore};
use crate::domain::error::ConfigError;
use crate::domain::preferences::{PreferenceKey, PreferenceValue, ValueKind, ALL_KEYS};

/// Environment variable overriding the preferences file location
pub const PREFS_FILE_ENV: &str = "QUICKREC_PREFS_FILE";

/// Preference store backed by a flat TOML table.
///
/// Keys are the stable identifiers (`audioFormat`, `countdown`, ...).
/// Color data is stored as base64 text. The file is re-read on every
/// access and rewritten on every change, so other processes see writes
/// as soon as they return.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    /// Create a store at the default XDG location
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("quickrec");

        Self {
            path: config_dir.join("preferences.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the file with every default value written out.
    /// Fails if the file already exists.
    pub async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        let mut table = Table::new();
        for key in ALL_KEYS {
            if let Some(value) = key.default_value() {
                table.insert(key.as_str().to_string(), to_toml(&value));
            }
        }
        self.write_table(&table).await
    }

    /// Read the whole table, treating a missing file as empty
    async fn read_table(&self) -> Result<Table, ConfigError> {
        if !self.exists() {
            return Ok(Table::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn write_table(&self, table: &Table) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml_string(table)?;

        // Write beside the target and rename so readers never see a partial file
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        debug!(path = %self.path.display(), "preferences written");
        Ok(())
    }

    fn parse_toml(content: &str) -> Result<Table, ConfigError> {
        content
            .parse::<Table>()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml_string(table: &Table) -> Result<String, ConfigError> {
        toml::to_string_pretty(table).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for TomlPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for TomlPreferenceStore {
    async fn get(&self, key: PreferenceKey) -> Option<PreferenceValue> {
        let table = match self.read_table().await {
            Ok(table) => table,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "preferences unreadable, using defaults"
                );
                return None;
            }
        };

        let raw = table.get(key.as_str())?;
        let value = from_toml(key.kind(), raw);
        if value.is_none() {
            warn!(key = %key, "stored value has the wrong type, ignoring");
        }
        value
    }

    async fn set(&self, key: PreferenceKey, value: PreferenceValue) -> Result<(), ConfigError> {
        check_kind(key, &value)?;

        let mut table = self.read_table().await?;
        table.insert(key.as_str().to_string(), to_toml(&value));
        self.write_table(&table).await
    }

    async fn remove(&self, key: PreferenceKey) -> Result<(), ConfigError> {
        if !self.exists() {
            return Ok(());
        }

        let mut table = self.read_table().await?;
        if table.remove(key.as_str()).is_some() {
            self.write_table(&table).await?;
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

fn to_toml(value: &PreferenceValue) -> Value {
    match value {
        PreferenceValue::Bool(b) => Value::Boolean(*b),
        PreferenceValue::Int(i) => Value::Integer(*i),
        PreferenceValue::Text(s) => Value::String(s.clone()),
        PreferenceValue::Data(d) => Value::String(BASE64.encode(d)),
    }
}

fn from_toml(kind: ValueKind, raw: &Value) -> Option<PreferenceValue> {
    match (kind, raw) {
        (ValueKind::Bool, Value::Boolean(b)) => Some(PreferenceValue::Bool(*b)),
        (ValueKind::Int, Value::Integer(i)) => Some(PreferenceValue::Int(*i)),
        (ValueKind::Text, Value::String(s)) => Some(PreferenceValue::Text(s.clone())),
        (ValueKind::Data, Value::String(s)) => BASE64.decode(s).ok().map(PreferenceValue::Data),
        _ => None,
    }
}
