//! Settings surface use case
//!
//! One surface covers a single activate → edits → close cycle:
//!
//! - `activate` pulls every preference, the background color and the OS
//!   login item status into a [`SettingsView`]
//! - scalar edits are written through to the store immediately
//! - the background color lives only in the view until `close`
//! - directory and login item changes hit the OS right away

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::color::{codec, Rgba};
use crate::domain::error::ConfigError;
use crate::domain::preferences::{
    AudioFormat, AudioQuality, Countdown, EffectiveAudioQuality, Encoder, PreferenceKey,
    PreferenceValue, RecordingPreferences, SettingEdit, VideoFormat, ALL_KEYS,
};

use super::login_item::LoginItemController;
use super::ports::{
    DirectoryChooserOptions, DirectoryPicker, LoginItemService, LoginItemStatus, PreferenceStore,
    RegistrationError,
};

/// Title shown on the output directory chooser
pub const CHOOSER_TITLE: &str = "Select output directory";

/// Errors from the settings surface
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Store(#[from] ConfigError),

    #[error(transparent)]
    LoginItem(#[from] RegistrationError),

    #[error("Audio quality is fixed to lossless while the audio format is {0}")]
    QualityLocked(AudioFormat),

    #[error("Not an existing directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Directory path is not valid UTF-8 and cannot be stored: {}", .0.display())]
    NonUnicodePath(PathBuf),
}

/// Everything the surface displays
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    pub preferences: RecordingPreferences,
    /// `None` once the user clears the color; persisted on close
    pub background_color: Option<Rgba>,
    pub launch_at_login: LoginItemStatus,
}

impl SettingsView {
    /// Quality shown in the selector ("lossless" for ALAC/FLAC)
    pub fn effective_audio_quality(&self) -> EffectiveAudioQuality {
        self.preferences.effective_audio_quality()
    }

    /// Whether the quality selector is enabled
    pub fn is_quality_editable(&self) -> bool {
        self.preferences.is_quality_editable()
    }

    /// Color to paint, falling back to black
    pub fn background_color_or_default(&self) -> Rgba {
        self.background_color.unwrap_or_default()
    }
}

/// Read the recording preferences the capture pipeline must honor.
///
/// Values that are present but cannot be interpreted are logged and
/// replaced by their defaults.
pub async fn read_recording_preferences<S: PreferenceStore + ?Sized>(
    store: &S,
) -> RecordingPreferences {
    let mut values = HashMap::new();
    for key in ALL_KEYS.iter().copied() {
        if key == PreferenceKey::UserColor {
            continue;
        }
        if let Some(value) = store.get(key).await {
            if key.accepts(&value) {
                values.insert(key, value);
            } else {
                warn!(
                    key = %key,
                    value = %value,
                    "ignoring invalid stored preference, using default"
                );
            }
        }
    }
    RecordingPreferences::from_lookup(|key| values.remove(&key))
}

/// Read the stored background color, or None if absent or undecodable
pub async fn read_background_color<S: PreferenceStore + ?Sized>(store: &S) -> Option<Rgba> {
    let value = store.get(PreferenceKey::UserColor).await?;
    let Some(bytes) = value.as_data() else {
        warn!(kind = %value.kind(), "stored background color has the wrong kind");
        return None;
    };
    let color = codec::decode(bytes);
    if color.is_none() {
        warn!(len = bytes.len(), "stored background color could not be decoded");
    }
    color
}

/// Interactive settings surface
pub struct SettingsSurface<S, L, P>
where
    S: PreferenceStore,
    L: LoginItemService,
    P: DirectoryPicker,
{
    store: S,
    login_items: LoginItemController<L>,
    picker: P,
    view: SettingsView,
    stored_color: Option<Vec<u8>>,
    color_edited: bool,
}

impl<S, L, P> SettingsSurface<S, L, P>
where
    S: PreferenceStore,
    L: LoginItemService,
    P: DirectoryPicker,
{
    /// Pull current values and open the surface
    pub async fn activate(store: S, login_service: L, picker: P) -> Self {
        let login_items = LoginItemController::new(login_service);
        let preferences = read_recording_preferences(&store).await;
        let stored_color = store
            .get(PreferenceKey::UserColor)
            .await
            .and_then(|v| v.as_data().map(<[u8]>::to_vec));
        let background_color = read_background_color(&store).await.unwrap_or_default();
        let launch_at_login = login_items.status().await;

        debug!(store = %store.location(), "settings surface activated");

        Self {
            store,
            login_items,
            picker,
            view: SettingsView {
                preferences,
                background_color: Some(background_color),
                launch_at_login,
            },
            stored_color,
            color_edited: false,
        }
    }

    /// Current state of the surface
    pub fn view(&self) -> &SettingsView {
        &self.view
    }

    /// Apply a single edit
    pub async fn apply(&mut self, edit: SettingEdit) -> Result<(), SettingsError> {
        match edit {
            SettingEdit::VideoFormat(v) => self.set_video_format(v).await,
            SettingEdit::Encoder(v) => self.set_encoder(v).await,
            SettingEdit::AudioFormat(v) => self.set_audio_format(v).await,
            SettingEdit::AudioQuality(v) => self.set_audio_quality(v).await,
            SettingEdit::HideSelf(v) => self.set_hide_self(v).await,
            SettingEdit::Countdown(v) => self.set_countdown(v).await,
            SettingEdit::HideDesktopFiles(v) => self.set_hide_desktop_files(v).await,
            SettingEdit::SaveDirectory(path) => self.set_save_directory(&path).await,
            SettingEdit::BackgroundColor(color) => {
                self.set_background_color(color);
                Ok(())
            }
        }
    }

    pub async fn set_video_format(&mut self, format: VideoFormat) -> Result<(), SettingsError> {
        self.persist(&SettingEdit::VideoFormat(format)).await?;
        self.view.preferences.video_format = format;
        Ok(())
    }

    pub async fn set_encoder(&mut self, encoder: Encoder) -> Result<(), SettingsError> {
        self.persist(&SettingEdit::Encoder(encoder)).await?;
        self.view.preferences.encoder = encoder;
        Ok(())
    }

    /// Change the audio format. The stored quality is kept as is, so it
    /// comes back when switching from a lossless format to a lossy one.
    pub async fn set_audio_format(&mut self, format: AudioFormat) -> Result<(), SettingsError> {
        self.persist(&SettingEdit::AudioFormat(format)).await?;
        self.view.preferences.audio_format = format;
        Ok(())
    }

    /// Change the lossy quality; rejected while the format is lossless
    pub async fn set_audio_quality(&mut self, quality: AudioQuality) -> Result<(), SettingsError> {
        let format = self.view.preferences.audio_format;
        if format.is_lossless() {
            return Err(SettingsError::QualityLocked(format));
        }
        self.persist(&SettingEdit::AudioQuality(quality)).await?;
        self.view.preferences.audio_quality = quality;
        Ok(())
    }

    pub async fn set_hide_self(&mut self, hide: bool) -> Result<(), SettingsError> {
        self.persist(&SettingEdit::HideSelf(hide)).await?;
        self.view.preferences.hide_self = hide;
        Ok(())
    }

    pub async fn set_countdown(&mut self, countdown: Countdown) -> Result<(), SettingsError> {
        self.persist(&SettingEdit::Countdown(countdown)).await?;
        self.view.preferences.countdown = countdown;
        Ok(())
    }

    pub async fn set_hide_desktop_files(&mut self, hide: bool) -> Result<(), SettingsError> {
        self.persist(&SettingEdit::HideDesktopFiles(hide)).await?;
        self.view.preferences.hide_desktop_files = hide;
        Ok(())
    }

    /// Store an output directory. The path must name an existing directory
    /// and be valid UTF-8; relative paths are resolved against the working
    /// directory.
    pub async fn set_save_directory(&mut self, path: &Path) -> Result<(), SettingsError> {
        let absolute = absolutize(path);
        let is_dir = tokio::fs::metadata(&absolute)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(SettingsError::NotADirectory(absolute));
        }
        if absolute.to_str().is_none() {
            return Err(SettingsError::NonUnicodePath(absolute));
        }

        self.persist(&SettingEdit::SaveDirectory(absolute.clone())).await?;
        self.view.preferences.save_directory = Some(absolute);
        Ok(())
    }

    /// Change the background color. Held in the view until `close`.
    pub fn set_background_color(&mut self, color: Option<Rgba>) {
        self.view.background_color = color;
        self.color_edited = true;
    }

    /// Run the directory chooser and store the result.
    ///
    /// # Returns
    /// The stored directory, or None if the user cancelled or picked
    /// something that is not an existing directory
    pub async fn choose_output_directory(&mut self) -> Result<Option<PathBuf>, SettingsError> {
        let options = DirectoryChooserOptions::directories_only()
            .with_title(CHOOSER_TITLE)
            .with_starting_directory(self.view.preferences.save_directory.clone());

        let Some(chosen) = self.picker.choose(&options).await else {
            debug!("output directory selection cancelled");
            return Ok(None);
        };

        match self.set_save_directory(&chosen).await {
            Ok(()) => {
                info!(path = %chosen.display(), "output directory updated");
                Ok(self.view.preferences.save_directory.clone())
            }
            Err(SettingsError::NotADirectory(path)) => {
                warn!(
                    path = %path.display(),
                    "chooser returned something that is not a directory, ignoring"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Register or unregister launch at login.
    ///
    /// On failure the view is reconciled with what the OS reports and the
    /// error is returned.
    pub async fn set_launch_at_login(&mut self, enabled: bool) -> Result<(), SettingsError> {
        let result = self.login_items.set_enabled(enabled).await;
        self.reconcile_login_item(result).await
    }

    /// Flip launch at login based on what the OS currently reports
    pub async fn toggle_launch_at_login(&mut self) -> Result<(), SettingsError> {
        let result = self.login_items.toggle().await;
        self.reconcile_login_item(result).await
    }

    /// Close the surface, writing the background color back if it was
    /// edited.
    ///
    /// A color that cannot be encoded is logged and the stored value is
    /// left as it was.
    pub async fn close(self) -> Result<(), SettingsError> {
        // An unedited color is never written back, even if the stored
        // bytes could not be decoded
        if !self.color_edited {
            return Ok(());
        }

        match self.view.background_color {
            None => {
                if self.stored_color.is_some() {
                    self.store.remove(PreferenceKey::UserColor).await?;
                    debug!("background color cleared");
                }
            }
            Some(color) => match codec::encode(&color) {
                Err(e) => {
                    warn!(error = %e, "could not encode background color, keeping stored value");
                }
                Ok(bytes) => {
                    let unchanged = self.stored_color.as_deref() == Some(bytes.as_slice());
                    if !unchanged {
                        self.store
                            .set(PreferenceKey::UserColor, PreferenceValue::Data(bytes))
                            .await?;
                        debug!(color = %color, "background color saved");
                    }
                }
            },
        }
        Ok(())
    }

    async fn reconcile_login_item(
        &mut self,
        result: Result<LoginItemStatus, RegistrationError>,
    ) -> Result<(), SettingsError> {
        match result {
            Ok(status) => {
                self.view.launch_at_login = status;
                Ok(())
            }
            Err(e) => {
                self.view.launch_at_login = self.login_items.status().await;
                Err(e.into())
            }
        }
    }

    async fn persist(&self, edit: &SettingEdit) -> Result<(), SettingsError> {
        if let Some(value) = edit.immediate_value() {
            let key = edit.key();
            debug!(key = %key, value = %value, "saving preference");
            self.store.set(key, value).await?;
        }
        Ok(())
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
