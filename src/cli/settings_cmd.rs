//! Settings command handlers

use std::path::PathBuf;

use serde::Serialize;

use crate::application::ports::{DirectoryPicker, LoginItemService, PreferenceStore};
use crate::application::{SettingsError, SettingsSurface, SettingsView};
use crate::domain::error::ConfigError;
use crate::domain::preferences::{EffectiveAudioQuality, PreferenceKey, SettingEdit, ALL_KEYS};
use crate::infrastructure::TomlPreferenceStore;

use super::args::LoginItemAction;
use super::presenter::Presenter;

/// Placeholder for unset optional values
pub const NOT_SET: &str = "(not set)";

/// Work done against an activated settings surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceAction {
    Show { json: bool },
    Get { key: String },
    Set { key: String, value: String },
    OutputDir { path: Option<PathBuf> },
    LoginItem(LoginItemAction),
}

/// Activate a surface, run one action on it, then close it.
///
/// The surface is closed even when the action fails so a pending
/// background color is never lost.
pub async fn run_surface_action<S, L, P>(
    action: SurfaceAction,
    store: S,
    login_service: L,
    picker: P,
    presenter: &mut Presenter,
) -> Result<(), SettingsError>
where
    S: PreferenceStore,
    L: LoginItemService,
    P: DirectoryPicker,
{
    let mut surface = SettingsSurface::activate(store, login_service, picker).await;
    let result = handle_surface_action(action, &mut surface, presenter).await;
    let closed = surface.close().await;
    result?;
    closed
}

async fn handle_surface_action<S, L, P>(
    action: SurfaceAction,
    surface: &mut SettingsSurface<S, L, P>,
    presenter: &mut Presenter,
) -> Result<(), SettingsError>
where
    S: PreferenceStore,
    L: LoginItemService,
    P: DirectoryPicker,
{
    match action {
        SurfaceAction::Show { json: true } => {
            presenter.output(&settings_json(surface.view())?);
            Ok(())
        }
        SurfaceAction::Show { json: false } => {
            render_settings(surface.view(), presenter);
            Ok(())
        }
        SurfaceAction::Get { key } => {
            let key = parse_key(&key)?;
            presenter.output(&display_value(surface.view(), key));
            Ok(())
        }
        SurfaceAction::Set { key, value } => {
            let key = parse_key(&key)?;
            let edit = SettingEdit::parse(key, &value)?;
            surface.apply(edit).await?;
            presenter.success(&format!("{} = {}", key, display_value(surface.view(), key)));
            warn_on_format_side_effects(surface.view(), key, presenter);
            Ok(())
        }
        SurfaceAction::OutputDir { path } => handle_output_dir(surface, presenter, path).await,
        SurfaceAction::LoginItem(action) => handle_login_item(surface, presenter, action).await,
    }
}

fn warn_on_format_side_effects(view: &SettingsView, key: PreferenceKey, presenter: &Presenter) {
    if !matches!(key, PreferenceKey::AudioFormat | PreferenceKey::VideoFormat) {
        return;
    }
    let prefs = &view.preferences;
    if key == PreferenceKey::AudioFormat && !view.is_quality_editable() {
        presenter.warn(&format!("Audio quality is fixed to lossless for {}", prefs.audio_format));
    }
    if prefs.effective_audio_format() != prefs.audio_format {
        presenter.warn(&format!(
            "{} audio is recorded as {} in {} files",
            prefs.audio_format.label(),
            prefs.effective_audio_format().label(),
            prefs.video_format.label()
        ));
    }
}

async fn handle_output_dir<S, L, P>(
    surface: &mut SettingsSurface<S, L, P>,
    presenter: &mut Presenter,
    path: Option<PathBuf>,
) -> Result<(), SettingsError>
where
    S: PreferenceStore,
    L: LoginItemService,
    P: DirectoryPicker,
{
    let interactive = path.is_none();
    if interactive {
        presenter.start_spinner("Waiting for directory selection...");
    }
    let chosen = surface.choose_output_directory().await;
    presenter.stop_spinner();

    match (chosen?, path) {
        (Some(dir), _) => {
            presenter.success(&format!("Output directory: {}", dir.display()));
            Ok(())
        }
        (None, Some(requested)) => Err(SettingsError::NotADirectory(requested)),
        (None, None) => {
            presenter.info("No directory selected, output directory unchanged");
            Ok(())
        }
    }
}

async fn handle_login_item<S, L, P>(
    surface: &mut SettingsSurface<S, L, P>,
    presenter: &Presenter,
    action: LoginItemAction,
) -> Result<(), SettingsError>
where
    S: PreferenceStore,
    L: LoginItemService,
    P: DirectoryPicker,
{
    match action {
        LoginItemAction::Status => {
            presenter.output(surface.view().launch_at_login.as_str());
            return Ok(());
        }
        LoginItemAction::Enable => surface.set_launch_at_login(true).await?,
        LoginItemAction::Disable => surface.set_launch_at_login(false).await?,
        LoginItemAction::Toggle => surface.toggle_launch_at_login().await?,
    }
    presenter.success(&format!("Launch at login {}", surface.view().launch_at_login));
    Ok(())
}

/// Create the preferences file with default values
pub async fn handle_init(
    store: &TomlPreferenceStore,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!("Preferences file created at: {}", store.path().display()));
    Ok(())
}

/// Print where preferences are stored
pub fn handle_path<S: PreferenceStore + ?Sized>(store: &S, presenter: &Presenter) {
    presenter.output(&store.location());
}

fn parse_key(input: &str) -> Result<PreferenceKey, ConfigError> {
    input
        .parse::<PreferenceKey>()
        .map_err(|e| ConfigError::ValidationError {
            key: input.to_string(),
            message: e.to_string(),
        })
}

/// Value of a key as the surface shows it.
///
/// Audio quality reads `lossless` while a lossless format is selected and
/// countdown is the number of seconds.
pub fn display_value(view: &SettingsView, key: PreferenceKey) -> String {
    let prefs = &view.preferences;
    match key {
        PreferenceKey::VideoFormat => prefs.video_format.to_string(),
        PreferenceKey::Encoder => prefs.encoder.to_string(),
        PreferenceKey::AudioFormat => prefs.audio_format.to_string(),
        PreferenceKey::AudioQuality => view.effective_audio_quality().to_string(),
        PreferenceKey::HideSelf => prefs.hide_self.to_string(),
        PreferenceKey::Countdown => prefs.countdown.as_secs().to_string(),
        PreferenceKey::HideDesktopFiles => prefs.hide_desktop_files.to_string(),
        PreferenceKey::SaveDirectory => prefs
            .save_directory
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
        PreferenceKey::UserColor => view
            .background_color
            .map(|c| c.to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
    }
}

fn render_settings(view: &SettingsView, presenter: &Presenter) {
    let prefs = &view.preferences;
    for &key in ALL_KEYS {
        let value = display_value(view, key);
        match key {
            PreferenceKey::AudioFormat if prefs.effective_audio_format() != prefs.audio_format => {
                presenter.key_value_note(
                    key.as_str(),
                    &value,
                    &format!(
                        "recorded as {} in {}",
                        prefs.effective_audio_format(),
                        prefs.video_format
                    ),
                );
            }
            PreferenceKey::AudioQuality => {
                let quality = view.effective_audio_quality();
                let note = if quality.is_editable() {
                    quality.label().to_string()
                } else {
                    format!("fixed for {}", prefs.audio_format)
                };
                presenter.key_value_note(key.as_str(), &value, &note);
            }
            PreferenceKey::Countdown => {
                presenter.key_value_note(key.as_str(), &value, &prefs.countdown.to_string());
            }
            _ => presenter.key_value(key.as_str(), &value),
        }
    }
    presenter.key_value("launchAtLogin", view.launch_at_login.as_str());
}

/// Machine-readable form of the view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub video_format: &'static str,
    pub encoder: &'static str,
    pub hide_self: bool,
    pub audio_format: &'static str,
    pub effective_audio_format: &'static str,
    pub audio_quality: &'static str,
    pub audio_quality_editable: bool,
    pub audio_bitrate_kbps: Option<u32>,
    pub countdown: u8,
    pub hide_desktop_files: bool,
    pub save_directory: Option<String>,
    pub user_color: Option<String>,
    pub launch_at_login: bool,
}

impl From<&SettingsView> for SettingsSnapshot {
    fn from(view: &SettingsView) -> Self {
        let prefs = &view.preferences;
        Self {
            video_format: prefs.video_format.as_str(),
            encoder: prefs.encoder.as_str(),
            hide_self: prefs.hide_self,
            audio_format: prefs.audio_format.as_str(),
            effective_audio_format: prefs.effective_audio_format().as_str(),
            audio_quality: view.effective_audio_quality().as_str(),
            audio_quality_editable: view.is_quality_editable(),
            audio_bitrate_kbps: match view.effective_audio_quality() {
                EffectiveAudioQuality::Lossy(quality) => Some(quality.bitrate_kbps()),
                EffectiveAudioQuality::Lossless => None,
            },
            countdown: prefs.countdown.as_secs(),
            hide_desktop_files: prefs.hide_desktop_files,
            save_directory: prefs
                .save_directory
                .as_ref()
                .map(|p| p.display().to_string()),
            user_color: view.background_color.map(|c| c.to_string()),
            launch_at_login: view.launch_at_login.is_enabled(),
        }
    }
}

fn settings_json(view: &SettingsView) -> Result<String, SettingsError> {
    serde_json::to_string_pretty(&SettingsSnapshot::from(view)).map_err(|e| {
        SettingsError::Store(ConfigError::WriteError(format!(
            "Failed to serialize settings: {}",
            e
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{LoginItemStatus, RegistrationError};
    use crate::domain::color::{codec, Rgba};
    use crate::domain::preferences::{
        AudioFormat, Countdown, PreferenceValue, RecordingPreferences,
    };
    use crate::infrastructure::{MemoryPreferenceStore, PresetDirectoryPicker};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeLoginItems {
        enabled: AtomicBool,
    }

    #[async_trait]
    impl LoginItemService for FakeLoginItems {
        async fn status(&self) -> LoginItemStatus {
            LoginItemStatus::from_enabled(self.enabled.load(Ordering::SeqCst))
        }

        async fn register(&self) -> Result<(), RegistrationError> {
            self.enabled.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn unregister(&self) -> Result<(), RegistrationError> {
            self.enabled.store(false, Ordering::SeqCst);
            Ok(())
        }
    }

    fn view(preferences: RecordingPreferences) -> SettingsView {
        SettingsView {
            preferences,
            background_color: Some(Rgba::BLACK),
            launch_at_login: LoginItemStatus::Disabled,
        }
    }

    async fn run(
        action: SurfaceAction,
        store: &Arc<MemoryPreferenceStore>,
        picker: PresetDirectoryPicker,
    ) -> Result<(), SettingsError> {
        let mut presenter = Presenter::new();
        run_surface_action(
            action,
            Arc::clone(store),
            FakeLoginItems::default(),
            picker,
            &mut presenter,
        )
        .await
    }

    #[test]
    fn display_value_shows_lossless_quality() {
        let view = view(RecordingPreferences {
            audio_format: AudioFormat::Flac,
            ..Default::default()
        });
        assert_eq!(display_value(&view, PreferenceKey::AudioQuality), "lossless");
    }

    #[test]
    fn display_value_formats_countdown_and_directory() {
        let view = view(RecordingPreferences {
            countdown: Countdown::Ten,
            ..Default::default()
        });
        assert_eq!(display_value(&view, PreferenceKey::Countdown), "10");
        assert_eq!(display_value(&view, PreferenceKey::SaveDirectory), NOT_SET);
        assert_eq!(display_value(&view, PreferenceKey::UserColor), "#000000");
    }

    #[test]
    fn settings_json_reports_effective_values() {
        let view = view(RecordingPreferences {
            audio_format: AudioFormat::Opus,
            ..Default::default()
        });
        let value = serde_json::to_value(SettingsSnapshot::from(&view)).unwrap();
        assert_eq!(value["audioFormat"], "opus");
        assert_eq!(value["effectiveAudioFormat"], "aac");
        assert_eq!(value["audioQuality"], "high");
        assert_eq!(value["audioBitrateKbps"], 256);
        assert_eq!(value["countdown"], 0);
        assert_eq!(value["hideSelf"], true);
        assert!(value["saveDirectory"].is_null());
        assert_eq!(value["launchAtLogin"], false);
    }

    #[tokio::test]
    async fn set_writes_through_to_store() {
        let store = Arc::new(MemoryPreferenceStore::new());
        run(
            SurfaceAction::Set {
                key: "countdown".into(),
                value: "5".into(),
            },
            &store,
            PresetDirectoryPicker::cancelled(),
        )
        .await
        .unwrap();

        assert_eq!(
            store.get(PreferenceKey::Countdown).await,
            Some(PreferenceValue::Int(5))
        );
    }

    #[tokio::test]
    async fn set_user_color_is_saved_on_close() {
        let store = Arc::new(MemoryPreferenceStore::new());
        run(
            SurfaceAction::Set {
                key: "userColor".into(),
                value: "#0A141E".into(),
            },
            &store,
            PresetDirectoryPicker::cancelled(),
        )
        .await
        .unwrap();

        let stored = store.get(PreferenceKey::UserColor).await.unwrap();
        let color = codec::decode(stored.as_data().unwrap()).unwrap();
        assert_eq!(color.to_rgba8(), [10, 20, 30, 255]);
    }

    #[tokio::test]
    async fn set_rejects_unknown_key() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let result = run(
            SurfaceAction::Set {
                key: "frameRate".into(),
                value: "60".into(),
            },
            &store,
            PresetDirectoryPicker::cancelled(),
        )
        .await;

        assert!(matches!(
            result,
            Err(SettingsError::Store(ConfigError::ValidationError { .. }))
        ));
    }

    #[tokio::test]
    async fn show_does_not_write_anything() {
        let store = Arc::new(MemoryPreferenceStore::new());
        run(
            SurfaceAction::Show { json: false },
            &store,
            PresetDirectoryPicker::cancelled(),
        )
        .await
        .unwrap();

        for &key in ALL_KEYS {
            assert!(store.get(key).await.is_none(), "{} was written", key);
        }
    }

    #[tokio::test]
    async fn output_dir_with_path_stores_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(MemoryPreferenceStore::new());
        run(
            SurfaceAction::OutputDir {
                path: Some(dir.path().to_path_buf()),
            },
            &store,
            PresetDirectoryPicker::new(Some(dir.path().to_path_buf())),
        )
        .await
        .unwrap();

        assert_eq!(
            store.get(PreferenceKey::SaveDirectory).await,
            Some(PreferenceValue::text(dir.path().to_string_lossy()))
        );
    }

    #[tokio::test]
    async fn output_dir_with_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let store = Arc::new(MemoryPreferenceStore::new());
        let result = run(
            SurfaceAction::OutputDir {
                path: Some(missing.clone()),
            },
            &store,
            PresetDirectoryPicker::new(Some(missing)),
        )
        .await;

        assert!(matches!(result, Err(SettingsError::NotADirectory(_))));
        assert!(store.get(PreferenceKey::SaveDirectory).await.is_none());
    }

    #[tokio::test]
    async fn output_dir_cancel_leaves_directory_unset() {
        let store = Arc::new(MemoryPreferenceStore::new());
        run(
            SurfaceAction::OutputDir { path: None },
            &store,
            PresetDirectoryPicker::cancelled(),
        )
        .await
        .unwrap();

        assert!(store.get(PreferenceKey::SaveDirectory).await.is_none());
    }
}
