//! Settings surface integration tests against the file-backed adapters

use std::path::Path;

use quickrec_prefs::application::{
    read_background_color, read_recording_preferences, SettingsSurface,
};
use quickrec_prefs::domain::{AudioFormat, Countdown, EffectiveAudioQuality, Rgba, VideoFormat};
use quickrec_prefs::infrastructure::{PresetDirectoryPicker, TomlPreferenceStore, XdgAutostart};
use tempfile::TempDir;

fn store(dir: &Path) -> TomlPreferenceStore {
    TomlPreferenceStore::with_path(dir.join("preferences.toml"))
}

fn login_items(dir: &Path) -> XdgAutostart {
    XdgAutostart::with_dir(
        dir.join("autostart"),
        "quickrec-prefs",
        "QuickRecorder",
        "/usr/bin/quickrec",
    )
}

#[tokio::test]
async fn edits_survive_a_new_session() {
    let dir = TempDir::new().unwrap();
    let videos = dir.path().join("videos");
    std::fs::create_dir(&videos).unwrap();

    let mut surface = SettingsSurface::activate(
        store(dir.path()),
        login_items(dir.path()),
        PresetDirectoryPicker::new(Some(videos.clone())),
    )
    .await;
    surface.set_video_format(VideoFormat::Mov).await.unwrap();
    surface.set_countdown(Countdown::Three).await.unwrap();
    surface.set_audio_format(AudioFormat::Alac).await.unwrap();
    assert_eq!(
        surface.choose_output_directory().await.unwrap(),
        Some(videos.clone())
    );
    surface.set_background_color(Some(Rgba::from_rgb8(10, 20, 30)));
    surface.set_launch_at_login(true).await.unwrap();
    surface.close().await.unwrap();

    let prefs = read_recording_preferences(&store(dir.path())).await;
    assert_eq!(prefs.video_format, VideoFormat::Mov);
    assert_eq!(prefs.countdown, Countdown::Three);
    assert_eq!(prefs.save_directory, Some(videos));
    assert_eq!(prefs.effective_audio_quality(), EffectiveAudioQuality::Lossless);

    let color = read_background_color(&store(dir.path())).await.unwrap();
    assert_eq!(color.to_rgba8(), [10, 20, 30, 255]);

    let reopened = SettingsSurface::activate(
        store(dir.path()),
        login_items(dir.path()),
        PresetDirectoryPicker::cancelled(),
    )
    .await;
    assert!(reopened.view().launch_at_login.is_enabled());
    assert!(reopened.view().preferences.hide_self);
}

#[tokio::test]
async fn background_color_is_only_written_on_close() {
    let dir = TempDir::new().unwrap();
    let mut surface = SettingsSurface::activate(
        store(dir.path()),
        login_items(dir.path()),
        PresetDirectoryPicker::cancelled(),
    )
    .await;

    surface.set_background_color(Some(Rgba::from_rgb8(255, 0, 0)));
    assert!(read_background_color(&store(dir.path())).await.is_none());

    surface.close().await.unwrap();
    let color = read_background_color(&store(dir.path())).await.unwrap();
    assert_eq!(color.to_rgba8(), [255, 0, 0, 255]);
}

#[tokio::test]
async fn untouched_session_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let surface = SettingsSurface::activate(
        store(dir.path()),
        login_items(dir.path()),
        PresetDirectoryPicker::cancelled(),
    )
    .await;
    surface.close().await.unwrap();

    assert!(!dir.path().join("preferences.toml").exists());
}
