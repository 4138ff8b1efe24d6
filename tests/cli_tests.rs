//! CLI integration tests

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn quickrec_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quickrec-prefs"));
    cmd.env_remove("QUICKREC_PREFS_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Command bound to a preferences file inside `dir`
fn with_store(dir: &TempDir) -> Command {
    let mut cmd = quickrec_bin();
    cmd.arg("--store").arg(store_path(dir.path()));
    cmd
}

fn store_path(dir: &Path) -> std::path::PathBuf {
    dir.join("preferences.toml")
}

#[test]
fn help_output() {
    quickrec_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("preferences"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("output-dir"))
        .stdout(predicate::str::contains("login-item"))
        .stdout(predicate::str::contains("--store"));
}

#[test]
fn version_output() {
    quickrec_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quickrec-prefs"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn path_command_prints_store_location() {
    let dir = TempDir::new().unwrap();
    with_store(&dir)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("preferences.toml"));
}

#[test]
fn path_honors_env_variable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("from-env.toml");
    quickrec_bin()
        .env("QUICKREC_PREFS_FILE", &path)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env.toml"));
}

#[test]
fn show_lists_defaults_without_writing() {
    let dir = TempDir::new().unwrap();
    with_store(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("videoFormat: mp4"))
        .stdout(predicate::str::contains("encoder: h264"))
        .stdout(predicate::str::contains("audioFormat: aac"))
        .stdout(predicate::str::contains("audioQuality: high"))
        .stdout(predicate::str::contains("hideSelf: true"))
        .stdout(predicate::str::contains("countdown: 0"))
        .stdout(predicate::str::contains("saveDirectory: (not set)"))
        .stdout(predicate::str::contains("userColor: #000000"));

    assert!(!store_path(dir.path()).exists());
}

#[test]
fn show_keeps_undecodable_color_bytes() {
    let dir = TempDir::new().unwrap();
    let path = store_path(dir.path());
    std::fs::write(&path, "userColor = \"3q0=\"\n").unwrap();
    let before = std::fs::read(&path).unwrap();

    with_store(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("userColor: #000000"));

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn show_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    with_store(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("videoFormat"));
}

#[test]
fn show_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = with_store(&dir)
        .args(["show", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["videoFormat"], "mp4");
    assert_eq!(value["countdown"], 0);
    assert_eq!(value["hideDesktopFiles"], false);
}

#[test]
fn set_then_get_persists_across_runs() {
    let dir = TempDir::new().unwrap();
    with_store(&dir)
        .args(["set", "countdown", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("countdown = 5"));

    with_store(&dir)
        .args(["get", "countdown"])
        .assert()
        .success()
        .stdout("5\n");

    let content = std::fs::read_to_string(store_path(dir.path())).unwrap();
    assert!(content.contains("countdown = 5"));
}

#[test]
fn lossless_format_locks_quality() {
    let dir = TempDir::new().unwrap();
    with_store(&dir)
        .args(["set", "audioQuality", "extreme"])
        .assert()
        .success();
    with_store(&dir)
        .args(["set", "audioFormat", "flac"])
        .assert()
        .success();

    with_store(&dir)
        .args(["get", "audioQuality"])
        .assert()
        .success()
        .stdout("lossless\n");

    with_store(&dir)
        .args(["set", "audioQuality", "normal"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("lossless"));

    // Switching back to a lossy format restores the stored quality
    with_store(&dir)
        .args(["set", "audioFormat", "aac"])
        .assert()
        .success();
    with_store(&dir)
        .args(["get", "audioQuality"])
        .assert()
        .success()
        .stdout("extreme\n");
}

#[test]
fn user_color_round_trips() {
    let dir = TempDir::new().unwrap();
    with_store(&dir)
        .args(["set", "userColor", "#0A141E"])
        .assert()
        .success();

    with_store(&dir)
        .args(["get", "userColor"])
        .assert()
        .success()
        .stdout("#0A141E\n");
}

#[test]
fn clearing_user_color_falls_back_to_black() {
    let dir = TempDir::new().unwrap();
    with_store(&dir)
        .args(["set", "userColor", "#FF0000"])
        .assert()
        .success();
    with_store(&dir)
        .args(["set", "userColor", "none"])
        .assert()
        .success();

    let content = std::fs::read_to_string(store_path(dir.path())).unwrap();
    assert!(!content.contains("userColor"));

    with_store(&dir)
        .args(["get", "userColor"])
        .assert()
        .success()
        .stdout("#000000\n");
}

#[test]
fn output_dir_with_existing_directory() {
    let dir = TempDir::new().unwrap();
    let videos = dir.path().join("videos");
    std::fs::create_dir(&videos).unwrap();

    with_store(&dir)
        .arg("output-dir")
        .arg(&videos)
        .assert()
        .success();

    with_store(&dir)
        .args(["get", "saveDirectory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("videos"));
}

#[test]
fn output_dir_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    with_store(&dir)
        .arg("output-dir")
        .arg(dir.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not an existing directory"));

    with_store(&dir)
        .args(["get", "saveDirectory"])
        .assert()
        .success()
        .stdout("(not set)\n");
}

#[cfg(target_os = "linux")]
#[test]
fn output_dir_rejects_non_utf8_directory() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let clips = dir.path().join(OsStr::from_bytes(b"clips\xff"));
    std::fs::create_dir(&clips).unwrap();

    with_store(&dir)
        .arg("output-dir")
        .arg(&clips)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid UTF-8"));

    with_store(&dir)
        .args(["get", "saveDirectory"])
        .assert()
        .success()
        .stdout("(not set)\n");
}

#[test]
fn init_creates_file_once() {
    let dir = TempDir::new().unwrap();
    with_store(&dir).arg("init").assert().success();
    assert!(store_path(dir.path()).exists());

    with_store(&dir)
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn login_item_toggle_writes_autostart_entry() {
    let dir = TempDir::new().unwrap();
    let config_home = dir.path().join("config");
    let entry = config_home.join("autostart").join("quickrec-prefs.desktop");

    with_store(&dir)
        .env("XDG_CONFIG_HOME", &config_home)
        .args(["login-item", "status"])
        .assert()
        .success()
        .stdout("disabled\n");

    with_store(&dir)
        .env("XDG_CONFIG_HOME", &config_home)
        .args(["login-item", "toggle"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Launch at login enabled"));
    assert!(entry.exists());

    with_store(&dir)
        .env("XDG_CONFIG_HOME", &config_home)
        .args(["login-item", "disable"])
        .assert()
        .success();
    assert!(!entry.exists());
}
