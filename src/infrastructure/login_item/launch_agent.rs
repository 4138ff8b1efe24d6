//! LaunchAgent login item adapter (macOS)

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{Direction, LoginItemService, LoginItemStatus, RegistrationError};

/// Login item registered as a per-user LaunchAgent with `RunAtLoad`
pub struct LaunchAgent {
    plist_path: PathBuf,
    label: String,
    program: PathBuf,
}

impl LaunchAgent {
    /// Create for `~/Library/LaunchAgents/<label>.plist`
    pub fn new(label: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        let agents_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join("Library")
            .join("LaunchAgents");
        Self::with_dir(agents_dir, label, program)
    }

    /// Create with a custom agents directory
    pub fn with_dir(
        dir: impl AsRef<Path>,
        label: impl Into<String>,
        program: impl Into<PathBuf>,
    ) -> Self {
        let label = label.into();
        Self {
            plist_path: dir.as_ref().join(format!("{}.plist", label)),
            label,
            program: program.into(),
        }
    }

    /// Path of the property list
    pub fn plist_path(&self) -> &Path {
        &self.plist_path
    }

    fn plist(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>{}</string>
    <key>ProgramArguments</key>
    <array>
        <string>{}</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
</dict>
</plist>
"#,
            xml_escape(&self.label),
            xml_escape(&self.program.to_string_lossy())
        )
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[async_trait]
impl LoginItemService for LaunchAgent {
    async fn status(&self) -> LoginItemStatus {
        LoginItemStatus::from_enabled(fs::try_exists(&self.plist_path).await.unwrap_or(false))
    }

    async fn register(&self) -> Result<(), RegistrationError> {
        let fail = |e: std::io::Error| RegistrationError::failed(Direction::Enable, e.to_string());

        if let Some(parent) = self.plist_path.parent() {
            fs::create_dir_all(parent).await.map_err(fail)?;
        }
        fs::write(&self.plist_path, self.plist()).await.map_err(fail)
    }

    async fn unregister(&self) -> Result<(), RegistrationError> {
        match fs::remove_file(&self.plist_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RegistrationError::failed(Direction::Disable, e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plist_path_uses_label() {
        let agent = LaunchAgent::with_dir(
            "/Users/u/Library/LaunchAgents",
            "io.example.rec",
            "/bin/rec",
        );
        assert_eq!(
            agent.plist_path(),
            Path::new("/Users/u/Library/LaunchAgents/io.example.rec.plist")
        );
    }

    #[test]
    fn plist_runs_at_load() {
        let agent = LaunchAgent::with_dir(
            "/tmp",
            "io.example.rec",
            "/Applications/Rec & Co.app/rec",
        );
        let plist = agent.plist();
        assert!(plist.contains("<string>io.example.rec</string>"));
        assert!(plist.contains("<key>RunAtLoad</key>\n    <true/>"));
        assert!(plist.contains("Rec &amp; Co.app"));
    }

    #[tokio::test]
    async fn register_and_unregister() {
        let dir = tempfile::tempdir().unwrap();
        let agent = LaunchAgent::with_dir(
            dir.path().join("LaunchAgents"),
            "io.example.rec",
            "/bin/rec",
        );

        assert_eq!(agent.status().await, LoginItemStatus::Disabled);
        agent.register().await.unwrap();
        assert_eq!(agent.status().await, LoginItemStatus::Enabled);
        agent.unregister().await.unwrap();
        agent.unregister().await.unwrap();
        assert_eq!(agent.status().await, LoginItemStatus::Disabled);
    }
}
