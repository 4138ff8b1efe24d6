//! XDG autostart login item adapter (Linux desktops)

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{Direction, LoginItemService, LoginItemStatus, RegistrationError};

/// Login item registered as a desktop entry in `$XDG_CONFIG_HOME/autostart`
pub struct XdgAutostart {
    entry_path: PathBuf,
    app_name: String,
    exec: PathBuf,
}

impl XdgAutostart {
    /// Create for the running executable at the default autostart location
    pub fn new(app_id: &str, app_name: impl Into<String>, exec: impl Into<PathBuf>) -> Self {
        let autostart_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("autostart");
        Self::with_dir(autostart_dir, app_id, app_name, exec)
    }

    /// Create with a custom autostart directory
    pub fn with_dir(
        dir: impl AsRef<Path>,
        app_id: &str,
        app_name: impl Into<String>,
        exec: impl Into<PathBuf>,
    ) -> Self {
        Self {
            entry_path: dir.as_ref().join(format!("{}.desktop", app_id)),
            app_name: app_name.into(),
            exec: exec.into(),
        }
    }

    /// Path of the desktop entry
    pub fn entry_path(&self) -> &Path {
        &self.entry_path
    }

    fn desktop_entry(&self) -> String {
        format!(
            "[Desktop Entry]\n\
             Type=Application\n\
             Name={}\n\
             Exec=\"{}\"\n\
             X-GNOME-Autostart-enabled=true\n\
             NoDisplay=true\n",
            self.app_name,
            quote_exec_arg(&self.exec.to_string_lossy())
        )
    }
}

/// Escape a single `Exec` argument for use inside double quotes.
///
/// Quoting escapes `"`, `` ` ``, `$` and `\`; the string value escaping is
/// then applied on top, doubling every backslash. Field codes start with `%`
/// so a literal percent sign is written as `%%`.
fn quote_exec_arg(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len());
    for c in arg.chars() {
        match c {
            // `\"` inside the quotes, each backslash doubled again
            '"' | '`' | '$' => {
                quoted.push_str(r"\\");
                quoted.push(c);
            }
            '\\' => quoted.push_str(r"\\\\"),
            '%' => quoted.push_str("%%"),
            _ => quoted.push(c),
        }
    }
    quoted
}

#[async_trait]
impl LoginItemService for XdgAutostart {
    async fn status(&self) -> LoginItemStatus {
        LoginItemStatus::from_enabled(fs::try_exists(&self.entry_path).await.unwrap_or(false))
    }

    async fn register(&self) -> Result<(), RegistrationError> {
        let fail = |e: std::io::Error| RegistrationError::failed(Direction::Enable, e.to_string());

        if let Some(parent) = self.entry_path.parent() {
            fs::create_dir_all(parent).await.map_err(fail)?;
        }
        fs::write(&self.entry_path, self.desktop_entry())
            .await
            .map_err(fail)
    }

    async fn unregister(&self) -> Result<(), RegistrationError> {
        match fs::remove_file(&self.entry_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RegistrationError::failed(Direction::Disable, e.to_string())),
        }
    }
}
