//! Login item infrastructure module
//!
//! Provides launch-at-login registration through XDG autostart entries on
//! Linux and LaunchAgents on macOS.

mod launch_agent;
mod unsupported;
mod xdg_autostart;

pub use launch_agent::LaunchAgent;
pub use unsupported::UnsupportedLoginItem;
pub use xdg_autostart::XdgAutostart;

use std::path::PathBuf;

use crate::application::ports::LoginItemService;

/// Identifier used for autostart entries
pub const APP_ID: &str = "quickrec-prefs";

/// LaunchAgent label
pub const BUNDLE_ID: &str = "io.github.quickrec.prefs";

/// Name shown in desktop session settings
pub const APP_NAME: &str = "QuickRecorder";

/// Create the login item service for the current platform
pub fn create_login_item_service() -> Box<dyn LoginItemService> {
    let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from(APP_ID));

    #[cfg(target_os = "macos")]
    {
        Box::new(LaunchAgent::new(BUNDLE_ID, exe))
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        Box::new(XdgAutostart::new(APP_ID, APP_NAME, exe))
    }

    #[cfg(not(unix))]
    {
        let _ = exe;
        Box::new(UnsupportedLoginItem)
    }
}
