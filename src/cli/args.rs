//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infrastructure::PREFS_FILE_ENV;

/// quickrec-prefs - QuickRecorder recording preferences
#[derive(Parser, Debug)]
#[command(name = "quickrec-prefs")]
#[command(version)]
#[command(about = "Manage QuickRecorder recording preferences, output directory and launch at login")]
#[command(long_about = None)]
pub struct Cli {
    /// Preferences file to use instead of the default location
    #[arg(long, value_name = "FILE", global = true, env = PREFS_FILE_ENV)]
    pub store: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to `show`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show all settings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a setting
    Get {
        /// Preference key (e.g. countdown, audioFormat)
        key: String,
    },
    /// Change a setting
    Set {
        /// Preference key (e.g. countdown, audioFormat)
        key: String,
        /// New value (userColor takes #RRGGBB[AA] or "none")
        value: String,
    },
    /// Select the output directory
    OutputDir {
        /// Directory to use; opens a chooser when omitted
        path: Option<PathBuf>,
    },
    /// Manage launch at login
    LoginItem {
        #[command(subcommand)]
        action: LoginItemAction,
    },
    /// Create the preferences file with defaults
    Init,
    /// Show preferences file path
    Path,
}

/// Launch-at-login actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginItemAction {
    /// Launch at login
    Enable,
    /// Stop launching at login
    Disable,
    /// Flip the current setting
    Toggle,
    /// Show whether launch at login is enabled
    Status,
}
