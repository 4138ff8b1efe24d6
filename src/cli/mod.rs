//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup
//! and the main application runner.

pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;
pub mod settings_cmd;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, LoginItemAction};
pub use presenter::Presenter;
