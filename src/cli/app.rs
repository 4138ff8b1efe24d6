//! Main app runner

use std::process::ExitCode;

use tracing::debug;

use crate::application::ports::DirectoryPicker;
use crate::application::SettingsError;
use crate::domain::error::ConfigError;
use crate::infrastructure::{
    create_login_item_service, PresetDirectoryPicker, RfdDirectoryPicker, TomlPreferenceStore,
};

use super::args::{Cli, Commands};
use super::logging::init_logging;
use super::presenter::Presenter;
use super::settings_cmd::{handle_init, handle_path, run_surface_action, SurfaceAction};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a parsed command line
pub async fn run(cli: Cli) -> ExitCode {
    init_logging(cli.verbose);
    let mut presenter = Presenter::new();

    let store = match cli.store {
        Some(path) => TomlPreferenceStore::with_path(path),
        None => TomlPreferenceStore::new(),
    };
    debug!(path = %store.path().display(), "using preferences file");

    let action = match cli.command.unwrap_or(Commands::Show { json: false }) {
        Commands::Init => {
            return match handle_init(&store, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            };
        }
        Commands::Path => {
            handle_path(&store, &presenter);
            return ExitCode::from(EXIT_SUCCESS);
        }
        Commands::Show { json } => SurfaceAction::Show { json },
        Commands::Get { key } => SurfaceAction::Get { key },
        Commands::Set { key, value } => SurfaceAction::Set { key, value },
        Commands::OutputDir { path } => SurfaceAction::OutputDir { path },
        Commands::LoginItem { action } => SurfaceAction::LoginItem(action),
    };

    let picker = picker_for(&action);
    let login_service = create_login_item_service();

    match run_surface_action(action, store, login_service, picker, &mut presenter).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Only an output-dir command without a path opens the native dialog
fn picker_for(action: &SurfaceAction) -> Box<dyn DirectoryPicker> {
    match action {
        SurfaceAction::OutputDir { path: None } => Box::new(RfdDirectoryPicker::new()),
        SurfaceAction::OutputDir { path } => Box::new(PresetDirectoryPicker::new(path.clone())),
        _ => Box::new(PresetDirectoryPicker::cancelled()),
    }
}

/// Map a settings error to a process exit code
pub fn exit_code_for(error: &SettingsError) -> u8 {
    match error {
        SettingsError::Store(ConfigError::ValidationError { .. })
        | SettingsError::QualityLocked(_)
        | SettingsError::NotADirectory(_)
        | SettingsError::NonUnicodePath(_) => EXIT_USAGE_ERROR,
        _ => EXIT_ERROR,
    }
}
