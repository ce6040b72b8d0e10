//! Altimetry Calculator - Main entry point
//!
//! Handles application-level logging initialization, configuration
//! loading, and window launch.

use std::path::PathBuf;

use altcalc_core::config::ConfigManager;
use altcalc_core::logging::{self, LogLevel};

mod app;
mod pages;
mod theme;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for the default log level)
    let config_path = default_config_path();
    let mut config = ConfigManager::new(&config_path);

    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    // Initialize application-level logging
    let level = LogLevel::from_str_or_default(&config.settings().logging.level);
    logging::init_tracing(level);

    tracing::info!("Altimetry Calculator starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", altcalc_core::version());

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("Altimetry Calculator")
        .theme(App::theme)
        .window_size(iced::Size::new(720.0, 640.0))
        .run()
}
