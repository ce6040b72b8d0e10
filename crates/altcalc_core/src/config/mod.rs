//! Application configuration.
//!
//! A small TOML settings file holding UI preferences and the log level.
//! Form-session data (field values, results) is deliberately never
//! persisted; only ambient preferences survive a restart.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{LoggingSettings, Settings, UiSettings};
