//! Application state and message handling.
//!
//! One-way data flow: every mutation goes through a [`Message`] handled
//! in [`App::update`]; [`App::view`] renders deterministically from the
//! current [`Session`].

use iced::{Element, Task, Theme};

use altcalc_core::config::ConfigManager;
use altcalc_core::inputs::Field;
use altcalc_core::session::Session;

use crate::pages;

/// Application state.
pub struct App {
    /// The current form session.
    pub session: Session,
    /// Application configuration (theme preference is persisted here).
    config: ConfigManager,
}

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// A form field was edited.
    FieldEdited(Field, String),
    /// The Calculate button was pressed.
    Calculate,
    /// The Reset button was pressed.
    Reset,
    /// The dark-mode toggle was flipped.
    ThemeToggled(bool),
}

impl App {
    /// Create the application state from loaded configuration.
    pub fn new(config: ConfigManager) -> Self {
        let session = Session::new(config.settings().ui.dark_mode);
        Self { session, config }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldEdited(field, value) => {
                self.session.edit(field, &value);
            }

            Message::Calculate => match self.session.calculate() {
                Ok(result) => {
                    tracing::info!(
                        true_altitude_ft = result.true_altitude_ft,
                        "calculation complete"
                    );
                }
                Err(e) => {
                    // The button is disabled while invalid; this only
                    // fires if a stale press slips through.
                    tracing::warn!("calculation rejected: {}", e);
                }
            },

            Message::Reset => {
                self.session.reset();
                tracing::info!("session reset");
            }

            Message::ThemeToggled(dark_mode) => {
                if dark_mode != self.session.dark_mode {
                    self.session.toggle_theme();
                }

                self.config.settings_mut().ui.dark_mode = dark_mode;
                if let Err(e) = self.config.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::calculator::view(self)
    }

    pub fn theme(&self) -> Theme {
        if self.session.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
