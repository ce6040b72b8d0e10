//! Form session state and its transitions.
//!
//! One-way data flow: the UI renders from this state and mutates it only
//! through the transitions below (field edit, calculate, reset, theme
//! toggle). Nothing is persisted; a session lives and dies with the
//! window.

use crate::calc::{self, CorrectionResult};
use crate::inputs::{sanitize_numeric, Field, InputError, RawInputs};

/// State of one form session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The four raw field values.
    pub inputs: RawInputs,
    /// The latest calculation result, if any.
    pub result: Option<CorrectionResult>,
    /// Display-mode flag (dark theme when true).
    pub dark_mode: bool,
}

impl Session {
    /// Create a session with the given initial display mode.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    /// Store an edited field value, sanitized.
    ///
    /// An existing result stays on screen while the user edits; it is
    /// only replaced by the next calculation or cleared by reset.
    pub fn edit(&mut self, field: Field, value: &str) {
        self.inputs.set(field, sanitize_numeric(value));
    }

    /// Whether the calculate transition is currently allowed.
    pub fn can_calculate(&self) -> bool {
        self.inputs.is_valid()
    }

    /// Run the calculation and store the result.
    ///
    /// Invalid input is blocked entirely: the error is returned, no
    /// result is emitted, and any previous result is left untouched.
    /// The UI additionally disables the Calculate control whenever
    /// [`Session::can_calculate`] is false, so this is a backstop.
    pub fn calculate(&mut self) -> Result<CorrectionResult, InputError> {
        let parsed = self.inputs.parse()?;
        let result = calc::compute(&parsed);

        tracing::debug!(
            pa = parsed.pressure_altitude_ft,
            qnh = parsed.qnh_hpa,
            fl = parsed.flight_level,
            t = parsed.temperature_c,
            true_altitude = result.true_altitude_ft,
            "calculated correction"
        );

        self.result = Some(result);
        Ok(result)
    }

    /// Clear all inputs and the result, returning to the initial state.
    ///
    /// The display mode is a preference, not session data, and is left
    /// alone.
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.result = None;
    }

    /// Flip the display mode.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> Session {
        let mut session = Session::default();
        session.edit(Field::PressureAltitude, "10000");
        session.edit(Field::Qnh, "1013.2");
        session.edit(Field::FlightLevel, "300");
        session.edit(Field::Temperature, "5");
        session
    }

    #[test]
    fn calculate_stores_result() {
        let mut session = filled_session();
        assert!(session.can_calculate());

        let result = session.calculate().unwrap();
        assert_eq!(result.true_altitude_ft, 11200.0);
        assert_eq!(session.result, Some(result));
    }

    #[test]
    fn calculate_with_invalid_input_is_blocked() {
        let mut session = Session::default();
        assert!(!session.can_calculate());

        let err = session.calculate().unwrap_err();
        assert_eq!(err, InputError::Empty(Field::PressureAltitude));
        assert!(session.result.is_none());
    }

    #[test]
    fn failed_calculate_keeps_previous_result() {
        let mut session = filled_session();
        let first = session.calculate().unwrap();

        session.edit(Field::Qnh, "");
        assert!(session.calculate().is_err());
        assert_eq!(session.result, Some(first));
    }

    #[test]
    fn edit_sanitizes_value() {
        let mut session = Session::default();
        session.edit(Field::Qnh, "1013,2 hPa");

        assert_eq!(session.inputs.get(Field::Qnh), "10132");
    }

    #[test]
    fn edit_keeps_result_visible() {
        let mut session = filled_session();
        session.calculate().unwrap();

        session.edit(Field::Temperature, "12");
        assert!(session.result.is_some());
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut session = filled_session();
        session.calculate().unwrap();

        session.reset();
        assert_eq!(session.inputs, RawInputs::default());
        assert!(session.result.is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = filled_session();
        session.calculate().unwrap();

        session.reset();
        let after_first = session.clone();
        session.reset();

        assert_eq!(session.inputs, after_first.inputs);
        assert_eq!(session.result, after_first.result);
    }

    #[test]
    fn reset_preserves_theme() {
        let mut session = Session::new(true);
        session.reset();
        assert!(session.dark_mode);
    }

    #[test]
    fn toggle_theme_flips_flag() {
        let mut session = Session::default();
        session.toggle_theme();
        assert!(session.dark_mode);
        session.toggle_theme();
        assert!(!session.dark_mode);
    }
}
