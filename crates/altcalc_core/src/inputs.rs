//! Raw form inputs: sanitization, validation, and parsing.
//!
//! The form holds four user-entered strings, mutated on every edit and
//! held only for the lifetime of the session. A session is valid only
//! when every field is non-empty and parses as a finite number; parsing
//! into [`CorrectionInputs`] either succeeds for all four fields or
//! reports the first offending one.

use thiserror::Error;

use crate::calc::CorrectionInputs;

/// The four input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PressureAltitude,
    Qnh,
    FlightLevel,
    Temperature,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 4] = [
        Field::PressureAltitude,
        Field::Qnh,
        Field::FlightLevel,
        Field::Temperature,
    ];

    /// Form label for this field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::PressureAltitude => "Pressure Altitude (PA)",
            Field::Qnh => "QNH",
            Field::FlightLevel => "Flight Level (FL)",
            Field::Temperature => "Temperature on FL",
        }
    }

    /// Unit suffix shown next to the field, if any.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Field::PressureAltitude => Some("ft"),
            Field::Qnh => Some("hPa"),
            Field::FlightLevel => None,
            Field::Temperature => Some("°C"),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from validating or parsing a raw input field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} is required")]
    Empty(Field),

    #[error("{0} is not a valid number: {1:?}")]
    NotANumber(Field, String),
}

/// Strip characters that can never form part of a numeric input.
///
/// Keeps ASCII digits, the first decimal point, and a leading minus
/// sign. Everything else - letters, whitespace, commas, repeated
/// points - is dropped. The parser only ever accepts `.` as the
/// decimal separator, so commas are rejected here rather than mapped.
pub fn sanitize_numeric(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut seen_point = false;

    for ch in value.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' if !seen_point => {
                seen_point = true;
                out.push(ch);
            }
            '-' if out.is_empty() => out.push(ch),
            _ => {}
        }
    }

    out
}

/// The four raw string inputs of a form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub pressure_altitude: String,
    pub qnh: String,
    pub flight_level: String,
    pub temperature: String,
}

impl RawInputs {
    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PressureAltitude => &self.pressure_altitude,
            Field::Qnh => &self.qnh,
            Field::FlightLevel => &self.flight_level,
            Field::Temperature => &self.temperature,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::PressureAltitude => self.pressure_altitude = value,
            Field::Qnh => self.qnh = value,
            Field::FlightLevel => self.flight_level = value,
            Field::Temperature => self.temperature = value,
        }
    }

    /// Clear all four fields back to empty.
    pub fn clear(&mut self) {
        *self = RawInputs::default();
    }

    /// Validity predicate: every field non-empty and a finite number.
    pub fn is_valid(&self) -> bool {
        self.parse().is_ok()
    }

    /// Parse all four fields into calculation inputs.
    ///
    /// Fails on the first field that is empty or does not parse as a
    /// finite number. NaN and infinities are rejected even though the
    /// sanitizer makes them unreachable through normal editing.
    pub fn parse(&self) -> Result<CorrectionInputs, InputError> {
        Ok(CorrectionInputs {
            pressure_altitude_ft: parse_field(Field::PressureAltitude, &self.pressure_altitude)?,
            qnh_hpa: parse_field(Field::Qnh, &self.qnh)?,
            flight_level: parse_field(Field::FlightLevel, &self.flight_level)?,
            temperature_c: parse_field(Field::Temperature, &self.temperature)?,
        })
    }
}

/// Parse a single raw field into a finite number.
fn parse_field(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty(field));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(field, raw.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotANumber(field, raw.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RawInputs {
        RawInputs {
            pressure_altitude: "5000".to_string(),
            qnh: "1013.2".to_string(),
            flight_level: "50".to_string(),
            temperature: "-5".to_string(),
        }
    }

    #[test]
    fn filled_inputs_are_valid() {
        assert!(filled().is_valid());
    }

    #[test]
    fn empty_field_is_invalid() {
        let mut inputs = filled();
        inputs.set(Field::Qnh, String::new());

        assert!(!inputs.is_valid());
        assert_eq!(inputs.parse(), Err(InputError::Empty(Field::Qnh)));
    }

    #[test]
    fn whitespace_only_field_is_invalid() {
        let mut inputs = filled();
        inputs.set(Field::FlightLevel, "   ".to_string());

        assert_eq!(inputs.parse(), Err(InputError::Empty(Field::FlightLevel)));
    }

    #[test]
    fn non_numeric_field_is_invalid() {
        let mut inputs = filled();
        inputs.set(Field::Temperature, "cold".to_string());

        assert_eq!(
            inputs.parse(),
            Err(InputError::NotANumber(
                Field::Temperature,
                "cold".to_string()
            ))
        );
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        for bad in ["NaN", "inf", "-inf", "infinity"] {
            let mut inputs = filled();
            inputs.set(Field::PressureAltitude, bad.to_string());
            assert!(!inputs.is_valid(), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn negative_values_are_valid() {
        let mut inputs = filled();
        inputs.set(Field::PressureAltitude, "-1000".to_string());
        inputs.set(Field::Qnh, "-3".to_string());

        let parsed = inputs.parse().unwrap();
        assert_eq!(parsed.pressure_altitude_ft, -1000.0);
        assert_eq!(parsed.qnh_hpa, -3.0);
    }

    #[test]
    fn parse_produces_expected_values() {
        let parsed = filled().parse().unwrap();

        assert_eq!(parsed.pressure_altitude_ft, 5000.0);
        assert_eq!(parsed.qnh_hpa, 1013.2);
        assert_eq!(parsed.flight_level, 50.0);
        assert_eq!(parsed.temperature_c, -5.0);
    }

    #[test]
    fn sanitize_keeps_plain_numbers() {
        assert_eq!(sanitize_numeric("1013.2"), "1013.2");
        assert_eq!(sanitize_numeric("-250"), "-250");
        assert_eq!(sanitize_numeric(".5"), ".5");
    }

    #[test]
    fn sanitize_drops_letters_and_whitespace() {
        assert_eq!(sanitize_numeric("12a3 ft"), "123");
        assert_eq!(sanitize_numeric("abc"), "");
    }

    #[test]
    fn sanitize_rejects_commas() {
        // Commas are not mapped to decimal points; they are dropped.
        assert_eq!(sanitize_numeric("1013,2"), "10132");
    }

    #[test]
    fn sanitize_keeps_only_first_decimal_point() {
        assert_eq!(sanitize_numeric("1.2.3"), "1.23");
    }

    #[test]
    fn sanitize_allows_only_leading_minus() {
        assert_eq!(sanitize_numeric("-12"), "-12");
        assert_eq!(sanitize_numeric("1-2"), "12");
        assert_eq!(sanitize_numeric("--5"), "-5");
    }

    #[test]
    fn field_labels_and_units() {
        assert_eq!(Field::Qnh.unit(), Some("hPa"));
        assert_eq!(Field::FlightLevel.unit(), None);
        assert_eq!(Field::Temperature.to_string(), "Temperature on FL");
        assert_eq!(Field::ALL.len(), 4);
    }
}
