//! Altimetry correction math.
//!
//! This module is the single source of truth for the correction formulas.
//! All altimetry arithmetic happens here - nothing in the UI recomputes
//! or adjusts these values.
//!
//! # Formulas
//!
//! Given pressure altitude `PA` (ft), altimeter setting `QNH` (hPa),
//! flight level `FL`, and outside air temperature `T` (°C):
//!
//! ```text
//! ISA = 15 - (2 * PA) / 1000        ICAO lapse rate, 2°C per 1000 ft
//! PE  = (QNH - 1013.2) * 30         1 hPa deviation ≈ 30 ft
//! TE  = (T - ISA) * 0.4 * FL
//! CE  = PE + TE
//! TA  = PA + CE
//! ```
//!
//! Computation runs at full `f64` precision; rounding to two decimal
//! places is a separate display concern ([`round2`] / [`format_value`]).
//!
//! `FL = 0` zeroes the temperature error regardless of the deviation
//! from ISA. That falls out of the formula and is not special-cased.
//! Negative altitudes, pressures, and temperatures are accepted; no
//! domain-range clamping is applied.

use serde::{Deserialize, Serialize};

/// Standard pressure reference (QNE) in hectopascals.
pub const QNE_HPA: f64 = 1013.2;

/// ISA sea-level temperature in °C.
pub const ISA_SEA_LEVEL_C: f64 = 15.0;

/// ICAO lapse-rate approximation: °C lost per 1000 ft.
pub const LAPSE_RATE_C_PER_1000FT: f64 = 2.0;

/// Altitude error per hectopascal of pressure deviation, in feet.
pub const FT_PER_HPA: f64 = 30.0;

/// Empirical coefficient for the temperature error term.
pub const TEMP_ERROR_COEFF: f64 = 0.4;

/// The four parsed, finite inputs to the correction calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionInputs {
    /// Pressure altitude in feet.
    pub pressure_altitude_ft: f64,
    /// Altimeter setting in hectopascals.
    pub qnh_hpa: f64,
    /// Flight level numeric value.
    pub flight_level: f64,
    /// Outside air temperature in °C.
    pub temperature_c: f64,
}

/// The five computed outputs, at full floating-point precision.
///
/// Replaced wholesale on each calculation; cleared on reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Standard-atmosphere temperature at the pressure altitude, in °C.
    pub isa_temperature_c: f64,
    /// Pressure error in feet.
    pub pressure_error_ft: f64,
    /// Temperature error in feet.
    pub temperature_error_ft: f64,
    /// Combined error (PE + TE) in feet.
    pub combined_error_ft: f64,
    /// True altitude (PA + CE) in feet.
    pub true_altitude_ft: f64,
}

/// Compute the correction values for the given inputs.
///
/// Referentially transparent: same inputs, same outputs, no side
/// effects. Callers are responsible for only passing finite values;
/// parsing and validation live in [`crate::inputs`].
pub fn compute(inputs: &CorrectionInputs) -> CorrectionResult {
    let isa = ISA_SEA_LEVEL_C
        - (LAPSE_RATE_C_PER_1000FT * inputs.pressure_altitude_ft) / 1000.0;
    let pe = (inputs.qnh_hpa - QNE_HPA) * FT_PER_HPA;
    let te = (inputs.temperature_c - isa) * TEMP_ERROR_COEFF * inputs.flight_level;
    let ce = pe + te;
    let ta = inputs.pressure_altitude_ft + ce;

    CorrectionResult {
        isa_temperature_c: isa,
        pressure_error_ft: pe,
        temperature_error_ft: te,
        combined_error_ft: ce,
        true_altitude_ft: ta,
    }
}

/// Round a value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a value with two decimal places for display.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

impl CorrectionResult {
    /// A copy of this result with every field rounded to two decimals.
    pub fn rounded(&self) -> CorrectionResult {
        CorrectionResult {
            isa_temperature_c: round2(self.isa_temperature_c),
            pressure_error_ft: round2(self.pressure_error_ft),
            temperature_error_ft: round2(self.temperature_error_ft),
            combined_error_ft: round2(self.combined_error_ft),
            true_altitude_ft: round2(self.true_altitude_ft),
        }
    }
}
