//! Altimetry Calculator Core - backend logic for the Altimetry Calculator
//!
//! This crate contains all calculation and session logic with zero UI
//! dependencies. It can be used by the GUI application or a CLI tool.

pub mod calc;
pub mod config;
pub mod inputs;
pub mod logging;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
