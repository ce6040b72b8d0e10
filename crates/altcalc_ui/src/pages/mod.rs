//! Page views.

pub mod calculator;
