//! Layout constants for the Altimetry Calculator UI.
//!
//! Light/dark palettes come from the toolkit's built-in themes; only
//! spacing and font sizes are defined here.

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 12.0;
    /// Normal font size
    pub const NORMAL: f32 = 14.0;
    /// Medium font size
    pub const MD: f32 = 16.0;
    /// Header font size
    pub const HEADER: f32 = 24.0;
}
