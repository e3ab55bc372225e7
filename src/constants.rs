//! Color model bounds and default palette parameters
//!
//! Compile-time constants shared by the converter, the palette generator
//! and the configuration layer.

/// Channel and component ranges
pub mod ranges {
    /// Full turn of the hue circle in degrees
    pub const HUE_DEGREES: i32 = 360;

    /// Upper bound of saturation and lightness percentages
    pub const PERCENT_MAX: i32 = 100;

    /// Upper bound of an 8-bit RGB channel
    pub const CHANNEL_MAX: f64 = 255.0;
}

/// Initial slider positions
pub mod defaults {
    /// Number of colors shown when the palette first loads
    pub const COUNT: i32 = 7;

    pub const SATURATION: i32 = 50;
    pub const LIGHTNESS: i32 = 50;

    /// Initial hue sweep covers the whole circle
    pub const HUE_MIN: i32 = 0;
    pub const HUE_MAX: i32 = 360;
}

/// Limits of the count slider
pub mod limits {
    pub const MIN_COUNT: i32 = 1;
    pub const MAX_COUNT: i32 = 64;
}
