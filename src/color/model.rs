//! Integer color value types
//!
//! `Hsl` and `Rgb` are the two models the palette works in. Both format
//! themselves as the CSS functional notation the palette labels use.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ranges::PERCENT_MAX;
use crate::{PaletteError, Result};

/// HSL color with integer degrees and percentages
///
/// Hue is kept as given; it is not required to lie in [0, 360).
/// Deserialization goes through [`Hsl::new`], so stored percentages are
/// range-checked too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHsl")]
pub struct Hsl {
    /// Hue in degrees
    pub h: i32,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl Hsl {
    /// Build an HSL color, rejecting saturation or lightness outside 0-100
    pub fn new(h: i32, s: i32, l: i32) -> Result<Self> {
        Ok(Self {
            h,
            s: percent("saturation", s)?,
            l: percent("lightness", l)?,
        })
    }
}

/// Unchecked wire form of [`Hsl`]
#[derive(Deserialize)]
struct RawHsl {
    h: i32,
    s: i32,
    l: i32,
}

impl TryFrom<RawHsl> for Hsl {
    type Error = PaletteError;

    fn try_from(raw: RawHsl) -> Result<Self> {
        Hsl::new(raw.h, raw.s, raw.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.h, self.s, self.l)
    }
}

impl From<Hsl> for ::palette::Hsl {
    fn from(color: Hsl) -> Self {
        Self::new(
            color.h as f32,
            color.s as f32 / PERCENT_MAX as f32,
            color.l as f32 / PERCENT_MAX as f32,
        )
    }
}

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB color from 8-bit channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb` with lowercase, zero-padded digits
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for ::palette::Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl From<::palette::Srgb<u8>> for Rgb {
    fn from(color: ::palette::Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

/// Validate a saturation/lightness percentage
pub(crate) fn percent(parameter: &str, value: i32) -> Result<u8> {
    if (0..=PERCENT_MAX).contains(&value) {
        Ok(value as u8)
    } else {
        Err(PaletteError::invalid_parameter(parameter, value))
    }
}
