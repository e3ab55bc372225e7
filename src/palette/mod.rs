//! Palette generation
//!
//! Samples a hue interval at evenly spaced indices and formats every sample
//! in the caller's chosen [`Representation`].

pub mod generator;
pub mod random;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::model::percent;
use crate::constants::defaults;
use crate::{PaletteError, Result};

pub use generator::{PaletteEntry, PaletteGenerator, PaletteRenderer};
pub use random::randomize;

/// Output string format for a palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r,g,b)`
    Rgb,
    /// `hsl(h,s%,l%)`
    Hsl,
}

impl Representation {
    /// Lenient lookup: `"hsl"` and `"rgb"` select those forms, anything else is hex
    pub fn from_name(name: &str) -> Self {
        match name {
            "hsl" => Representation::Hsl,
            "rgb" => Representation::Rgb,
            _ => Representation::Hex,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Representation::Hex => "hex",
            Representation::Rgb => "rgb",
            Representation::Hsl => "hsl",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Representation::Hex),
            "rgb" => Ok(Representation::Rgb),
            "hsl" => Ok(Representation::Hsl),
            _ => Err(PaletteError::invalid_parameter("representation", s)),
        }
    }
}

/// Slider state that drives one palette computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteParams {
    /// Number of colors
    pub count: i32,
    /// Saturation percentage (0-100)
    pub saturation: i32,
    /// Lightness percentage (0-100)
    pub lightness: i32,
    /// Start of the hue sweep in degrees
    pub hue_min: i32,
    /// End of the hue sweep in degrees; may be below `hue_min`
    pub hue_max: i32,
}

impl Default for PaletteParams {
    fn default() -> Self {
        Self {
            count: defaults::COUNT,
            saturation: defaults::SATURATION,
            lightness: defaults::LIGHTNESS,
            hue_min: defaults::HUE_MIN,
            hue_max: defaults::HUE_MAX,
        }
    }
}

impl PaletteParams {
    /// Check the count is non-negative and both percentages are in 0-100
    pub fn validate(&self) -> Result<()> {
        if self.count < 0 {
            return Err(PaletteError::invalid_parameter("count", self.count));
        }
        percent("saturation", self.saturation)?;
        percent("lightness", self.lightness)?;
        Ok(())
    }
}
