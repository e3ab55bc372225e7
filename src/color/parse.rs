//! Free-text color input parsing
//!
//! Accepted forms:
//! * `#RGB` / `#RRGGBB` (hex digits in either case)
//! * `rgb(r, g, b)` with 1-3 decimal digits per channel, each at most 255,
//!   and optional whitespace around every channel
//!
//! The whole string must match; nothing may precede or follow the color.

use crate::color::conversion::ColorConverter;
use crate::color::model::{Hsl, Rgb};
use crate::{PaletteError, Result};

/// Tagged result of sniffing a user-supplied color string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// Hex notation, already expanded to RGB
    Hex(Rgb),
    /// `rgb()` functional notation
    Rgb(Rgb),
    /// Matched neither form; holds the rejected text
    Invalid(String),
}

impl ColorInput {
    /// Classify free text as hex, `rgb()` or invalid
    pub fn parse(text: &str) -> Self {
        if let Some(rgb) = parse_hex(text) {
            return ColorInput::Hex(rgb);
        }
        if let Some(rgb) = parse_rgb_function(text) {
            return ColorInput::Rgb(rgb);
        }
        log::warn!("Rejected color input {:?}", text);
        ColorInput::Invalid(text.to_string())
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, ColorInput::Invalid(_))
    }

    /// RGB value of a valid input
    pub fn rgb(&self) -> Result<Rgb> {
        match self {
            ColorInput::Hex(rgb) | ColorInput::Rgb(rgb) => Ok(*rgb),
            ColorInput::Invalid(input) => Err(PaletteError::InvalidColorInput {
                input: input.clone(),
            }),
        }
    }

    /// Convert a valid input to HSL
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorInput` for [`ColorInput::Invalid`].
    pub fn to_hsl(&self) -> Result<Hsl> {
        Ok(ColorConverter::new().rgb_to_hsl(self.rgb()?))
    }
}

impl std::str::FromStr for ColorInput {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        match ColorInput::parse(s) {
            ColorInput::Invalid(input) => Err(PaletteError::InvalidColorInput { input }),
            valid => Ok(valid),
        }
    }
}

fn parse_hex(text: &str) -> Option<Rgb> {
    let digits = text.strip_prefix('#')?;
    if !matches!(digits.len(), 3 | 6) {
        return None;
    }
    ColorConverter::new().hex_to_rgb(text).ok()
}

fn parse_rgb_function(text: &str) -> Option<Rgb> {
    let args = text.strip_prefix("rgb(")?.strip_suffix(')')?;

    let mut channels = args.split(',').map(parse_channel);
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    if channels.next().is_some() {
        return None;
    }

    Some(Rgb::new(r, g, b))
}

fn parse_channel(arg: &str) -> Option<u8> {
    let digits = arg.trim();
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u16>().ok().and_then(|v| u8::try_from(v).ok())
}
