//! # Rainbow Palette
//!
//! A Rust crate for generating color palettes from a hue sweep.
//!
//! This library provides:
//! - Conversions between HSL, RGB and hex colors
//! - Deterministic hue sampling across an interval, in hex, `rgb()` or `hsl()` form
//! - Parsing of free-text hex / `rgb()` input back into HSL to seed a palette
//! - A caller-owned [`Session`] holding slider values and the label format
//!
//! ## Example
//!
//! ```rust
//! use rainbow_palette::{palette_colors, hex_to_hsl, Representation};
//!
//! let colors = palette_colors(7, 50, 50, 0, 360, Representation::Hsl)?;
//! assert_eq!(colors[0], "hsl(0,50%,50%)");
//!
//! let seed = hex_to_hsl("#fff")?;
//! assert_eq!((seed.s, seed.l), (0, 100));
//! # Ok::<(), rainbow_palette::PaletteError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod palette;
pub mod session;

pub use crate::color::{ColorConverter, ColorInput, Hsl, Rgb};
pub use crate::config::PaletteConfig;
pub use crate::error::{PaletteError, Result};
pub use crate::palette::{
    PaletteEntry, PaletteGenerator, PaletteParams, PaletteRenderer, Representation,
};
pub use crate::session::{Session, ValueLabels};

/// Convert HSL (saturation and lightness in percent) to RGB
///
/// # Errors
///
/// Returns `InvalidParameter` if `s` or `l` lies outside 0-100.
pub fn hsl_to_rgb(h: i32, s: i32, l: i32) -> Result<Rgb> {
    Ok(ColorConverter::new().hsl_to_rgb(Hsl::new(h, s, l)?))
}

/// Convert HSL to a lowercase `#rrggbb` string
///
/// # Errors
///
/// Returns `InvalidParameter` if `s` or `l` lies outside 0-100.
pub fn hsl_to_hex(h: i32, s: i32, l: i32) -> Result<String> {
    Ok(ColorConverter::new().hsl_to_hex(Hsl::new(h, s, l)?))
}

/// Convert RGB channels to HSL
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    ColorConverter::new().rgb_to_hsl(Rgb::new(r, g, b))
}

/// Convert `#RGB` or `#RRGGBB` to HSL
///
/// # Errors
///
/// Returns `InvalidHexFormat` for any other input.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    ColorConverter::new().hex_to_hsl(hex)
}

/// Generate `num` colors sampled across `[hue_min, hue_max]`
///
/// See [`PaletteGenerator::palette_colors`].
pub fn palette_colors(
    num: i32,
    saturation: i32,
    lightness: i32,
    hue_min: i32,
    hue_max: i32,
    representation: Representation,
) -> Result<Vec<String>> {
    PaletteGenerator::new().palette_colors(
        num,
        saturation,
        lightness,
        hue_min,
        hue_max,
        representation,
    )
}
