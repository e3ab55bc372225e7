//! Color space conversion utilities
//!
//! Provides conversions between the palette's color models:
//! - HSL to RGB using the two-midpoint (m1/m2) hue interpolation
//! - HSL to `#rrggbb` hex
//! - RGB to HSL with truncating integer output
//! - `#RGB` / `#RRGGBB` hex parsing

use crate::color::model::{Hsl, Rgb};
use crate::constants::ranges::{CHANNEL_MAX, HUE_DEGREES, PERCENT_MAX};
use crate::{PaletteError, Result};

/// Stateless converter between HSL, RGB and hex strings
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert HSL to 8-bit RGB
    ///
    /// Hue is normalized into [0, 360) first, so hues outside the circle wrap.
    /// Both the achromatic and the chromatic branch round to the nearest
    /// channel value.
    pub fn hsl_to_rgb(&self, hsl: Hsl) -> Rgb {
        let s = f64::from(hsl.s) / f64::from(PERCENT_MAX);
        let l = f64::from(hsl.l) / f64::from(PERCENT_MAX);

        if hsl.s == 0 {
            let v = channel(l * CHANNEL_MAX);
            return Rgb::new(v, v, v);
        }

        let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let m1 = l * 2.0 - m2;
        let hue = f64::from(hsl.h.rem_euclid(HUE_DEGREES)) / f64::from(HUE_DEGREES);

        Rgb::new(
            channel(hue_to_channel(m1, m2, hue + 1.0 / 3.0)),
            channel(hue_to_channel(m1, m2, hue)),
            channel(hue_to_channel(m1, m2, hue - 1.0 / 3.0)),
        )
    }

    /// Convert HSL to a lowercase `#rrggbb` string
    pub fn hsl_to_hex(&self, hsl: Hsl) -> String {
        self.hsl_to_rgb(hsl).to_hex()
    }

    /// Convert 8-bit RGB to HSL
    ///
    /// Components are truncated, so the result has hue in [0, 360) and
    /// percentages in [0, 100].
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> Hsl {
        let r = f64::from(rgb.r) / CHANNEL_MAX;
        let g = f64::from(rgb.g) / CHANNEL_MAX;
        let b = f64::from(rgb.b) / CHANNEL_MAX;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let s = if l > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let h = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h / 6.0, s)
        };

        Hsl {
            h: (h * f64::from(HUE_DEGREES)).floor() as i32,
            s: (s * f64::from(PERCENT_MAX)).floor() as u8,
            l: (l * f64::from(PERCENT_MAX)).floor() as u8,
        }
    }

    /// Parse `#RGB` or `#RRGGBB` (either case) into RGB
    ///
    /// # Errors
    ///
    /// Returns `InvalidHexFormat` for a missing `#`, any other length, or
    /// non-hex digits.
    pub fn hex_to_rgb(&self, hex: &str) -> Result<Rgb> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| PaletteError::invalid_hex(hex))?;

        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| PaletteError::invalid_hex(hex))
        };

        match digits.len() {
            3 => {
                // Each nibble duplicated: "f" -> "ff"
                let expand = |i: usize| -> Result<u8> { Ok(byte(&digits[i..=i])? * 17) };
                Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Rgb::new(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            _ => Err(PaletteError::invalid_hex(hex)),
        }
    }

    /// Parse a hex color and convert it to HSL
    pub fn hex_to_hsl(&self, hex: &str) -> Result<Hsl> {
        Ok(self.rgb_to_hsl(self.hex_to_rgb(hex)?))
    }
}

/// Piecewise linear channel value for a hue fraction, scaled to 0-255
fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    };

    let v = if 6.0 * hue < 1.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if 2.0 * hue < 1.0 {
        m2
    } else if 3.0 * hue < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    };

    CHANNEL_MAX * v
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, CHANNEL_MAX) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(h: i32, s: i32, l: i32) -> Hsl {
        Hsl::new(h, s, l).unwrap()
    }

    #[test]
    fn test_primary_colors() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hsl_to_rgb(hsl(0, 100, 50)), Rgb::new(255, 0, 0));
        assert_eq!(converter.hsl_to_rgb(hsl(120, 100, 50)), Rgb::new(0, 255, 0));
        assert_eq!(converter.hsl_to_rgb(hsl(240, 100, 50)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_mid_saturation() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hsl_to_rgb(hsl(0, 50, 50)), Rgb::new(191, 64, 64));
        assert_eq!(converter.hsl_to_hex(hsl(72, 50, 50)), "#a6bf40");
        assert_eq!(converter.hsl_to_hex(hsl(144, 50, 50)), "#40bf73");
    }

    #[test]
    fn test_achromatic_rounds() {
        let converter = ColorConverter::new();
        // 0.5 * 255 = 127.5
        assert_eq!(converter.hsl_to_rgb(hsl(0, 0, 50)), Rgb::new(128, 128, 128));
        assert_eq!(converter.hsl_to_hex(hsl(0, 0, 100)), "#ffffff");
        assert_eq!(converter.hsl_to_hex(hsl(0, 0, 0)), "#000000");
    }

    #[test]
    fn test_hue_wraps() {
        let converter = ColorConverter::new();
        let red = converter.hsl_to_rgb(hsl(0, 100, 50));
        assert_eq!(converter.hsl_to_rgb(hsl(360, 100, 50)), red);
        assert_eq!(converter.hsl_to_rgb(hsl(-360, 100, 50)), red);
        assert_eq!(
            converter.hsl_to_rgb(hsl(-120, 100, 50)),
            converter.hsl_to_rgb(hsl(240, 100, 50))
        );
    }

    #[test]
    fn test_rgb_to_hsl() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_hsl(Rgb::new(255, 0, 0)), hsl(0, 100, 50));
        assert_eq!(converter.rgb_to_hsl(Rgb::new(0, 0, 255)), hsl(240, 100, 50));
        assert_eq!(converter.rgb_to_hsl(Rgb::new(255, 255, 255)), hsl(0, 0, 100));
        assert_eq!(converter.rgb_to_hsl(Rgb::new(51, 102, 204)), hsl(219, 60, 50));
    }

    #[test]
    fn test_rgb_to_hsl_red_max_with_blue_over_green() {
        let converter = ColorConverter::new();
        // Red is max and g < b, so the hue lands in the magenta sector
        let result = converter.rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!(result.h > 300 && result.h < 360, "hue = {}", result.h);
    }

    #[test]
    fn test_hex_to_rgb() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hex_to_rgb("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(converter.hex_to_rgb("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(converter.hex_to_rgb("#f80").unwrap(), Rgb::new(255, 136, 0));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        let converter = ColorConverter::new();
        for bad in ["", "#", "#ff", "#ffff", "#fffffff", "ffffff", "#gggggg", "#ff 000"] {
            let err = converter.hex_to_rgb(bad).unwrap_err();
            assert!(
                matches!(err, PaletteError::InvalidHexFormat { .. }),
                "{:?} gave {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_shorthand_matches_full_hex() {
        let converter = ColorConverter::new();
        assert_eq!(
            converter.hex_to_hsl("#fff").unwrap(),
            converter.hex_to_hsl("#ffffff").unwrap()
        );
        assert_eq!(
            converter.hex_to_hsl("#0af").unwrap(),
            converter.hex_to_hsl("#00aaff").unwrap()
        );
    }

    #[test]
    fn test_agrees_with_palette_crate() {
        use ::palette::{FromColor, Srgb};

        let converter = ColorConverter::new();
        for h in (0..360).step_by(15) {
            for (s, l) in [(100, 50), (60, 40), (30, 70)] {
                let ours = converter.hsl_to_rgb(hsl(h, s, l));
                let source: ::palette::Hsl = hsl(h, s, l).into();
                let reference: Srgb = Srgb::from_color(source);
                let reference: Srgb<u8> = reference.into_format();
                for (a, b) in [
                    (ours.r, reference.red),
                    (ours.g, reference.green),
                    (ours.b, reference.blue),
                ] {
                    assert!((a as i32 - b as i32).abs() <= 1, "hsl({},{},{})", h, s, l);
                }
            }
        }
    }
}
