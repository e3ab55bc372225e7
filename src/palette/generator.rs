//! Hue sweep sampling and palette formatting

use serde::{Deserialize, Serialize};

use crate::color::model::{percent, Hsl};
use crate::color::ColorConverter;
use crate::palette::{PaletteParams, Representation};
use crate::{PaletteError, Result};

/// One palette sample: the paint value and the text shown on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Always `hsl(h,s%,l%)`
    pub swatch: String,
    /// Color in the caller's representation
    pub label: String,
}

/// Display surface that receives palette entries
pub trait PaletteRenderer {
    /// Remove everything mounted by the previous palette
    fn clear(&mut self);

    /// Mount one swatch with its label
    fn mount(&mut self, entry: &PaletteEntry);
}

/// Collects entries in mount order
impl PaletteRenderer for Vec<PaletteEntry> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn mount(&mut self, entry: &PaletteEntry) {
        self.push(entry.clone());
    }
}

/// Palette generator sampling a hue interval
#[derive(Debug, Clone, Default)]
pub struct PaletteGenerator {
    converter: ColorConverter,
}

impl PaletteGenerator {
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
        }
    }

    /// Hue of every sample, in index order
    ///
    /// Sample `i` is `floor((hue_range / num) * i) + hue_min`, with the
    /// division done in floating point. A `hue_max` below `hue_min` gives a
    /// descending sweep.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a negative `num`.
    pub fn sample_hues(&self, num: i32, hue_min: i32, hue_max: i32) -> Result<Vec<i32>> {
        if num < 0 {
            return Err(PaletteError::invalid_parameter("count", num));
        }

        let hue_range = f64::from(hue_max) - f64::from(hue_min);
        let step = hue_range / f64::from(num);

        Ok((0..num)
            .map(|i| ((step * f64::from(i)).floor() + f64::from(hue_min)) as i32)
            .collect())
    }

    /// Format one color in the requested representation
    pub fn format(&self, hsl: Hsl, representation: Representation) -> String {
        match representation {
            Representation::Hsl => hsl.to_string(),
            Representation::Rgb => self.converter.hsl_to_rgb(hsl).to_string(),
            Representation::Hex => self.converter.hsl_to_hex(hsl),
        }
    }

    /// Generate `num` formatted colors across the hue interval
    ///
    /// # Arguments
    ///
    /// * `num` - Number of colors; zero yields an empty palette
    /// * `saturation`, `lightness` - Percentages in 0-100
    /// * `hue_min`, `hue_max` - Hue sweep bounds in degrees
    /// * `representation` - Output string format
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a negative count or a percentage
    /// outside 0-100.
    pub fn palette_colors(
        &self,
        num: i32,
        saturation: i32,
        lightness: i32,
        hue_min: i32,
        hue_max: i32,
        representation: Representation,
    ) -> Result<Vec<String>> {
        let s = percent("saturation", saturation)?;
        let l = percent("lightness", lightness)?;
        let hues = self.sample_hues(num, hue_min, hue_max)?;

        log::debug!(
            "Sampled {} hues over [{}, {}] as {}",
            hues.len(),
            hue_min,
            hue_max,
            representation
        );

        Ok(hues
            .into_iter()
            .map(|h| self.format(Hsl { h, s, l }, representation))
            .collect())
    }

    /// Build the palette and mount it on a renderer
    ///
    /// Swatches are always HSL strings, labels use `representation`. The
    /// renderer is cleared first and then receives entries from the last
    /// sample to the first. The returned entries are in index order.
    pub fn generate_palette<R>(
        &self,
        params: &PaletteParams,
        representation: Representation,
        renderer: &mut R,
    ) -> Result<Vec<PaletteEntry>>
    where
        R: PaletteRenderer + ?Sized,
    {
        params.validate()?;

        let swatches = self.palette_colors(
            params.count,
            params.saturation,
            params.lightness,
            params.hue_min,
            params.hue_max,
            Representation::Hsl,
        )?;
        let labels = self.palette_colors(
            params.count,
            params.saturation,
            params.lightness,
            params.hue_min,
            params.hue_max,
            representation,
        )?;

        let entries: Vec<PaletteEntry> = swatches
            .into_iter()
            .zip(labels)
            .map(|(swatch, label)| PaletteEntry { swatch, label })
            .collect();

        renderer.clear();
        for entry in entries.iter().rev() {
            renderer.mount(entry);
        }

        Ok(entries)
    }
}
