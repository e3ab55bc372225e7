//! Caller-owned palette state
//!
//! A [`Session`] holds what the UI layer would keep between interactions:
//! the slider values and the selected output representation. Every palette
//! computation reads the representation from here rather than from global
//! state.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{ColorInput, Hsl};
use crate::palette::{
    randomize, PaletteEntry, PaletteGenerator, PaletteParams, PaletteRenderer, Representation,
};
use crate::Result;

/// Bracketed slider readouts shown next to each control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueLabels {
    /// `"(n)"`
    pub count: String,
    /// `"(s)"`
    pub saturation: String,
    /// `"(l)"`
    pub lightness: String,
    /// `"(min,max)"`
    pub hue: String,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    params: PaletteParams,
    representation: Representation,
    generator: PaletteGenerator,
}

impl Session {
    /// Create a session with the given slider values and label format
    pub fn new(params: PaletteParams, representation: Representation) -> Self {
        Self {
            params,
            representation,
            generator: PaletteGenerator::new(),
        }
    }

    pub fn params(&self) -> &PaletteParams {
        &self.params
    }

    pub fn set_params(&mut self, params: PaletteParams) {
        self.params = params;
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Select the label format used by subsequent palettes
    pub fn set_representation(&mut self, representation: Representation) {
        log::debug!("Label format set to {}", representation);
        self.representation = representation;
    }

    /// Select the label format by button name; unknown names pick hex
    pub fn select_format(&mut self, name: &str) -> Representation {
        let representation = Representation::from_name(name);
        self.set_representation(representation);
        representation
    }

    /// Palette entries for the current state, in index order
    pub fn palette(&self) -> Result<Vec<PaletteEntry>> {
        let mut mounted: Vec<PaletteEntry> = Vec::new();
        self.render(&mut mounted)
    }

    /// Mount the current palette on a renderer
    pub fn render<R>(&self, renderer: &mut R) -> Result<Vec<PaletteEntry>>
    where
        R: PaletteRenderer + ?Sized,
    {
        self.generator
            .generate_palette(&self.params, self.representation, renderer)
    }

    /// Seed saturation and lightness from a free-text color
    ///
    /// The hue sweep and count are left untouched. On error the session is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorInput` when the text is neither hex nor `rgb()`.
    pub fn apply_color_input(&mut self, text: &str) -> Result<Hsl> {
        let hsl = ColorInput::parse(text).to_hsl()?;
        self.params.saturation = i32::from(hsl.s);
        self.params.lightness = i32::from(hsl.l);
        log::info!("Seeded palette from {} as {}", text, hsl);
        Ok(hsl)
    }

    /// Replace saturation, lightness and hue sweep with random values
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.params = randomize(&self.params, rng);
    }

    pub fn value_labels(&self) -> ValueLabels {
        let p = &self.params;
        ValueLabels {
            count: format!("({})", p.count),
            saturation: format!("({})", p.saturation),
            lightness: format!("({})", p.lightness),
            hue: format!("({},{})", p.hue_min, p.hue_max),
        }
    }
}
