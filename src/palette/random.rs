//! Random palette parameters

use rand::Rng;

use crate::constants::ranges::{HUE_DEGREES, PERCENT_MAX};
use crate::palette::PaletteParams;

/// Pick random saturation, lightness and hue sweep, keeping the count
///
/// Saturation and lightness are uniform over 0-100, both hue bounds over
/// 0-360 (inclusive), ordered so that `hue_min <= hue_max`.
pub fn randomize<R: Rng + ?Sized>(params: &PaletteParams, rng: &mut R) -> PaletteParams {
    let saturation = rng.gen_range(0..=PERCENT_MAX);
    let lightness = rng.gen_range(0..=PERCENT_MAX);

    let a = rng.gen_range(0..=HUE_DEGREES);
    let b = rng.gen_range(0..=HUE_DEGREES);
    let (hue_min, hue_max) = if a > b { (b, a) } else { (a, b) };

    log::debug!(
        "Randomized to s={} l={} hue=[{}, {}]",
        saturation,
        lightness,
        hue_min,
        hue_max
    );

    PaletteParams {
        count: params.count,
        saturation,
        lightness,
        hue_min,
        hue_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_randomize_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = PaletteParams {
            count: 12,
            ..Default::default()
        };

        for _ in 0..500 {
            let params = randomize(&start, &mut rng);
            assert_eq!(params.count, 12);
            assert!((0..=100).contains(&params.saturation));
            assert!((0..=100).contains(&params.lightness));
            assert!(params.hue_min <= params.hue_max);
            assert!(params.hue_min >= 0 && params.hue_max <= 360);
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let start = PaletteParams::default();
        let first = randomize(&start, &mut StdRng::seed_from_u64(42));
        let second = randomize(&start, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
