//! The shared state palette and error-diffusion quantization.

use image::imageops::{self, ColorMap};
use image::{Rgb, RgbImage};
use smolder_sim::Rule;

/// The reduced color palette shared by every frame of a run.
///
/// One entry per distinct simulation state, in the rule's palette order, so
/// the palette size is capped by the state count. Built once per run;
/// quantization maps arbitrary RGB values to their nearest entry.
#[derive(Clone, Debug)]
pub struct StatePalette {
    colors: Vec<Rgb<u8>>,
}

impl StatePalette {
    /// Build the palette from a rule's states and color table.
    pub fn for_rule<R: Rule>(rule: &R) -> Self {
        Self {
            colors: rule
                .states()
                .iter()
                .map(|&state| Rgb(rule.color_for(state)))
                .collect(),
        }
    }

    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette as the flat RGB triple layout the GIF container expects.
    pub fn gif_palette(&self) -> Vec<u8> {
        self.colors
            .iter()
            .flat_map(|color| color.0)
            .collect()
    }

    /// Index of the entry nearest to `color` by squared RGB distance.
    fn nearest(&self, color: Rgb<u8>) -> usize {
        let mut best = 0;
        let mut best_distance = u32::MAX;
        for (index, entry) in self.colors.iter().enumerate() {
            let distance: u32 = entry
                .0
                .iter()
                .zip(color.0.iter())
                .map(|(&a, &b)| {
                    let d = i32::from(a) - i32::from(b);
                    (d * d) as u32
                })
                .sum();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }
}

impl ColorMap for StatePalette {
    type Color = Rgb<u8>;

    fn index_of(&self, color: &Rgb<u8>) -> usize {
        self.nearest(*color)
    }

    fn map_color(&self, color: &mut Rgb<u8>) {
        *color = self.colors[self.nearest(*color)];
    }

    fn lookup(&self, index: usize) -> Option<Rgb<u8>> {
        self.colors.get(index).copied()
    }

    fn has_lookup(&self) -> bool {
        true
    }
}

/// One palette-indexed frame, ready for the GIF container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// One palette index per pixel, row-major.
    pub indices: Vec<u8>,
}

/// Convert frames to the shared palette with Floyd–Steinberg
/// error-diffusion dithering.
///
/// Each frame is dithered in place on a copy — rounding error diffuses to
/// neighbouring pixels — and then mapped to palette indices.
pub fn quantize(frames: &[RgbImage], palette: &StatePalette) -> Vec<IndexedFrame> {
    frames
        .iter()
        .map(|frame| {
            let mut dithered = frame.clone();
            imageops::dither(&mut dithered, palette);
            let indexed = imageops::index_colors(&dithered, palette);
            IndexedFrame {
                width: frame.width(),
                height: frame.height(),
                indices: indexed.into_raw(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smolder_models::{Epidemic, Wildfire};
    use smolder_sim::Rule;

    #[test]
    fn palette_size_matches_state_count() {
        assert_eq!(StatePalette::for_rule(&Wildfire::default()).len(), 5);
        assert_eq!(StatePalette::for_rule(&Epidemic::default()).len(), 3);
    }

    #[test]
    fn gif_palette_is_flat_rgb() {
        let rule = Epidemic::default();
        let palette = StatePalette::for_rule(&rule);
        let flat = palette.gif_palette();
        assert_eq!(flat.len(), 9);
        assert_eq!(flat[0..3], rule.color_for(rule.states()[0]));
    }

    #[test]
    fn exact_state_colors_round_trip() {
        let rule = Wildfire::default();
        let palette = StatePalette::for_rule(&rule);
        for (index, &state) in rule.states().iter().enumerate() {
            let color = Rgb(rule.color_for(state));
            assert_eq!(palette.index_of(&color), index);
            assert_eq!(palette.lookup(index), Some(color));
        }
    }

    #[test]
    fn off_palette_colors_map_to_nearest() {
        let rule = Epidemic::default();
        let palette = StatePalette::for_rule(&rule);
        // Slightly perturbed healthy gray still maps to Healthy's entry.
        let mut color = Rgb([118, 121, 119]);
        palette.map_color(&mut color);
        assert_eq!(color, Rgb([120, 120, 120]));
    }

    #[test]
    fn quantize_preserves_dimensions_and_indexes_every_pixel() {
        let rule = Wildfire::default();
        let palette = StatePalette::for_rule(&rule);
        let fire = Rgb(rule.color_for(rule.states()[0]));
        let frame = RgbImage::from_pixel(6, 4, fire);
        let indexed = quantize(&[frame], &palette);
        assert_eq!(indexed.len(), 1);
        assert_eq!(indexed[0].width, 6);
        assert_eq!(indexed[0].height, 4);
        assert_eq!(indexed[0].indices, vec![0u8; 24]);
    }
}
