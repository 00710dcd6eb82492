use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Vowel;

// ---------------------------------------------------------------------------
// Fixed chart colours
// ---------------------------------------------------------------------------

/// Outline of the participant triangle.
pub const PARTICIPANT_OUTLINE: Color32 = Color32::from_rgb(225, 225, 225);

/// Outline of the normative triangle overlay.
pub const NORMATIVE_OUTLINE: Color32 = Color32::from_rgb(220, 80, 80);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: vowel → Color32
// ---------------------------------------------------------------------------

/// Maps each vowel to a distinct marker colour.
#[derive(Debug, Clone)]
pub struct VowelPalette {
    mapping: BTreeMap<Vowel, Color32>,
}

impl VowelPalette {
    pub fn new() -> Self {
        let palette = generate_palette(Vowel::ALL.len());
        let mapping = Vowel::ALL.iter().copied().zip(palette).collect();
        VowelPalette { mapping }
    }

    /// Marker colour for a vowel.
    pub fn color_for(&self, vowel: Vowel) -> Color32 {
        self.mapping.get(&vowel).copied().unwrap_or(Color32::GRAY)
    }
}

impl Default for VowelPalette {
    fn default() -> Self {
        Self::new()
    }
}
