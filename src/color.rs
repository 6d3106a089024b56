use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Outcome;

/// Pie slice colour for failed launches.
pub const FAILURE_COLOR: Color32 = Color32::from_rgb(255, 127, 80);
/// Pie slice colour for successful launches.
pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(0, 128, 128);

/// Fixed outcome colours, independent of slice order.
pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Failure => FAILURE_COLOR,
        Outcome::Success => SUCCESS_COLOR,
    }
}

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
// Booster category → Color32
// ---------------------------------------------------------------------------

/// Maps booster version categories to distinct colours.
///
/// Built once per table so a category keeps its colour while filters change.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    entries: Vec<(String, Color32)>,
}

impl CategoryColors {
    pub fn new(categories: &[String]) -> Self {
        let entries = categories
            .iter()
            .cloned()
            .zip(generate_palette(categories.len()))
            .collect();
        CategoryColors { entries }
    }

    /// Colour for a category, gray when the category is unknown.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, color)| *color)
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn outcome_colours_are_fixed() {
        assert_eq!(outcome_color(Outcome::Failure), FAILURE_COLOR);
        assert_eq!(outcome_color(Outcome::Success), SUCCESS_COLOR);
    }

    #[test]
    fn unknown_category_is_gray() {
        let colors = CategoryColors::new(&["FT".to_string(), "B5".to_string()]);
        assert_ne!(colors.color_for("FT"), colors.color_for("B5"));
        assert_eq!(colors.color_for("v1.0"), Color32::GRAY);
    }
}
