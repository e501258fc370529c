use eframe::egui::Color32;
use indexmap::IndexMap;
use palette::{Hsl, IntoColor, Srgb};

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
// Color mapping: category → Color32
// ---------------------------------------------------------------------------

/// Maps the categories of one distribution to distinct colours, preserving
/// the distribution's own order so chart legends read in rank order.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: IndexMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over categories in the given order.
    pub fn new<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let categories: Vec<&str> = categories.into_iter().collect();
        let palette = generate_palette(categories.len());
        let mapping: IndexMap<String, Color32> = categories
            .into_iter()
            .zip(palette)
            .map(|(c, color): (&str, Color32)| (c.to_string(), color))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_empty_for_zero_categories() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(6).len(), 6);
    }

    #[test]
    fn colors_are_stable_per_category() {
        let map = ColorMap::new(["BEV", "PHEV"]);
        assert_eq!(map.color_for("BEV"), map.color_for("BEV"));
        assert_ne!(map.color_for("BEV"), map.color_for("PHEV"));
        assert_eq!(map.color_for("unknown"), Color32::GRAY);
    }
}
