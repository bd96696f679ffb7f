use eframe::egui::Color32;
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
            // Hues span 0-300° so the first and last colours differ.
            let hue = (i as f32 / n as f32) * 300.0;
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
// Color mapping: series → Color32
// ---------------------------------------------------------------------------

/// Assigns each series a colour by temperature rank, coldest first.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: Vec<Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(temperatures: &[f64]) -> Self {
        let mut order: Vec<usize> = (0..temperatures.len()).collect();
        order.sort_by(|&a, &b| temperatures[a].total_cmp(&temperatures[b]));

        let palette = generate_palette(temperatures.len());
        let mut colors = vec![Color32::GRAY; temperatures.len()];
        for (rank, idx) in order.into_iter().enumerate() {
            colors[idx] = palette[rank];
        }

        ColorMap {
            colors,
            default_color: Color32::GRAY,
        }
    }

    /// Colour of the series at `index` (input order).
    pub fn color_for(&self, index: usize) -> Color32 {
        self.colors
            .get(index)
            .copied()
            .unwrap_or(self.default_color)
    }
}
