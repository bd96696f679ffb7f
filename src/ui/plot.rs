use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Occupation plot (central panel)
// ---------------------------------------------------------------------------

/// Render the overlaid occupation curves in the central panel.
pub fn occupation_plot(ui: &mut Ui, state: &ViewerState) {
    if state.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No series to show");
        });
        return;
    }

    Plot::new("occupation_plot")
        .legend(Legend::default())
        .x_axis_label(state.plot.x_label.as_str())
        .y_axis_label(state.plot.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for idx in state.visible_indices() {
                let sp = &state.series[idx];

                let y_values = if state.minmax_scaling {
                    minmax_scaled(&sp.y)
                } else {
                    sp.y.clone()
                };

                let points: PlotPoints = sp
                    .x
                    .iter()
                    .zip(y_values.iter())
                    .map(|(&xi, &yi)| [xi, yi])
                    .collect();

                let line = Line::new(points)
                    .name(state.label(idx))
                    .color(state.color_map.color_for(idx))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

/// Rescale `y` to [0, 1]; a flat curve maps to all zeros.
pub fn minmax_scaled(y: &[f64]) -> Vec<f64> {
    let min = y.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range.abs() < f64::EPSILON {
        vec![0.0; y.len()]
    } else {
        y.iter().map(|&yi| (yi - min) / range).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_maps_to_unit_range() {
        assert_eq!(minmax_scaled(&[0.25, 0.5, 0.75]), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn flat_curve_scales_to_zero() {
        assert_eq!(minmax_scaled(&[0.3, 0.3]), vec![0.0, 0.0]);
    }
}
