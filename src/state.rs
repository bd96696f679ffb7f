use crate::color::ColorMap;
use crate::data::model::{Extrema, Series};
use crate::render::PlotDescription;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    /// Axis labels, title and legend entries.
    pub plot: PlotDescription,

    /// Loaded series, in input order.
    pub series: Vec<Series>,

    /// Per-series visibility toggle.
    pub visible: Vec<bool>,

    /// Colour assignment per series.
    pub color_map: ColorMap,

    /// Global extrema reported by the pipeline.
    pub extrema: Extrema,

    /// Rescale each curve to [0, 1] before drawing.
    pub minmax_scaling: bool,
}

impl ViewerState {
    pub fn new(plot: PlotDescription, series: Vec<Series>, extrema: Extrema) -> Self {
        let temperatures: Vec<f64> = series.iter().map(|s| s.temperature).collect();
        Self {
            plot,
            visible: vec![true; series.len()],
            color_map: ColorMap::new(&temperatures),
            series,
            extrema,
            minmax_scaling: false,
        }
    }

    /// Indices of series currently shown.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, &shown)| shown.then_some(i))
            .collect()
    }

    /// Legend label of the series at `index`.
    pub fn label(&self, index: usize) -> String {
        self.plot
            .entries
            .get(index)
            .map(|e| e.label())
            .unwrap_or_else(|| format!("z={}", self.series[index].temperature))
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(shown) = self.visible.get_mut(index) {
            *shown = !*shown;
        }
    }

    pub fn select_all(&mut self) {
        self.visible.fill(true);
    }

    pub fn select_none(&mut self) {
        self.visible.fill(false);
    }
}
