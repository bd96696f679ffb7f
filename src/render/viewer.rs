use anyhow::{Context, Result, anyhow};
use eframe::egui;

use super::{RenderJob, Renderer};
use crate::app::FermiPlotApp;
use crate::data::loader::load_series;
use crate::state::ViewerState;

/// Opens an egui window overlaying the written series.
pub struct ViewerRenderer;

impl ViewerRenderer {
    /// Read every series file named in the job back into memory.
    pub fn load_state(job: &RenderJob) -> Result<ViewerState> {
        let series = job
            .plot
            .entries
            .iter()
            .map(|entry| {
                let path = job.work_dir.join(&entry.file);
                load_series(&path).with_context(|| format!("loading {}", entry.file))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ViewerState::new(job.plot.clone(), series, job.extrema))
    }
}

impl Renderer for ViewerRenderer {
    fn render(&self, job: &RenderJob) -> Result<()> {
        let state = Self::load_state(job)?;
        log::info!("Opening viewer with {} series", state.series.len());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 720.0])
                .with_min_inner_size([600.0, 400.0]),
            ..Default::default()
        };

        let title = job.plot.title.clone();
        eframe::run_native(
            &title,
            options,
            Box::new(|_cc| Ok(Box::new(FermiPlotApp::new(state)))),
        )
        .map_err(|e| anyhow!("viewer failed: {e}"))
    }
}
