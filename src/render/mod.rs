//! Renderers turn the written series files into a chart.
//!
//! The sampling pipeline only produces files plus a [`PlotDescription`];
//! how (and whether) they are drawn is decided by the [`Renderer`].

pub mod gnuplot;
pub mod viewer;

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::RendererSettings;
use crate::data::model::Extrema;

// ---------------------------------------------------------------------------
// Plot description
// ---------------------------------------------------------------------------

/// One curve of the chart: its data file and temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotEntry {
    /// File name relative to the output directory.
    pub file: String,
    pub temperature: f64,
}

impl PlotEntry {
    /// Legend label.
    pub fn label(&self) -> String {
        format!("z={}", self.temperature)
    }
}

/// Declarative chart: axis labels plus the series in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotDescription {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub entries: Vec<PlotEntry>,
}

/// Everything a renderer needs once the pipeline has finished.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// Directory holding the series files and the script.
    pub work_dir: PathBuf,
    /// Script file name relative to `work_dir`.
    pub script: String,
    pub plot: PlotDescription,
    pub extrema: Extrema,
}

// ---------------------------------------------------------------------------
// Renderer seam
// ---------------------------------------------------------------------------

pub trait Renderer {
    fn render(&self, job: &RenderJob) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RendererKind {
    /// Run gnuplot on the generated script.
    #[default]
    Gnuplot,
    /// Open an interactive window.
    Viewer,
    /// Only write the files.
    None,
}

/// Leaves the files on disk and draws nothing.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, job: &RenderJob) -> Result<()> {
        log::info!(
            "Rendering skipped; {} series in {}",
            job.plot.entries.len(),
            job.work_dir.display()
        );
        Ok(())
    }
}

/// Build the renderer selected in the settings.
pub fn renderer_for(settings: &RendererSettings) -> Box<dyn Renderer> {
    match settings.kind {
        RendererKind::Gnuplot => Box::new(gnuplot::GnuplotRenderer::new(&settings.gnuplot_program)),
        RendererKind::Viewer => Box::new(viewer::ViewerRenderer),
        RendererKind::None => Box::new(NullRenderer),
    }
}
