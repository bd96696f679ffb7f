use std::process::Command;

use anyhow::Result;

use super::{RenderJob, Renderer};

/// Runs the external gnuplot program on the generated script.
///
/// Fire-and-forget: a missing program or a failing script is logged,
/// never propagated.
pub struct GnuplotRenderer {
    program: String,
}

impl GnuplotRenderer {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn command(&self, job: &RenderJob) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&job.script).current_dir(&job.work_dir);
        cmd
    }
}

impl Renderer for GnuplotRenderer {
    fn render(&self, job: &RenderJob) -> Result<()> {
        log::info!("Running {} {}", self.program, job.script);
        match self.command(job).status() {
            Ok(status) if status.success() => {}
            Ok(status) => log::warn!("{} exited with {status}", self.program),
            Err(e) => log::warn!("Failed to run {}: {e}", self.program),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Extrema;
    use crate::render::PlotDescription;

    fn job(dir: &std::path::Path) -> RenderJob {
        RenderJob {
            work_dir: dir.to_path_buf(),
            script: "plot_script.gp".to_string(),
            plot: PlotDescription::default(),
            extrema: Extrema::EMPTY,
        }
    }

    #[test]
    fn command_runs_script_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = GnuplotRenderer::new("gnuplot");
        let cmd = renderer.command(&job(dir.path()));
        assert_eq!(cmd.get_program(), "gnuplot");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), ["plot_script.gp"]);
        assert_eq!(cmd.get_current_dir(), Some(dir.path()));
    }

    #[test]
    fn missing_program_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = GnuplotRenderer::new("definitely-not-a-plotter-binary");
        assert!(renderer.render(&job(dir.path())).is_ok());
    }
}
