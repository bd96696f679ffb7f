use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::RendererKind;

// ---------------------------------------------------------------------------
// Plot script settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSettings {
    #[serde(default = "PlotSettings::default_script_name")]
    pub script_name: String,
    #[serde(default = "PlotSettings::default_terminal")]
    pub terminal: String,
    #[serde(default = "PlotSettings::default_output")]
    pub output: String,
    #[serde(default = "PlotSettings::default_x_label")]
    pub x_label: String,
    #[serde(default = "PlotSettings::default_y_label")]
    pub y_label: String,
    #[serde(default = "PlotSettings::default_title")]
    pub title: String,
}

impl PlotSettings {
    fn default_script_name() -> String {
        "plot_script.gp".to_string()
    }
    fn default_terminal() -> String {
        "pngcairo enhanced".to_string()
    }
    fn default_output() -> String {
        "plot.png".to_string()
    }
    fn default_x_label() -> String {
        "Energy (eV)".to_string()
    }
    fn default_y_label() -> String {
        "f(E)".to_string()
    }
    fn default_title() -> String {
        "Fermi-Dirac Distribution".to_string()
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            script_name: Self::default_script_name(),
            terminal: Self::default_terminal(),
            output: Self::default_output(),
            x_label: Self::default_x_label(),
            y_label: Self::default_y_label(),
            title: Self::default_title(),
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer / console settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererSettings {
    #[serde(default)]
    pub kind: RendererKind,
    #[serde(default = "RendererSettings::default_gnuplot_program")]
    pub gnuplot_program: String,
}

impl RendererSettings {
    fn default_gnuplot_program() -> String {
        "gnuplot".to_string()
    }
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            kind: RendererKind::default(),
            gnuplot_program: Self::default_gnuplot_program(),
        }
    }
}

/// Console character encoding. `code_page` only has an effect on Windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default)]
    pub code_page: Option<u32>,
}

// ---------------------------------------------------------------------------
// Settings file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub plot: PlotSettings,
    #[serde(default)]
    pub renderer: RendererSettings,
    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Settings {
    /// Load settings from a JSON file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
