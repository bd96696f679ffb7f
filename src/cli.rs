use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::render::RendererKind;

/// Sample the Fermi-Dirac distribution over [A, B] for N temperatures and
/// plot the curves.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, allow_negative_numbers = true)]
pub struct Args {
    /// Lower bound of the energy range [eV]
    #[arg(value_name = "A")]
    pub a: String,

    /// Upper bound of the energy range [eV]
    #[arg(value_name = "B")]
    pub b: String,

    /// Number of temperature series
    #[arg(value_name = "N")]
    pub n: String,

    /// Series temperature [K]; repeat once per series to skip the prompts
    #[arg(short = 't', long = "temperature", value_name = "T")]
    pub temperatures: Vec<f64>,

    /// Directory for the series files and the plot script
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to a JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How to draw the curves (overrides settings)
    #[arg(long, value_enum)]
    pub renderer: Option<RendererKind>,

    /// Console code page, e.g. 1251 (overrides settings; Windows only)
    #[arg(long)]
    pub code_page: Option<u32>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(kind) = self.renderer {
            settings.renderer.kind = kind;
        }
        if self.code_page.is_some() {
            settings.console.code_page = self.code_page;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[test]
    fn three_positionals_parse() {
        let args = Args::try_parse_from(["fermi-plot", "0", "1", "2"]).unwrap();
        assert_eq!((args.a.as_str(), args.b.as_str(), args.n.as_str()), ("0", "1", "2"));
        assert!(args.temperatures.is_empty());
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn negative_bounds_are_not_flags() {
        let args = Args::try_parse_from(["fermi-plot", "-1.5", "-0.5", "1", "-t", "300"]).unwrap();
        assert_eq!(args.a, "-1.5");
        assert_eq!(args.b, "-0.5");
        assert_eq!(args.temperatures, vec![300.0]);
    }

    #[rstest]
    #[case(&["fermi-plot"])]
    #[case(&["fermi-plot", "0", "1"])]
    #[case(&["fermi-plot", "0", "1", "2", "3"])]
    fn wrong_argument_count_is_a_usage_error(#[case] argv: &[&str]) {
        let err = Args::try_parse_from(argv.iter().copied()).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
        ));
        assert!(err.render().to_string().contains("Usage:"));
    }

    #[test]
    fn overrides_replace_settings() {
        let args = Args::try_parse_from([
            "fermi-plot",
            "0",
            "1",
            "1",
            "--renderer",
            "viewer",
            "--code-page",
            "1251",
        ])
        .unwrap();
        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);
        assert_eq!(settings.renderer.kind, RendererKind::Viewer);
        assert_eq!(settings.console.code_page, Some(1251));
    }

    #[test]
    fn absent_overrides_keep_settings() {
        let args = Args::try_parse_from(["fermi-plot", "0", "1", "1"]).unwrap();
        let mut settings = Settings::default();
        settings.console.code_page = Some(866);
        args.apply_overrides(&mut settings);
        assert_eq!(settings.console.code_page, Some(866));
        assert_eq!(settings.renderer.kind, RendererKind::Gnuplot);
    }
}
