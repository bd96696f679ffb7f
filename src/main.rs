mod app;
mod cli;
mod color;
mod config;
mod console;
mod data;
mod pipeline;
mod render;
mod state;
mod ui;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;

use cli::Args;
use config::Settings;
use data::input::{parse_request, FixedTemperatures, TemperaturePrompt};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply_overrides(&mut settings);
    console::apply_code_page(settings.console.code_page);

    let request = parse_request(&args.a, &args.b, &args.n)?;
    let mut stdout = io::stdout();

    let job = if args.temperatures.is_empty() {
        let mut prompt = TemperaturePrompt::new(io::stdin().lock(), io::stdout());
        pipeline::run(&request, &settings.plot, &args.output_dir, &mut prompt, &mut stdout)?
    } else {
        let mut fixed = FixedTemperatures::new(args.temperatures.clone(), request.series_count)?;
        pipeline::run(&request, &settings.plot, &args.output_dir, &mut fixed, &mut stdout)?
    };

    render::renderer_for(&settings.renderer).render(&job)
}
