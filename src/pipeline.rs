use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::config::PlotSettings;
use crate::data::input::{RunRequest, TemperatureSource};
use crate::data::model::Extrema;
use crate::data::sampler::sample;
use crate::data::writer::{series_file_name, write_series, OutputError, PlotScript};
use crate::render::{PlotDescription, PlotEntry, RenderJob};

/// Sample, write and report every requested series.
///
/// Series `i` (1-based) is written to `<out_dir>/<i>.txt` and appended to the
/// plot script before the next temperature is read. The first I/O failure
/// aborts the run; files already written stay on disk.
pub fn run<T, W>(
    request: &RunRequest,
    settings: &PlotSettings,
    out_dir: &Path,
    temperatures: &mut T,
    console: &mut W,
) -> Result<RenderJob>
where
    T: TemperatureSource + ?Sized,
    W: Write,
{
    fs::create_dir_all(out_dir).map_err(|source| OutputError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let script_path = out_dir.join(&settings.script_name);
    let mut script = PlotScript::create(&script_path, settings)?;
    let script_err = |source| OutputError::WriteScript {
        path: script_path.clone(),
        source,
    };

    let mut extrema = Extrema::EMPTY;
    let mut entries = Vec::with_capacity(request.series_count);

    for index in 1..=request.series_count {
        let temperature = temperatures.temperature(index)?;

        let series = sample(&request.grid, temperature);
        let local = series.extrema();
        extrema = extrema.merge(local);

        let path = write_series(out_dir, index, &series)?;
        log::info!(
            "Wrote {} ({} samples, z = {temperature}, y in {local})",
            path.display(),
            series.len()
        );

        let entry = PlotEntry {
            file: series_file_name(index),
            temperature,
        };
        script.push(&entry).map_err(script_err)?;
        entries.push(entry);
    }

    report(&extrema, console)?;
    script.finish().map_err(script_err)?;

    Ok(RenderJob {
        work_dir: out_dir.to_path_buf(),
        script: settings.script_name.clone(),
        plot: PlotDescription {
            title: settings.title.clone(),
            x_label: settings.x_label.clone(),
            y_label: settings.y_label.clone(),
            entries,
        },
        extrema,
    })
}

/// Print the overall extrema with three decimals.
pub fn report<W: Write>(extrema: &Extrema, out: &mut W) -> io::Result<()> {
    writeln!(out, "Overall minimum value of y: {:.3}", extrema.min)?;
    writeln!(out, "Overall maximum value of y: {:.3}", extrema.max)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::data::input::{parse_request, FixedTemperatures, InputError, TemperaturePrompt};
    use crate::data::loader::load_series;

    fn run_fixed(dir: &Path, a: &str, b: &str, temps: Vec<f64>) -> (Result<RenderJob>, String) {
        let request = parse_request(a, b, &temps.len().to_string()).unwrap();
        let mut source = FixedTemperatures::new(temps, request.series_count).unwrap();
        let mut console = Vec::new();
        let job = run(&request, &PlotSettings::default(), dir, &mut source, &mut console);
        (job, String::from_utf8(console).unwrap())
    }

    #[test]
    fn single_series_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let request = parse_request("0", "1", "1").unwrap();
        let mut console = Vec::new();
        let mut prompt = TemperaturePrompt::new(Cursor::new("300\n"), Vec::<u8>::new());

        let job = run(
            &request,
            &PlotSettings::default(),
            dir.path(),
            &mut prompt,
            &mut console,
        )
        .unwrap();

        let text = fs::read_to_string(dir.path().join("1.txt")).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("#z = 300"));
        assert_eq!(lines.next(), Some("0.000 1.000"));
        let samples = text.lines().count() - 1;
        assert!((1000..=1001).contains(&samples), "{samples} samples");
        assert!(!dir.path().join("2.txt").exists());

        let series = load_series(&dir.path().join("1.txt")).unwrap();
        let local = series.extrema();
        assert_eq!(
            String::from_utf8(console).unwrap(),
            format!(
                "Overall minimum value of y: {:.3}\nOverall maximum value of y: {:.3}\n",
                local.min, local.max
            )
        );

        assert_eq!(job.plot.entries.len(), 1);
        assert_eq!(job.script, "plot_script.gp");
        let script = fs::read_to_string(dir.path().join("plot_script.gp")).unwrap();
        assert!(script.ends_with("plot \\\n    '1.txt' using 1:2 with lines title 'z=300'\n"));
    }

    #[test]
    fn global_extrema_span_every_series() {
        let dir = tempfile::tempdir().unwrap();
        let temps = vec![100.0, 1000.0, 10_000.0];
        let (job, console) = run_fixed(dir.path(), "1.5", "2.75", temps.clone());
        let job = job.unwrap();

        for (i, z) in temps.iter().enumerate() {
            let series = load_series(&dir.path().join(format!("{}.txt", i + 1))).unwrap();
            assert_eq!(series.temperature, *z);
            let local = series.extrema();
            // Files hold rounded values.
            assert!(job.extrema.min <= local.min + 5e-4);
            assert!(job.extrema.max >= local.max - 5e-4);
        }
        assert_eq!(
            job.plot.entries.iter().map(|e| e.file.as_str()).collect::<Vec<_>>(),
            ["1.txt", "2.txt", "3.txt"]
        );
        assert!(console.starts_with("Overall minimum value of y: "));

        let script = fs::read_to_string(dir.path().join("plot_script.gp")).unwrap();
        assert_eq!(script.matches(", \\\n").count(), 2);
    }

    #[test]
    fn output_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("runs").join("cu");
        let (job, _) = run_fixed(&nested, "0", "4", vec![300.0]);
        assert_eq!(job.unwrap().work_dir, nested);
        assert!(nested.join("1.txt").exists());
        assert!(nested.join("plot_script.gp").exists());
    }

    #[test]
    fn script_creation_failure_aborts_before_sampling() {
        let dir = tempfile::tempdir().unwrap();
        let settings = PlotSettings {
            script_name: "missing/plot_script.gp".to_string(),
            ..PlotSettings::default()
        };
        let request = parse_request("0", "1", "1").unwrap();
        let mut source = FixedTemperatures::new(vec![300.0], 1).unwrap();

        let err = run(
            &request,
            &settings,
            dir.path(),
            &mut source,
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<OutputError>(),
            Some(OutputError::CreateScript { .. })
        ));
        assert!(!dir.path().join("1.txt").exists());
    }

    #[test]
    fn series_file_failure_keeps_earlier_files_and_stops() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("2.txt")).unwrap();

        let (job, console) = run_fixed(dir.path(), "0", "1", vec![300.0, 600.0, 900.0]);
        let err = job.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<OutputError>(),
            Some(OutputError::CreateSeries { .. })
        ));
        assert!(dir.path().join("1.txt").is_file());
        assert!(!dir.path().join("3.txt").exists());
        assert!(console.is_empty());
    }

    #[test]
    fn exhausted_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let request = parse_request("0", "1", "2").unwrap();
        let mut prompt = TemperaturePrompt::new(Cursor::new("300\n"), Vec::<u8>::new());

        let err = run(
            &request,
            &PlotSettings::default(),
            dir.path(),
            &mut prompt,
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::EndOfInput { index: 2 })
        ));
        assert!(dir.path().join("1.txt").exists());
    }
}
