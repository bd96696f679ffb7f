use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Series;
use crate::config::PlotSettings;
use crate::render::PlotEntry;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while persisting series files or the plot script.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create plot script file: {}", path.display())]
    CreateScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open file for writing: {}", path.display())]
    CreateSeries {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write series file: {}", path.display())]
    WriteSeries {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write plot script: {}", path.display())]
    WriteScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Series files
// ---------------------------------------------------------------------------

/// File name of the `index`-th series (1-based).
pub fn series_file_name(index: usize) -> String {
    format!("{index}.txt")
}

/// Write `series` to `<dir>/<index>.txt`.
pub fn write_series(dir: &Path, index: usize, series: &Series) -> Result<PathBuf, OutputError> {
    let path = dir.join(series_file_name(index));
    let file = File::create(&path).map_err(|source| OutputError::CreateSeries {
        path: path.clone(),
        source,
    })?;
    write_series_to(BufWriter::new(file), series).map_err(|source| OutputError::WriteSeries {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Series file layout:
///
/// ```text
/// #z = 300
/// 0.000 1.000
/// 0.001 1.000
/// ...
/// ```
///
/// Columns are space separated with three decimals, in ascending x.
pub fn write_series_to<W: Write>(mut out: W, series: &Series) -> csv::Result<()> {
    writeln!(out, "#z = {}", series.temperature)?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(out);
    for (x, y) in series.x.iter().zip(&series.y) {
        wtr.write_record([format!("{x:.3}"), format!("{y:.3}")])?;
    }
    wtr.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// gnuplot script
// ---------------------------------------------------------------------------

/// Incrementally written gnuplot script overlaying every series in one
/// `plot` command. Entries are joined with `, \` continuations; the last
/// one is closed by [`PlotScript::finish`].
pub struct PlotScript<W: Write> {
    out: W,
    entries: usize,
}

impl PlotScript<BufWriter<File>> {
    /// Create the script file and write its preamble.
    pub fn create(path: &Path, settings: &PlotSettings) -> Result<Self, OutputError> {
        let file = File::create(path).map_err(|source| OutputError::CreateScript {
            path: path.to_path_buf(),
            source,
        })?;
        PlotScript::begin(BufWriter::new(file), settings).map_err(|source| {
            OutputError::WriteScript {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl<W: Write> PlotScript<W> {
    pub fn begin(mut out: W, settings: &PlotSettings) -> io::Result<Self> {
        writeln!(out, "set terminal {}", settings.terminal)?;
        writeln!(out, "set output {}", quoted(&settings.output))?;
        writeln!(out, "set xlabel {}", quoted(&settings.x_label))?;
        writeln!(out, "set ylabel {}", quoted(&settings.y_label))?;
        writeln!(out, "set title {}", quoted(&settings.title))?;
        writeln!(out, "plot \\")?;
        Ok(PlotScript { out, entries: 0 })
    }

    pub fn push(&mut self, entry: &PlotEntry) -> io::Result<()> {
        if self.entries > 0 {
            writeln!(self.out, ", \\")?;
        }
        write!(
            self.out,
            "    {} using 1:2 with lines title {}",
            quoted(&entry.file),
            quoted(&entry.label())
        )?;
        self.entries += 1;
        Ok(())
    }

    /// Terminate the plot command and flush.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// gnuplot single-quoted string; embedded quotes are doubled.
fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
