use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Series;

/// Load a series file written by [`super::writer::write_series`].
///
/// Expected layout: a `#z = <temperature>` header followed by
/// space-separated `x y` rows.
pub fn load_series(path: &Path) -> Result<Series> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading series file {}", path.display()))?;
    parse_series(&text).with_context(|| format!("parsing series file {}", path.display()))
}

fn parse_series(text: &str) -> Result<Series> {
    let (header, body) = text.split_once('\n').unwrap_or((text, ""));
    let temperature = header
        .trim()
        .strip_prefix("#z =")
        .context("missing '#z = <temperature>' header")?
        .trim()
        .parse::<f64>()
        .context("header temperature is not a number")?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .comment(Some(b'#'))
        .from_reader(body.as_bytes());

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("row {row_no}"))?;
        if record.len() != 2 {
            bail!("row {row_no}: expected 2 columns, found {}", record.len());
        }
        x.push(parse_cell(&record[0], row_no, "x")?);
        y.push(parse_cell(&record[1], row_no, "y")?);
    }

    Ok(Series { temperature, x, y })
}

fn parse_cell(tok: &str, row: usize, col: &str) -> Result<f64> {
    tok.trim()
        .parse::<f64>()
        .with_context(|| format!("row {row}, {col}: '{tok}' is not a number"))
}
