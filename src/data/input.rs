use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use super::model::Grid;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Problems with the run parameters or the temperature input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("bound {name} = '{value}' is not a real number")]
    InvalidBound {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("bound {name} = {value} is not finite")]
    NonFiniteBound { name: &'static str, value: f64 },

    #[error("series count '{value}' is not a positive integer")]
    InvalidCount {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("series count must be at least 1")]
    NoSeries,

    #[error("empty energy range: a = {a} must be less than b = {b}")]
    EmptyRange { a: f64, b: f64 },

    #[error("energy range [{a}, {b}] is too narrow to step through at this magnitude")]
    StepTooSmall { a: f64, b: f64 },

    #[error("{given} temperatures given for {expected} series")]
    TemperatureCount { expected: usize, given: usize },

    #[error("input ended before temperature z{index} was entered")]
    EndOfInput { index: usize },

    #[error("console I/O failed")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Run parameters
// ---------------------------------------------------------------------------

/// Validated positional parameters of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRequest {
    pub grid: Grid,
    pub series_count: usize,
}

/// Validate the textual bounds `a`, `b` and series count `n`.
pub fn parse_request(a: &str, b: &str, n: &str) -> Result<RunRequest, InputError> {
    let a = parse_bound("a", a)?;
    let b = parse_bound("b", b)?;
    let series_count = n
        .trim()
        .parse::<usize>()
        .map_err(|source| InputError::InvalidCount {
            value: n.to_string(),
            source,
        })?;

    if series_count == 0 {
        return Err(InputError::NoSeries);
    }
    if a >= b {
        return Err(InputError::EmptyRange { a, b });
    }

    let grid = Grid::new(a, b);
    if a + grid.step == a || b - grid.step == b {
        return Err(InputError::StepTooSmall { a, b });
    }

    Ok(RunRequest { grid, series_count })
}

fn parse_bound(name: &'static str, text: &str) -> Result<f64, InputError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|source| InputError::InvalidBound {
            name,
            value: text.to_string(),
            source,
        })?;
    if !value.is_finite() {
        return Err(InputError::NonFiniteBound { name, value });
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Temperature sources
// ---------------------------------------------------------------------------

/// Supplies the temperature of each series; `index` is 1-based.
pub trait TemperatureSource {
    fn temperature(&mut self, index: usize) -> Result<f64, InputError>;
}

/// Temperatures fixed up front (e.g. from the command line).
#[derive(Debug, Clone)]
pub struct FixedTemperatures {
    values: std::vec::IntoIter<f64>,
}

impl FixedTemperatures {
    pub fn new(values: Vec<f64>, expected: usize) -> Result<Self, InputError> {
        if values.len() != expected {
            return Err(InputError::TemperatureCount {
                expected,
                given: values.len(),
            });
        }
        Ok(FixedTemperatures {
            values: values.into_iter(),
        })
    }
}

impl TemperatureSource for FixedTemperatures {
    fn temperature(&mut self, index: usize) -> Result<f64, InputError> {
        self.values.next().ok_or(InputError::EndOfInput { index })
    }
}

/// Interactive prompt: asks for `z<i>` and re-asks until a token parses.
///
/// Input is consumed one whitespace-separated token per series, so several
/// temperatures may share a line. An invalid token discards the rest of its
/// line.
pub struct TemperaturePrompt<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> TemperaturePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TemperaturePrompt {
            input,
            output,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead, W: Write> TemperatureSource for TemperaturePrompt<R, W> {
    fn temperature(&mut self, index: usize) -> Result<f64, InputError> {
        write!(self.output, "Enter the value of z{index}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            let Some(token) = self.pending.pop_front() else {
                line.clear();
                if self.input.read_line(&mut line)? == 0 {
                    return Err(InputError::EndOfInput { index });
                }
                self.pending
                    .extend(line.split_whitespace().map(str::to_string));
                continue;
            };
            match token.parse::<f64>() {
                Ok(z) => return Ok(z),
                Err(_) => {
                    log::debug!("rejected temperature input {token:?}");
                    self.pending.clear();
                    write!(self.output, "Invalid input. Enter the value of z{index}: ")?;
                    self.output.flush()?;
                }
            }
        }
    }
}
