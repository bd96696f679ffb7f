use std::fmt;

/// Number of steps the energy range is divided into.
pub const GRID_STEPS: f64 = 1e3;

// ---------------------------------------------------------------------------
// Grid – the uniform energy grid shared by every series
// ---------------------------------------------------------------------------

/// Uniform sample grid over `[start, end]` with step `(end - start) / 1000`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Grid {
    /// Build the grid for the given bounds. Bounds are validated by
    /// [`crate::data::input::parse_request`].
    pub fn new(start: f64, end: f64) -> Self {
        Grid {
            start,
            end,
            step: (end - start) / GRID_STEPS,
        }
    }

    /// Grid abscissae from `start` up to and including `end`.
    ///
    /// Each point is the previous one plus `step`, so accumulated rounding
    /// may drop the final point. The walk stops early if `x + step` no longer
    /// advances `x`.
    pub fn points(&self) -> impl Iterator<Item = f64> {
        let Grid { end, step, .. } = *self;
        std::iter::successors(Some(self.start), move |&x| {
            let next = x + step;
            (next > x).then_some(next)
        })
        .take_while(move |x| *x <= end)
    }
}

// ---------------------------------------------------------------------------
// Series – samples for one temperature
// ---------------------------------------------------------------------------

/// One sampled curve: occupation `y` over energy `x` at a fixed temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Temperature z [K].
    pub temperature: f64,
    /// Energy axis (x) [eV].
    pub x: Vec<f64>,
    /// Occupation (y) – same length as `x`.
    pub y: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Local extrema of the y values.
    pub fn extrema(&self) -> Extrema {
        self.y.iter().fold(Extrema::EMPTY, |acc, &y| acc.include(y))
    }
}

// ---------------------------------------------------------------------------
// Extrema – running min/max fold
// ---------------------------------------------------------------------------

/// Minimum and maximum of a set of values. Merging only ever widens the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    /// Identity of the fold: merging anything into it yields the other side.
    pub const EMPTY: Extrema = Extrema {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub fn include(self, value: f64) -> Self {
        Extrema {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    pub fn merge(self, other: Extrema) -> Self {
        Extrema {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Extrema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.min, self.max)
    }
}
