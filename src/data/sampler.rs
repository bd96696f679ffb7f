use super::model::{Grid, Series};
use super::physics::{fermi_dirac, CHEMICAL_POTENTIAL_EV};

/// Evaluate the occupation function on every grid point at temperature `z`.
pub fn sample(grid: &Grid, temperature: f64) -> Series {
    let (x, y): (Vec<f64>, Vec<f64>) = grid
        .points()
        .map(|e| (e, fermi_dirac(e, CHEMICAL_POTENTIAL_EV, temperature)))
        .unzip();

    Series { temperature, x, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Extrema;

    #[test]
    fn samples_cover_the_grid() {
        let grid = Grid::new(0.0, 1.0);
        let series = sample(&grid, 300.0);
        assert_eq!(series.temperature, 300.0);
        assert_eq!(series.len(), grid.points().count());
        assert_eq!(series.x.len(), series.y.len());
        assert_eq!(series.x[0], 0.0);
        assert!(series.y.iter().all(|y| (0.0..=1.0).contains(y)));
    }

    #[test]
    fn occupation_falls_across_the_chemical_potential() {
        let series = sample(&Grid::new(1.0, 3.0), 300.0);
        let ext = series.extrema();
        assert!(ext.max > 0.99);
        assert!(ext.min < 0.01);
        assert!(series.y.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn global_extrema_bound_every_local_extrema() {
        let grid = Grid::new(1.5, 2.75);
        let all: Vec<Series> = [50.0, 300.0, 3000.0, 20_000.0]
            .iter()
            .map(|&z| sample(&grid, z))
            .collect();
        let global = all
            .iter()
            .fold(Extrema::EMPTY, |acc, s| acc.merge(s.extrema()));
        for s in &all {
            let local = s.extrema();
            assert!(global.min <= local.min);
            assert!(global.max >= local.max);
        }
    }
}
