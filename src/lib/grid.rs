use crate::error::{EstimatorError, Result};
use crate::params::{check_prior, check_rate, ProbabilityParameters};
use crate::posterior::Posterior;
use itertools::Itertools;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub const DEFAULT_RESOLUTION: usize = 50;
pub const DEFAULT_RANGE: (f64, f64) = (0.5, 1.0);

/// Closed interval [lo, hi] within (0, 1] swept along one grid axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub lo: f64,
    pub hi: f64,
}

impl AxisRange {
    pub fn new(name: &'static str, lo: f64, hi: f64) -> Result<Self> {
        if lo > hi {
            return Err(EstimatorError::GridConfiguration(format!(
                "{} range low bound {} exceeds high bound {}",
                name, lo, hi
            )));
        }
        Ok(Self {
            lo: check_rate(name, lo)?,
            hi: check_rate(name, hi)?,
        })
    }

    /// `n` evenly spaced points from `lo` to `hi`, both endpoints included.
    /// A single point is placed at `lo`.
    pub fn samples(&self, n: usize) -> Vec<f64> {
        if n == 1 {
            return vec![self.lo];
        }
        let step = (self.hi - self.lo) / (n - 1) as f64;
        (0..n)
            .map(|i| {
                if i == n - 1 {
                    self.hi
                } else {
                    (self.lo + step * i as f64).min(self.hi)
                }
            })
            .collect()
    }
}

/// Posterior values over a sensitivity x specificity sweep at a fixed prior.
///
/// Cells are stored row-major: row `r` holds `specificities[r]`, column `c`
/// holds `sensitivities[c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorGrid {
    prior: f64,
    sensitivities: Vec<f64>,
    specificities: Vec<f64>,
    cells: Vec<Posterior>,
}

impl PosteriorGrid {
    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn sensitivities(&self) -> &[f64] {
        &self.sensitivities
    }

    pub fn specificities(&self) -> &[f64] {
        &self.specificities
    }

    pub fn cells(&self) -> &[Posterior] {
        &self.cells
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.specificities.len(), self.sensitivities.len())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Posterior> {
        let (n_rows, n_cols) = self.shape();
        if row >= n_rows || col >= n_cols {
            return None;
        }
        self.cells.get(row * n_cols + col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Posterior]> {
        self.cells.chunks(self.sensitivities.len())
    }

    /// Each cell with its coordinates as (specificity, sensitivity, posterior), row-major
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, Posterior)> + '_ {
        self.specificities
            .iter()
            .cartesian_product(self.sensitivities.iter())
            .zip(self.cells.iter())
            .map(|((&specificity, &sensitivity), &posterior)| (specificity, sensitivity, posterior))
    }

    pub fn n_degenerate(&self) -> usize {
        self.cells.iter().filter(|c| c.is_degenerate()).count()
    }

    /// Row-major values with `None` for degenerate cells
    pub fn nested_values(&self) -> Vec<Vec<Option<f64>>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }
}

impl Serialize for PosteriorGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let values: Vec<&[Posterior]> = self.rows().collect();
        let mut state = serializer.serialize_struct("PosteriorGrid", 5)?;
        state.serialize_field("prior", &self.prior)?;
        state.serialize_field("resolution", &self.sensitivities.len())?;
        state.serialize_field("sensitivities", &self.sensitivities)?;
        state.serialize_field("specificities", &self.specificities)?;
        state.serialize_field("values", &values)?;
        state.end()
    }
}

fn check_resolution(resolution: usize) -> Result<usize> {
    if resolution == 0 {
        return Err(EstimatorError::GridConfiguration(
            "resolution must be a positive integer".to_string(),
        ));
    }
    let fits = resolution
        .checked_mul(resolution)
        .and_then(|n_cells| n_cells.checked_mul(std::mem::size_of::<Posterior>()))
        .is_some_and(|n_bytes| n_bytes <= isize::MAX as usize);
    if !fits {
        return Err(EstimatorError::GridConfiguration(format!(
            "resolution {} is too large for a {}x{} grid",
            resolution, resolution, resolution
        )));
    }
    Ok(resolution)
}

/// Convert a signed resolution, as handed over by a dynamically typed caller
pub fn resolution_from_signed(resolution: i64) -> Result<usize> {
    if resolution <= 0 {
        return Err(EstimatorError::GridConfiguration(format!(
            "resolution must be a positive integer, got {}",
            resolution
        )));
    }
    let resolution = usize::try_from(resolution).map_err(|_| {
        EstimatorError::GridConfiguration(format!("resolution {} does not fit", resolution))
    })?;
    check_resolution(resolution)
}

/// Evaluate the posterior at every (sensitivity, specificity) pair of a
/// `resolution` x `resolution` grid at a fixed prior.
pub fn compute_posterior_grid(
    prior: f64,
    sensitivity_range: (f64, f64),
    specificity_range: (f64, f64),
    resolution: usize,
) -> Result<PosteriorGrid> {
    let resolution = check_resolution(resolution)?;
    let prior = check_prior(prior)?;
    let sensitivity_axis = AxisRange::new("sensitivity", sensitivity_range.0, sensitivity_range.1)?;
    let specificity_axis = AxisRange::new("specificity", specificity_range.0, specificity_range.1)?;

    let sensitivities = sensitivity_axis.samples(resolution);
    let specificities = specificity_axis.samples(resolution);

    let cells = specificities
        .iter()
        .cartesian_product(sensitivities.iter())
        .map(|(&specificity, &sensitivity)| {
            ProbabilityParameters::new(prior, sensitivity, specificity).map(|p| p.posterior())
        })
        .collect::<Result<Vec<Posterior>>>()?;

    Ok(PosteriorGrid {
        prior,
        sensitivities,
        specificities,
        cells,
    })
}
