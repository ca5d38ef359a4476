use crate::error::EstimatorError;
use crate::grid::{self, DEFAULT_RESOLUTION};
use crate::posterior;
use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

impl From<EstimatorError> for PyErr {
    fn from(err: EstimatorError) -> PyErr {
        match err {
            EstimatorError::DegenerateCase => PyZeroDivisionError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

#[pymodule]
fn bayestest_utils(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_posterior, m)?)?;
    m.add_function(wrap_pyfunction!(compute_posterior_grid, m)?)?;
    m.add_function(wrap_pyfunction!(test_accuracy, m)?)?;
    Ok(())
}

#[pyfunction]
pub fn compute_posterior(prior: f64, sensitivity: f64, specificity: f64) -> PyResult<f64> {
    Ok(posterior::compute_posterior(prior, sensitivity, specificity)?)
}

/// Returns (sensitivities, specificities, values); degenerate cells are None
#[pyfunction]
#[pyo3(signature = (prior, sensitivity_range, specificity_range, resolution = DEFAULT_RESOLUTION as i64))]
pub fn compute_posterior_grid(
    prior: f64,
    sensitivity_range: (f64, f64),
    specificity_range: (f64, f64),
    resolution: i64,
) -> PyResult<(Vec<f64>, Vec<f64>, Vec<Vec<Option<f64>>>)> {
    let grid = grid::compute_posterior_grid(
        prior,
        sensitivity_range,
        specificity_range,
        grid::resolution_from_signed(resolution)?,
    )?;
    Ok((
        grid.sensitivities().to_vec(),
        grid.specificities().to_vec(),
        grid.nested_values(),
    ))
}

#[pyfunction]
pub fn test_accuracy(sensitivity: f64, specificity: f64) -> PyResult<f64> {
    Ok(posterior::balanced_accuracy(sensitivity, specificity)?)
}
