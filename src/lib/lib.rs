pub mod error;
pub mod grid;
pub mod metric;
pub mod params;
pub mod posterior;
#[cfg(feature = "python")]
pub mod python;

pub use error::{EstimatorError, Result};
pub use grid::{compute_posterior_grid, AxisRange, PosteriorGrid, DEFAULT_RESOLUTION};
pub use params::ProbabilityParameters;
pub use posterior::{compute_posterior, Posterior};
