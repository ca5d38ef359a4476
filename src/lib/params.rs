use crate::error::{EstimatorError, Result};
use serde::Serialize;

pub const PRIOR_DOMAIN: &str = "[0, 1)";
pub const RATE_DOMAIN: &str = "(0, 1]";

/// Prior, sensitivity and specificity of a single diagnostic test.
///
/// Sensitivity and specificity lie in (0, 1]. The prior lies in [0, 1): a prior
/// of 1 leaves nothing to update, while a prior of 0 is accepted so that the
/// 0/0 case (prior 0, specificity 1) can be reported as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityParameters {
    prior: f64,
    sensitivity: f64,
    specificity: f64,
}

impl ProbabilityParameters {
    pub fn new(prior: f64, sensitivity: f64, specificity: f64) -> Result<Self> {
        Ok(Self {
            prior: check_prior(prior)?,
            sensitivity: check_rate("sensitivity", sensitivity)?,
            specificity: check_rate("specificity", specificity)?,
        })
    }

    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn specificity(&self) -> f64 {
        self.specificity
    }

    /// True when the test carries no information, i.e. sensitivity + specificity == 1
    pub fn is_uninformative(&self) -> bool {
        (self.sensitivity + self.specificity - 1.0).abs() < 1e-12
    }
}

pub(crate) fn check_prior(value: f64) -> Result<f64> {
    // NaN fails both comparisons
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EstimatorError::InvalidParameter {
            name: "prior",
            value,
            domain: PRIOR_DOMAIN,
        })
    }
}

pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(EstimatorError::InvalidParameter {
            name,
            value,
            domain: RATE_DOMAIN,
        })
    }
}
