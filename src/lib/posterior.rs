use crate::error::{EstimatorError, Result};
use crate::params::{check_rate, ProbabilityParameters};
use serde::Serialize;
use std::fmt;

/// Outcome of a posterior evaluation.
///
/// `Degenerate` marks the single 0/0 case (prior 0, specificity 1) so that it
/// never travels as a NaN. Serializes as a plain number, or `null` when degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Posterior {
    Defined(f64),
    Degenerate,
}

impl Posterior {
    pub fn value(&self) -> Option<f64> {
        match self {
            Posterior::Defined(value) => Some(*value),
            Posterior::Degenerate => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Posterior::Degenerate)
    }

    pub fn into_result(self) -> Result<f64> {
        self.value().ok_or(EstimatorError::DegenerateCase)
    }
}

impl fmt::Display for Posterior {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Posterior::Defined(value) => write!(f, "{}", value),
            Posterior::Degenerate => write!(f, "undefined"),
        }
    }
}

impl ProbabilityParameters {
    /// P(condition | positive test) by Bayes' theorem
    pub fn posterior(&self) -> Posterior {
        if self.specificity() == 1.0 {
            // No false positives: every positive is a true one, unless there are none at all
            if self.prior() == 0.0 {
                return Posterior::Degenerate;
            }
            return Posterior::Defined(1.0);
        }
        let true_positive_rate = self.sensitivity() * self.prior();
        // Both factors are at least 2^-53, so this never underflows to 0
        let false_positive_rate = (1.0 - self.specificity()) * (1.0 - self.prior());
        Posterior::Defined(true_positive_rate / (true_positive_rate + false_positive_rate))
    }
}

/// Validate the inputs and compute the posterior, failing on the degenerate case.
pub fn compute_posterior(prior: f64, sensitivity: f64, specificity: f64) -> Result<f64> {
    ProbabilityParameters::new(prior, sensitivity, specificity)?
        .posterior()
        .into_result()
}

/// Balanced accuracy of the test, (sensitivity + specificity) / 2
pub fn test_accuracy(params: &ProbabilityParameters) -> f64 {
    (params.sensitivity() + params.specificity()) / 2.0
}

/// Balanced accuracy from the test rates alone; the prior plays no part in it
pub fn balanced_accuracy(sensitivity: f64, specificity: f64) -> Result<f64> {
    let sensitivity = check_rate("sensitivity", sensitivity)?;
    let specificity = check_rate("specificity", specificity)?;
    Ok((sensitivity + specificity) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_known_scenario() {
        let (prior, sensitivity, specificity) = (0.05, 0.9, 0.95);
        let expected =
            (sensitivity * prior) / ((sensitivity * prior) + (1.0 - specificity) * (1.0 - prior));
        let posterior = compute_posterior(prior, sensitivity, specificity).unwrap();
        assert!((posterior - expected).abs() < TOLERANCE);
        assert!((posterior - 0.045 / 0.0925).abs() < TOLERANCE);
    }

    #[test]
    fn test_bounds() {
        for prior in vec![0.0, 0.001, 0.05, 0.3, 0.5, 0.9, 0.999] {
            for sensitivity in vec![0.01, 0.3, 0.5, 0.9, 1.0] {
                for specificity in vec![0.01, 0.4, 0.5, 0.95, 0.999] {
                    let posterior = compute_posterior(prior, sensitivity, specificity).unwrap();
                    assert!(posterior.is_finite());
                    assert!((0.0..=1.0).contains(&posterior));
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_sensitivity() {
        for prior in vec![0.01, 0.2, 0.7] {
            for specificity in vec![0.5, 0.8, 0.99, 1.0] {
                let mut last = 0.0;
                for step in 1..=100 {
                    let sensitivity = step as f64 / 100.0;
                    let posterior = compute_posterior(prior, sensitivity, specificity).unwrap();
                    assert!(posterior >= last - 1e-12);
                    last = posterior;
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_specificity() {
        for prior in vec![0.01, 0.2, 0.7] {
            for sensitivity in vec![0.5, 0.8, 1.0] {
                let mut last = 0.0;
                for step in 1..=100 {
                    let specificity = step as f64 / 100.0;
                    let posterior = compute_posterior(prior, sensitivity, specificity).unwrap();
                    assert!(posterior >= last - 1e-12);
                    last = posterior;
                }
            }
        }
    }

    #[test]
    fn test_uninformative_test_keeps_prior() {
        for prior in vec![0.01, 0.05, 0.5, 0.9] {
            for sensitivity in vec![0.1, 0.25, 0.5, 0.75, 0.9] {
                let specificity = 1.0 - sensitivity;
                let posterior = compute_posterior(prior, sensitivity, specificity).unwrap();
                assert!((posterior - prior).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_informative_test_raises_prior() {
        let posterior = compute_posterior(0.1, 0.8, 0.7).unwrap();
        assert!(posterior > 0.1);
    }

    #[test]
    fn test_perfect_test() {
        for prior in vec![1e-6, 0.05, 0.5, 0.99] {
            assert_eq!(compute_posterior(prior, 1.0, 1.0).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_zero_prior() {
        assert_eq!(compute_posterior(0.0, 0.9, 0.95).unwrap(), 0.0);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(
            compute_posterior(0.0, 0.9, 1.0),
            Err(EstimatorError::DegenerateCase)
        );
        let params = ProbabilityParameters::new(0.0, 0.9, 1.0).unwrap();
        let posterior = params.posterior();
        assert!(posterior.is_degenerate());
        assert_eq!(posterior.value(), None);
        assert_eq!(posterior.to_string(), "undefined");
    }

    #[test]
    fn test_no_false_positives_with_tiny_prior() {
        for (prior, sensitivity) in vec![(1e-200, 1e-200), (5e-324, 0.5), (1e-300, 1e-300)] {
            assert_eq!(compute_posterior(prior, sensitivity, 1.0), Ok(1.0));
        }
    }

    #[test]
    fn test_tiny_true_positive_rate() {
        // True positives underflow to 0 while false positives stay positive
        assert_eq!(compute_posterior(1e-200, 1e-200, 0.5), Ok(0.0));
    }

    #[test]
    fn test_invalid() {
        let err = compute_posterior(1.5, 0.9, 0.95).unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = compute_posterior(0.05, 0.0, 0.95).unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = compute_posterior(0.05, 0.9, 1.2).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_balanced_accuracy() {
        let params = ProbabilityParameters::new(0.05, 0.9, 0.95).unwrap();
        assert!((test_accuracy(&params) - 0.925).abs() < TOLERANCE);
        let params = ProbabilityParameters::new(0.05, 0.4, 0.6).unwrap();
        assert!((test_accuracy(&params) - 0.5).abs() < TOLERANCE);
        assert!((balanced_accuracy(0.9, 0.95).unwrap() - 0.925).abs() < TOLERANCE);
        assert!(balanced_accuracy(0.0, 0.95).unwrap_err().is_invalid_parameter());
        assert!(balanced_accuracy(0.9, 1.5).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&Posterior::Defined(0.25)).unwrap(),
            "0.25"
        );
        assert_eq!(serde_json::to_string(&Posterior::Degenerate).unwrap(), "null");
    }
}
