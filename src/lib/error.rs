/// Result type for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorError {
    #[error("Invalid {name}: {value} is outside {domain}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        domain: &'static str,
    },

    #[error("Degenerate case: a prior of 0 with a specificity of 1 leaves the posterior undefined (0/0)")]
    DegenerateCase,

    #[error("Invalid grid configuration: {0}")]
    GridConfiguration(String),
}

impl EstimatorError {
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, EstimatorError::InvalidParameter { .. })
    }
}
