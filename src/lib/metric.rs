use crate::params::ProbabilityParameters;
use crate::posterior::{test_accuracy, Posterior};
use serde::Serialize;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Headline figures shown side by side for one set of test parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Prior,
    Posterior,
    TestAccuracy,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Prior => "Prior Probability",
            Metric::Posterior => "Posterior Probability",
            Metric::TestAccuracy => "Test Accuracy",
        }
    }

    fn decimals(&self) -> usize {
        match self {
            Metric::Prior | Metric::Posterior => 2,
            Metric::TestAccuracy => 1,
        }
    }

    pub fn read(&self, params: &ProbabilityParameters) -> MetricReading {
        let value = match self {
            Metric::Prior => Posterior::Defined(params.prior()),
            Metric::Posterior => params.posterior(),
            Metric::TestAccuracy => Posterior::Defined(test_accuracy(params)),
        };
        MetricReading {
            metric: *self,
            value,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricReading {
    pub metric: Metric,
    pub value: Posterior,
}

impl MetricReading {
    /// Value as a percentage, or "undefined" for a degenerate posterior
    pub fn formatted(&self) -> String {
        match self.value {
            Posterior::Defined(value) => {
                format!("{:.*}%", self.metric.decimals(), value * 100.0)
            }
            Posterior::Degenerate => "undefined".to_string(),
        }
    }
}

/// All metrics in display order
pub fn dashboard(params: &ProbabilityParameters) -> Vec<MetricReading> {
    Metric::iter().map(|metric| metric.read(params)).collect()
}
