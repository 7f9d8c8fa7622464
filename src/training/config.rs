use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{NetErr, Result};

/// Configuration for a gradient-descent training run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Learning rate.
    pub eta: f64,
    /// A sample is considered learned once every output is closer than this to its target.
    pub epsilon: f64,
    /// Maximum amount of iterations (single sample) or epochs (sequences).
    pub max_iterations: NonZeroUsize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            eta: 0.5,
            epsilon: 0.01,
            max_iterations: NonZeroUsize::new(1000).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl TrainConfig {
    pub fn new(eta: f64, epsilon: f64, max_iterations: NonZeroUsize) -> Self {
        Self {
            eta,
            epsilon,
            max_iterations,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.eta.is_finite() || self.eta <= 0. {
            return Err(NetErr::InvalidConfig(format!(
                "eta must be a positive number, got {}",
                self.eta
            )));
        }

        if self.epsilon.is_nan() || self.epsilon < 0. {
            return Err(NetErr::InvalidConfig(format!(
                "epsilon must not be negative, got {}",
                self.epsilon
            )));
        }

        Ok(())
    }
}
