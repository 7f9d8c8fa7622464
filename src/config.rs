//! Serializable descriptions of networks and training runs.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    arch::NetworkConfig,
    error::{ensure_len, Result},
    training::TrainConfig,
};

fn default_beta() -> f64 {
    1.
}

/// The activation function of a network, as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActFnConfig {
    #[serde(alias = "heaviside")]
    Step,
    Sign,
    Logistic {
        #[serde(default = "default_beta")]
        beta: f64,
    },
    Tanh,
}

/// A network together with the run that trains it and the samples it is trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub network: NetworkConfig,
    #[serde(default)]
    pub training: TrainConfig,
    pub inputs: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
}

impl Experiment {
    /// Parses an experiment from a JSON document and checks that its samples line up.
    pub fn from_json(json: &str) -> Result<Self> {
        let experiment: Self = serde_json::from_str(json)?;
        experiment.validate()?;
        Ok(experiment)
    }

    /// Reads an experiment from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.network.validate()?;
        self.training.validate()?;
        ensure_len("targets", self.targets.len(), self.inputs.len())?;

        for input in &self.inputs {
            ensure_len("experiment input", input.len(), self.network.input_count)?;
        }

        for target in &self.targets {
            ensure_len("experiment target", target.len(), self.network.output_count)?;
        }

        Ok(())
    }
}
