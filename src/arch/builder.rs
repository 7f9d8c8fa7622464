use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use super::{activations::ActFn, layer::Layer, network::Network};
use crate::{
    config::ActFnConfig,
    error::{NetErr, Result},
};

/// Lower bound of the initial weights.
const INIT_LOW: f64 = -1.;
/// Upper bound of the initial weights.
const INIT_HIGH: f64 = 1.;

/// Everything needed to build a `Network`.
///
/// Building does not consume the config, every `build` call yields an independently weighted
/// network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_count: usize,
    pub output_count: usize,
    pub intermediate_layers: usize,
    pub intermediate_neurons: usize,
    pub act_fn: ActFnConfig,
    #[serde(default)]
    pub theta: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    /// Checks that the config describes a network with at least one signal flowing through
    /// every layer.
    pub fn validate(&self) -> Result<()> {
        if self.input_count == 0 {
            return Err(NetErr::InvalidConfig("input_count must be positive".into()));
        }

        if self.output_count == 0 {
            return Err(NetErr::InvalidConfig("output_count must be positive".into()));
        }

        if self.intermediate_layers > 0 && self.intermediate_neurons == 0 {
            return Err(NetErr::InvalidConfig(format!(
                "{} intermediate layer(s) with no neurons",
                self.intermediate_layers
            )));
        }

        Ok(())
    }

    /// Builds a new `Network`, seeding the weights from `seed` when given and from the OS
    /// otherwise.
    pub fn build(&self) -> Result<Network> {
        let mut rng = self.generate_rng();
        self.build_with_rng(&mut rng)
    }

    /// Builds a new `Network` drawing every weight from `rng`.
    ///
    /// # Arguments
    /// * `rng` - The random number generator the weights are sampled with.
    ///
    /// # Returns
    /// The network, or an error if the config is invalid.
    pub fn build_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Network> {
        self.validate()?;

        let act_fn = self.resolve_act_fn();
        let dist = Uniform::new_inclusive(INIT_LOW, INIT_HIGH)
            .map_err(|e| NetErr::InvalidConfig(e.to_string()))?;

        let nlayers = self.intermediate_layers + 1;
        let mut fan_in = self.input_count;
        let mut layers = Vec::with_capacity(nlayers);

        for i in 0..nlayers {
            let units = if i == nlayers - 1 {
                self.output_count
            } else {
                self.intermediate_neurons
            };

            let mut weights = Vec::with_capacity(units);
            for _ in 0..units {
                weights.push((0..fan_in).map(|_| dist.sample(rng)).collect());
            }

            layers.push(Layer::new(weights)?);
            fan_in = units;
        }

        debug!(
            layers = nlayers,
            act_fn = act_fn.name();
            "built network with {} input(s) and {} output(s)",
            self.input_count,
            self.output_count
        );

        Network::from_layers(layers, act_fn, self.theta)
    }

    fn resolve_act_fn(&self) -> ActFn {
        match self.act_fn {
            ActFnConfig::Step => ActFn::step(),
            ActFnConfig::Sign => ActFn::sign(),
            ActFnConfig::Logistic { beta } => ActFn::logistic(beta),
            ActFnConfig::Tanh => ActFn::tanh(),
        }
    }

    fn generate_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
