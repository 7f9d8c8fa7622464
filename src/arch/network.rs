use super::{activations::ActFn, layer::Layer, neuron};
use crate::error::{ensure_len, NetErr, Result};

/// A feed-forward network: information flows forward through its layers when simulating and
/// backward when training.
///
/// Every unit shares the network's activation function. The last layer is the output layer.
#[derive(Clone, Debug)]
pub struct Network {
    layers: Vec<Layer>,
    act_fn: ActFn,
    theta: f64,
}

impl Network {
    /// Creates a new `Network` from explicit layers.
    ///
    /// # Arguments
    /// * `layers` - The layers, input side first.
    /// * `act_fn` - The activation function shared by every unit.
    /// * `theta` - The threshold value, stored for the caller's reference.
    ///
    /// # Returns
    /// The network, or an error if there are no layers or a layer's fan-in differs from the
    /// width of the layer before it.
    pub fn from_layers(layers: Vec<Layer>, act_fn: ActFn, theta: f64) -> Result<Self> {
        let Some(first) = layers.first() else {
            return Err(NetErr::InvalidConfig("a network needs at least one layer".into()));
        };

        if first.fan_in() == 0 {
            return Err(NetErr::InvalidConfig("the first layer consumes no inputs".into()));
        }

        for pair in layers.windows(2) {
            ensure_len("layer fan-in", pair[1].fan_in(), pair[0].units())?;
        }

        Ok(Self {
            layers,
            act_fn,
            theta,
        })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn act_fn(&self) -> ActFn {
        self.act_fn
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// The length every input must have.
    pub fn input_count(&self) -> usize {
        self.layers[0].fan_in()
    }

    /// The length of every output.
    pub fn output_count(&self) -> usize {
        self.layers[self.layers.len() - 1].units()
    }

    /// Makes a forward pass through the network without touching its cached outputs.
    ///
    /// # Arguments
    /// * `input` - A vector of `input_count` signals.
    ///
    /// # Returns
    /// The outputs of every layer, input side first, or a size mismatch error.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<Vec<f64>>> {
        ensure_len("network input", input.len(), self.input_count())?;

        let mut history: Vec<Vec<f64>> = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            let signals = history.last().map_or(input, Vec::as_slice);
            let outputs = layer
                .weights()
                .iter()
                .map(|w| neuron::activate(signals, w, self.act_fn))
                .collect::<Result<Vec<_>>>()?;

            history.push(outputs);
        }

        Ok(history)
    }

    /// Makes a forward pass and caches every layer's outputs.
    ///
    /// # Arguments
    /// * `input` - A vector of `input_count` signals.
    ///
    /// # Returns
    /// The output layer's values, or a size mismatch error.
    pub fn simulate(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let history = self.forward(input)?;
        self.cache(&history);
        Ok(history.last().cloned().unwrap_or_default())
    }

    pub(crate) fn cache(&mut self, history: &[Vec<f64>]) {
        for (layer, outputs) in self.layers.iter_mut().zip(history) {
            layer.set_outputs(outputs);
        }
    }

    /// Measures how far the network is from `target` for one `input`.
    ///
    /// Each component contributes `(target - output) / target`, or `target - output` when the
    /// target is zero. The deviations are averaged *before* taking the absolute value, so
    /// opposite deviations cancel out.
    ///
    /// # Returns
    /// The absolute value of the mean relative deviation.
    pub fn test(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        ensure_len("target", target.len(), self.output_count())?;
        let output = self.simulate(input)?;

        let sum: f64 = output
            .iter()
            .zip(target)
            .map(|(&actual, &desired)| {
                let divisor = if desired == 0. { 1. } else { desired };
                (desired - actual) / divisor
            })
            .sum();

        Ok((sum / output.len() as f64).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn two_by_one() -> Network {
        let hidden = Layer::new(vec![vec![0.5, -0.25], vec![0.1, 0.3]]).unwrap();
        let output = Layer::new(vec![vec![1., -1.]]).unwrap();
        Network::from_layers(vec![hidden, output], ActFn::logistic(1.), 0.).unwrap()
    }

    fn firing_pair() -> Network {
        let layer = Layer::new(vec![vec![1.], vec![1.]]).unwrap();
        Network::from_layers(vec![layer], ActFn::step(), 0.).unwrap()
    }

    #[test]
    fn from_layers_checks_fan_in() {
        let hidden = Layer::new(vec![vec![0.; 2]; 3]).unwrap();
        let output = Layer::new(vec![vec![0.; 2]]).unwrap();
        let err = Network::from_layers(vec![hidden, output], ActFn::tanh(), 0.).unwrap_err();
        assert!(matches!(err, NetErr::SizeMismatch { got: 2, expected: 3, .. }));
    }

    #[test]
    fn from_layers_rejects_no_layers() {
        let err = Network::from_layers(vec![], ActFn::tanh(), 0.).unwrap_err();
        assert!(matches!(err, NetErr::InvalidConfig(_)));
    }

    #[test]
    fn simulate_hand_computed() {
        let mut net = two_by_one();
        let s = |z: f64| 1. / (1. + (-z).exp());

        let h0 = s(0.5 - 0.5);
        let h1 = s(0.1 + 0.6);
        let expected = s(h0 - h1);

        let out = net.simulate(&[1., 2.]).unwrap();
        assert_eq!(out.len(), 1);
        assert_abs_diff_eq!(out[0], expected, epsilon = 1e-12);
        assert_abs_diff_eq!(net.layers()[0].outputs()[0], h0, epsilon = 1e-12);
        assert_abs_diff_eq!(net.layers()[0].outputs()[1], h1, epsilon = 1e-12);
    }

    #[test]
    fn simulate_is_deterministic_and_leaves_weights_alone() {
        let mut net = two_by_one();
        let before = net.layers().to_vec();

        let a = net.simulate(&[0.3, -0.7]).unwrap();
        let b = net.simulate(&[0.3, -0.7]).unwrap();

        assert_eq!(a, b);
        for (old, new) in before.iter().zip(net.layers()) {
            assert_eq!(old.weights(), new.weights());
        }
    }

    #[test]
    fn simulate_rejects_wrong_input_width() {
        let mut net = two_by_one();
        let err = net.simulate(&[1., 2., 3.]).unwrap_err();
        assert!(matches!(
            err,
            NetErr::SizeMismatch {
                what: "network input",
                got: 3,
                expected: 2
            }
        ));
    }

    #[test]
    fn forward_does_not_cache() {
        let net = two_by_one();
        let history = net.forward(&[1., 2.]).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].len(), 2);
        assert_eq!(net.layers()[0].outputs(), &[0., 0.]);
    }

    #[test]
    fn test_relative_deviation() {
        let mut net = firing_pair();
        // (2 - 1) / 2 and (0 - 1) / 1
        let err = net.test(&[1.], &[2., 0.]).unwrap();
        assert_abs_diff_eq!(err, 0.25);
    }

    #[test]
    fn test_opposite_deviations_cancel() {
        let mut net = firing_pair();
        // (2 - 1) / 2 = 0.5 and (2/3 - 1) / (2/3) = -0.5
        let err = net.test(&[1.], &[2., 2. / 3.]).unwrap();
        assert_abs_diff_eq!(err, 0., epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_wrong_target_width() {
        let mut net = firing_pair();
        assert!(net.test(&[1.], &[1.]).is_err());
    }
}
