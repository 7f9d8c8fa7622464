use log::{debug, info, trace};

use super::TrainConfig;
use crate::{
    arch::{neuron, Network},
    error::{ensure_len, Result},
};

/// `target - output`, component-wise.
fn output_error(target: &[f64], output: &[f64]) -> Vec<f64> {
    target.iter().zip(output).map(|(t, y)| t - y).collect()
}

/// The magnitude of the largest error component, `NaN` if any component is `NaN`.
fn max_abs(error: &[f64]) -> f64 {
    error.iter().fold(0., |max: f64, e| {
        if max.is_nan() || e.is_nan() {
            f64::NAN
        } else {
            max.max(e.abs())
        }
    })
}

impl Network {
    /// Trains the network on a single example until every output is within `epsilon` of the
    /// target or `max_iterations` backpropagation sweeps were made.
    ///
    /// # Arguments
    /// * `input` - The example's input.
    /// * `target` - The desired output.
    /// * `config` - Learning rate, tolerance and iteration budget.
    ///
    /// # Returns
    /// The network's output for `input` once training stops, or an error if the shapes or the
    /// config are invalid, in which case no weight was modified.
    pub fn train_sample(
        &mut self,
        input: &[f64],
        target: &[f64],
        config: &TrainConfig,
    ) -> Result<Vec<f64>> {
        config.validate()?;
        self.check_sample(input, target)?;

        for iteration in 0..config.max_iterations.get() {
            let history = self.forward(input)?;
            self.cache(&history);

            let output = history.last().map(Vec::as_slice).unwrap_or_default();
            let error = output_error(target, output);
            if max_abs(&error) < config.epsilon {
                trace!(iteration = iteration; "sample within epsilon");
                return Ok(output.to_vec());
            }

            self.backprop(input, &history, error, config.eta)?;
        }

        self.simulate(input)
    }

    /// Trains the network over a sequence of examples for at most `max_iterations` epochs.
    ///
    /// On each epoch the examples are visited in order. Those already within `epsilon` of
    /// their target are skipped, the rest trigger one backpropagation sweep. Training ends
    /// early once an epoch goes by without a single sweep.
    ///
    /// # Arguments
    /// * `inputs` - The examples' inputs.
    /// * `targets` - The desired outputs, aligned with `inputs`.
    /// * `config` - Learning rate, tolerance and epoch budget.
    ///
    /// # Returns
    /// An error if the sequences differ in length, a vector has the wrong width or the config
    /// is invalid, in which case no weight was modified.
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        config: &TrainConfig,
    ) -> Result<()> {
        config.validate()?;
        ensure_len("targets", targets.len(), inputs.len())?;
        for (input, target) in inputs.iter().zip(targets) {
            self.check_sample(input, target)?;
        }

        let max_epochs = config.max_iterations.get();
        info!(samples = inputs.len(), max_epochs = max_epochs; "training started");

        for epoch in 0..max_epochs {
            let mut sweeps = 0;
            let mut worst = 0f64;

            for (input, target) in inputs.iter().zip(targets) {
                let history = self.forward(input)?;
                self.cache(&history);

                let output = history.last().map(Vec::as_slice).unwrap_or_default();
                let error = output_error(target, output);
                let max_error = max_abs(&error);
                worst = max_abs(&[worst, max_error]);

                if max_error < config.epsilon {
                    continue;
                }

                self.backprop(input, &history, error, config.eta)?;
                sweeps += 1;
            }

            debug!(epoch = epoch, sweeps = sweeps, worst_error = worst; "epoch finished");

            if sweeps == 0 {
                info!("every sample within epsilon after {} epoch(s)", epoch + 1);
                return Ok(());
            }
        }

        info!("training stopped after {max_epochs} epoch(s)");
        Ok(())
    }

    /// Makes one backpropagation sweep, updating every layer from the output side in.
    ///
    /// # Arguments
    /// * `input` - The sample's input.
    /// * `history` - The outputs of every layer for `input`, as given by `forward`.
    /// * `error` - `target - output` for the output layer.
    /// * `eta` - The learning rate.
    fn backprop(
        &mut self,
        input: &[f64],
        history: &[Vec<f64>],
        mut error: Vec<f64>,
        eta: f64,
    ) -> Result<()> {
        let act_fn = self.act_fn();
        let nlayers = self.layers().len();

        for idx in (0..nlayers).rev() {
            let signals: &[f64] = if idx == 0 { input } else { &history[idx - 1] };
            let layer = &mut self.layers_mut()[idx];

            let slopes = layer
                .weights()
                .iter()
                .map(|w| neuron::slope(signals, w, act_fn))
                .collect::<Result<Vec<_>>>()?;

            // Projected with the weights as they were before this sweep.
            let projected: Vec<f64> = if idx > 0 {
                (0..signals.len())
                    .map(|j| {
                        layer
                            .weights()
                            .iter()
                            .zip(&error)
                            .zip(&slopes)
                            .map(|((w, e), s)| e * s * w[j])
                            .sum()
                    })
                    .collect()
            } else {
                Vec::new()
            };

            for (w, &e) in layer.weights_mut().iter_mut().zip(&error) {
                let delta = neuron::delta_rule_for_error(signals, w, e, act_fn, eta)?;
                w.iter_mut().zip(delta).for_each(|(w, d)| *w += d);
            }

            error = projected;
        }

        Ok(())
    }

    fn check_sample(&self, input: &[f64], target: &[f64]) -> Result<()> {
        ensure_len("network input", input.len(), self.input_count())?;
        ensure_len("target", target.len(), self.output_count())
    }
}
