#![cfg(test)]

use std::num::NonZeroUsize;

use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    arch::{activations::ActFn, neuron, Layer, Network, NetworkConfig},
    config::ActFnConfig,
    training::TrainConfig,
};

const AND2: [([f64; 3], f64); 4] = [
    ([-1., 0., 0.], 0.),
    ([-1., 0., 1.], 0.),
    ([-1., 1., 0.], 0.),
    ([-1., 1., 1.], 1.),
];

fn and2_samples() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    AND2.iter().map(|(x, y)| (x.to_vec(), vec![*y])).unzip()
}

fn half_squared_error(net: &Network, input: &[f64], target: &[f64]) -> f64 {
    let history = net.forward(input).unwrap();
    let output = history.last().unwrap();
    0.5 * target
        .iter()
        .zip(output)
        .map(|(t, y)| (t - y).powi(2))
        .sum::<f64>()
}

fn mean_error(net: &Network, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> f64 {
    let total: f64 = inputs
        .iter()
        .zip(targets)
        .map(|(x, y)| half_squared_error(net, x, y))
        .sum();

    total / inputs.len() as f64
}

#[test]
fn one_sweep_is_a_gradient_step() {
    let hidden = Layer::new(vec![
        vec![0.15, -0.2, 0.35],
        vec![-0.4, 0.25, 0.1],
    ])
    .unwrap();
    let output = Layer::new(vec![vec![0.3, -0.45], vec![0.2, 0.05]]).unwrap();
    let before = Network::from_layers(vec![hidden, output], ActFn::logistic(0.8), 0.).unwrap();

    let input = [0.9, -0.3, 0.6];
    let target = [0.8, 0.1];
    let eta = 0.1;
    let h = 1e-5;

    let mut after = before.clone();
    let config = TrainConfig::new(eta, 0., NonZeroUsize::MIN);
    after.train_sample(&input, &target, &config).unwrap();

    for (l, layer) in before.layers().iter().enumerate() {
        for (u, weights) in layer.weights().iter().enumerate() {
            for k in 0..weights.len() {
                let mut plus = before.clone();
                plus.layers_mut()[l].weights_mut()[u][k] += h;
                let mut minus = before.clone();
                minus.layers_mut()[l].weights_mut()[u][k] -= h;

                let gradient = (half_squared_error(&plus, &input, &target)
                    - half_squared_error(&minus, &input, &target))
                    / (2. * h);

                let delta = after.layers()[l].weights()[u][k] - weights[k];
                assert_abs_diff_eq!(delta, -eta * gradient, epsilon = 1e-8);
            }
        }
    }
}

#[test]
fn and2_single_layer_convergence() {
    let (inputs, targets) = and2_samples();
    let mut net = NetworkConfig {
        input_count: 3,
        output_count: 1,
        intermediate_layers: 0,
        intermediate_neurons: 0,
        act_fn: ActFnConfig::Logistic { beta: 1. },
        theta: 0.,
        seed: Some(1),
    }
    .build()
    .unwrap();

    let config = TrainConfig::new(0.5, 0.1, NonZeroUsize::new(5000).unwrap());
    net.train(&inputs, &targets, &config).unwrap();

    for (input, target) in inputs.iter().zip(&targets) {
        let output = net.simulate(input).unwrap();
        assert!((output[0] - target[0]).abs() < 0.3, "{input:?} -> {output:?}");
    }
}

#[test]
fn and2_hidden_layer_reduces_error() {
    let (inputs, targets) = and2_samples();
    let mut net = NetworkConfig {
        input_count: 3,
        output_count: 1,
        intermediate_layers: 1,
        intermediate_neurons: 3,
        act_fn: ActFnConfig::Logistic { beta: 1. },
        theta: 0.,
        seed: Some(3),
    }
    .build()
    .unwrap();

    let before = mean_error(&net, &inputs, &targets);
    let config = TrainConfig::new(0.3, 0.05, NonZeroUsize::new(2000).unwrap());
    net.train(&inputs, &targets, &config).unwrap();
    let after = mean_error(&net, &inputs, &targets);

    assert!(after < before, "error went from {before} to {after}");
}

#[test]
fn simulate_output_width_matches_config() {
    let mut rng = StdRng::seed_from_u64(11);

    for intermediate_layers in 0..3 {
        for output_count in 1..4 {
            let config = NetworkConfig {
                input_count: 4,
                output_count,
                intermediate_layers,
                intermediate_neurons: 5,
                act_fn: ActFnConfig::Tanh,
                theta: 0.,
                seed: Some(5),
            };
            let mut net = config.build_with_rng(&mut rng).unwrap();

            let input: Vec<f64> = (0..4).map(|_| rng.random_range(-1.0..1.0)).collect();
            let output = net.simulate(&input).unwrap();
            assert_eq!(output.len(), output_count);
            assert_eq!(net.simulate(&input).unwrap(), output);
        }
    }
}

#[test]
fn perceptron_learns_and2_with_the_delta_rule() {
    let act_fn = ActFn::step();
    let mut weights = vec![0.5, -0.25, 0.125];

    for _ in 0..20 {
        for (input, target) in AND2 {
            weights = neuron::train_unit(
                &weights,
                target,
                |w| neuron::delta_rule(&input, w, target, act_fn, 0.25),
                |w| neuron::activate(&input, w, act_fn),
                0.5,
                1,
                |_| {},
            )
            .unwrap();
        }
    }

    for (input, target) in AND2 {
        assert_eq!(neuron::activate(&input, &weights, act_fn).unwrap(), target);
    }
}
