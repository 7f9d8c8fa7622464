use std::{env, num::NonZeroUsize};

use anyhow::{bail, Context, Result};
use log::info;
use perceptron::{
    arch::neuron::{self, THRESHOLD_INPUT},
    ActFn, ActFnConfig, Experiment, NetworkConfig, TrainConfig,
};

const UNIT_ERROR_LIMIT: f64 = 0.05;
const UNIT_MAX_ITERATIONS: usize = 1000;
const UNIT_RATE: f64 = 0.5;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    run(&args)
}

fn run(args: &[String]) -> Result<()> {
    let Some(mode) = args.get(1) else {
        let program = args.first().map_or("perceptron", String::as_str);
        bail!("usage: {program} <unit|network> [args]");
    };

    match mode.as_str() {
        "unit" => run_unit(&args[2..]),
        "network" => run_network(args.get(2).map(String::as_str)),
        other => bail!("unknown mode: {other}, use 'unit' or 'network'"),
    }
}

/// `unit <activation> <expected> <x>...`: trains one unit with a threshold towards `expected`.
fn run_unit(args: &[String]) -> Result<()> {
    let [name, expected, xs @ ..] = args else {
        bail!("usage: unit <activation> <expected> <x>...");
    };

    let act_fn = ActFn::from_name(name, 1.)?;
    let expected: f64 = expected.parse().context("expected output is not a number")?;
    let inputs = std::iter::once(Ok(THRESHOLD_INPUT))
        .chain(xs.iter().map(|x| x.parse::<f64>()))
        .collect::<Result<Vec<_>, _>>()
        .context("inputs must be numbers")?;

    let start = vec![0.; inputs.len()];
    let mut iterations = 0;
    let weights = neuron::train_unit(
        &start,
        expected,
        |w| neuron::delta_rule(&inputs, w, expected, act_fn, UNIT_RATE),
        |w| neuron::activate(&inputs, w, act_fn),
        UNIT_ERROR_LIMIT,
        UNIT_MAX_ITERATIONS,
        |error| {
            iterations += 1;
            info!("iteration {iterations}: error {error:.6}");
        },
    )?;

    let output = neuron::activate(&inputs, &weights, act_fn)?;
    println!("weights after {iterations} iteration(s): {weights:?}");
    println!("output with {} activation: {output}", act_fn.name());
    Ok(())
}

/// `network [experiment.json]`: trains a network, on the AND gate when no file is given.
fn run_network(path: Option<&str>) -> Result<()> {
    let experiment = match path {
        Some(path) => {
            Experiment::load(path).with_context(|| format!("cannot load experiment '{path}'"))?
        }
        None => and_gate(),
    };

    let mut net = experiment
        .network
        .build()
        .context("failed to build network")?;

    net.train(&experiment.inputs, &experiment.targets, &experiment.training)
        .context("training failed")?;

    for (input, target) in experiment.inputs.iter().zip(&experiment.targets) {
        let error = net.test(input, target)?;
        let output = net.simulate(input)?;
        println!("{input:?} -> {output:?} (target {target:?}, error {error:.4})");
    }

    Ok(())
}

fn and_gate() -> Experiment {
    Experiment {
        network: NetworkConfig {
            input_count: 3,
            output_count: 1,
            intermediate_layers: 1,
            intermediate_neurons: 3,
            act_fn: ActFnConfig::Logistic { beta: 1. },
            theta: 0.,
            seed: None,
        },
        training: TrainConfig::new(0.5, 0.05, NonZeroUsize::new(5000).unwrap_or(NonZeroUsize::MIN)),
        inputs: vec![
            vec![THRESHOLD_INPUT, 0., 0.],
            vec![THRESHOLD_INPUT, 0., 1.],
            vec![THRESHOLD_INPUT, 1., 0.],
            vec![THRESHOLD_INPUT, 1., 1.],
        ],
        targets: vec![vec![0.], vec![0.], vec![0.], vec![1.]],
    }
}
