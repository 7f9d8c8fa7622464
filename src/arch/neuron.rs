//! Single-unit primitives: activation, the delta rule and an iterative unit trainer.

use log::trace;

use super::activations::ActFn;
use crate::error::{ensure_len, Result};

/// The constant input paired with a unit's threshold weight.
pub const THRESHOLD_INPUT: f64 = -1.;

fn net_input(inputs: &[f64], weights: &[f64]) -> Result<f64> {
    ensure_len("weights", weights.len(), inputs.len())?;
    Ok(inputs.iter().zip(weights).map(|(x, w)| x * w).sum())
}

/// Computes the output of a unit.
///
/// # Arguments
/// * `inputs` - The signals reaching the unit.
/// * `weights` - One weight per input.
/// * `act_fn` - The unit's activation function.
///
/// # Returns
/// `f(inputs · weights)` or a size mismatch error.
pub fn activate(inputs: &[f64], weights: &[f64], act_fn: ActFn) -> Result<f64> {
    Ok(act_fn.f(net_input(inputs, weights)?))
}

/// Computes the slope of a unit's activation at its current net input, `df(inputs · weights)`.
pub fn slope(inputs: &[f64], weights: &[f64], act_fn: ActFn) -> Result<f64> {
    Ok(act_fn.df(net_input(inputs, weights)?))
}

/// Like `activate`, with the threshold folded in as an extra `-1` input weighted by `theta`.
pub fn activate_with_threshold(
    inputs: &[f64],
    weights: &[f64],
    theta: f64,
    act_fn: ActFn,
) -> Result<f64> {
    ensure_len("weights", weights.len(), inputs.len())?;

    let inputs: Vec<_> = std::iter::once(THRESHOLD_INPUT).chain(inputs.iter().copied()).collect();
    let weights: Vec<_> = std::iter::once(theta).chain(weights.iter().copied()).collect();
    activate(&inputs, &weights, act_fn)
}

/// Computes a single gradient-descent step for one unit and one example under squared error.
///
/// The returned delta must be *added* to `weights`.
///
/// # Arguments
/// * `inputs` - The example's inputs.
/// * `weights` - The unit's current weights.
/// * `expected` - The desired output.
/// * `act_fn` - The unit's activation function, its derivative provides the slope.
/// * `rate` - The learning rate.
pub fn delta_rule(
    inputs: &[f64],
    weights: &[f64],
    expected: f64,
    act_fn: ActFn,
    rate: f64,
) -> Result<Vec<f64>> {
    let error = expected - activate(inputs, weights, act_fn)?;
    delta_rule_for_error(inputs, weights, error, act_fn, rate)
}

/// The delta rule for a unit whose error signal is already known, as it is for hidden units
/// during backpropagation.
pub fn delta_rule_for_error(
    inputs: &[f64],
    weights: &[f64],
    error: f64,
    act_fn: ActFn,
    rate: f64,
) -> Result<Vec<f64>> {
    let step = rate * error * slope(inputs, weights, act_fn)?;
    Ok(inputs.iter().map(|x| step * x).collect())
}

/// Repeatedly applies `update_rule` to a unit's weights until its error drops under
/// `error_limit` or `max_iterations` updates were made.
///
/// Running out of iterations is not an error: the last weights reached are returned and it is
/// up to the caller to check whether the unit converged.
///
/// # Arguments
/// * `weights` - The starting weights.
/// * `expected` - The desired output.
/// * `update_rule` - Yields the delta to add to the current weights.
/// * `activation` - Computes the unit's output for some weights.
/// * `error_limit` - Training stops once `|expected - output| < error_limit`.
/// * `max_iterations` - The maximum amount of updates.
/// * `on_iterate` - Observes the error after every update.
///
/// # Returns
/// The trained weights, or a size mismatch error if `update_rule` yields a delta of the wrong
/// length.
pub fn train_unit<U, A, C>(
    weights: &[f64],
    expected: f64,
    mut update_rule: U,
    mut activation: A,
    error_limit: f64,
    max_iterations: usize,
    mut on_iterate: C,
) -> Result<Vec<f64>>
where
    U: FnMut(&[f64]) -> Result<Vec<f64>>,
    A: FnMut(&[f64]) -> Result<f64>,
    C: FnMut(f64),
{
    let mut current = weights.to_vec();

    for i in 0..max_iterations {
        let delta = update_rule(&current)?;
        ensure_len("delta", delta.len(), current.len())?;

        current.iter_mut().zip(&delta).for_each(|(w, d)| *w += d);

        let error = (expected - activation(&current)?).abs();
        trace!(iteration = i, error = error; "unit updated");
        on_iterate(error);

        if error < error_limit {
            return Ok(current);
        }
    }

    Ok(current)
}
