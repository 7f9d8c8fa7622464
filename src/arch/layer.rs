use crate::error::{ensure_len, NetErr, Result};

/// An ordered group of units consuming the same upstream signals.
///
/// Holds one weight vector and one cached output per unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    outputs: Vec<f64>,
    weights: Vec<Vec<f64>>,
}

impl Layer {
    /// Creates a new `Layer` with zeroed outputs.
    ///
    /// # Arguments
    /// * `weights` - One weight vector per unit, all of the same length.
    ///
    /// # Returns
    /// The layer, or an error if it has no units or its weight vectors differ in length.
    pub fn new(weights: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = weights.first() else {
            return Err(NetErr::InvalidConfig("a layer needs at least one unit".into()));
        };

        let fan_in = first.len();
        for w in &weights {
            ensure_len("unit weights", w.len(), fan_in)?;
        }

        Ok(Self {
            outputs: vec![0.; weights.len()],
            weights,
        })
    }

    /// The amount of units in this layer.
    pub fn units(&self) -> usize {
        self.weights.len()
    }

    /// The amount of signals each unit consumes.
    pub fn fan_in(&self) -> usize {
        self.weights[0].len()
    }

    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    pub(crate) fn weights_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.weights
    }

    pub(crate) fn set_outputs(&mut self, outputs: &[f64]) {
        self.outputs.copy_from_slice(outputs);
    }
}
