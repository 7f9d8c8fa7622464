/// Heaviside step: `1` for non-negative input, `0` otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Step;

impl Step {
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, z: f64) -> f64 {
        if z >= 0. {
            1.
        } else {
            0.
        }
    }

    /// The step is flat almost everywhere, a unit slope is used instead so the delta rule
    /// reduces to the perceptron learning rule.
    pub fn df(&self, _z: f64) -> f64 {
        1.
    }
}
