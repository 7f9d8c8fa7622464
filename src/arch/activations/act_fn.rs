use super::{Logistic, Sign, Step, Tanh};
use crate::error::{NetErr, Result};

/// Distance between two consecutive abscissas in `ActFn::curve`.
const CURVE_STEP: f64 = 0.01;

/// An activation function together with its derivative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActFn {
    Step(Step),
    Sign(Sign),
    Logistic(Logistic),
    Tanh(Tanh),
}

impl ActFn {
    /// The names accepted by `ActFn::from_name`.
    pub const NAMES: [&'static str; 4] = ["step", "sign", "logistic", "tanh"];

    pub fn step() -> Self {
        Self::Step(Step::new())
    }

    pub fn sign() -> Self {
        Self::Sign(Sign::new())
    }

    pub fn logistic(beta: f64) -> Self {
        Self::Logistic(Logistic::new(beta))
    }

    pub fn tanh() -> Self {
        Self::Tanh(Tanh::new())
    }

    /// Resolves an activation function by name, `beta` is only read by `"logistic"`.
    ///
    /// # Arguments
    /// * `name` - One of `ActFn::NAMES`, or `"heaviside"` as an alias of `"step"`.
    /// * `beta` - The slope of the logistic function.
    ///
    /// # Returns
    /// The activation function or `NetErr::UnknownActivation`.
    pub fn from_name(name: &str, beta: f64) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "step" | "heaviside" => Ok(Self::step()),
            "sign" => Ok(Self::sign()),
            "logistic" => Ok(Self::logistic(beta)),
            "tanh" => Ok(Self::tanh()),
            _ => Err(NetErr::UnknownActivation(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Step(_) => "step",
            Self::Sign(_) => "sign",
            Self::Logistic(_) => "logistic",
            Self::Tanh(_) => "tanh",
        }
    }

    pub fn f(&self, x: f64) -> f64 {
        match self {
            Self::Step(a) => a.f(x),
            Self::Sign(a) => a.f(x),
            Self::Logistic(a) => a.f(x),
            Self::Tanh(a) => a.f(x),
        }
    }

    pub fn df(&self, x: f64) -> f64 {
        match self {
            Self::Step(a) => a.df(x),
            Self::Sign(a) => a.df(x),
            Self::Logistic(a) => a.df(x),
            Self::Tanh(a) => a.df(x),
        }
    }

    /// Samples the function shifted by `theta` for plotting.
    ///
    /// # Arguments
    /// * `theta` - The threshold the curve is centered on.
    /// * `offset` - How far left of `theta` the sampling starts.
    /// * `points` - The amount of samples.
    ///
    /// # Returns
    /// `points` pairs `(x, f(x - theta))` with `x` advancing by `0.01`.
    pub fn curve(&self, theta: f64, offset: f64, points: usize) -> Vec<(f64, f64)> {
        let start = theta - offset;

        (1..=points)
            .map(|i| {
                let x = start + i as f64 * CURVE_STEP;
                (x, self.f(x - theta))
            })
            .collect()
    }
}
