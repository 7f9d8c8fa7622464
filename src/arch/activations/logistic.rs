/// Logistic sigmoid with a tunable slope `beta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Logistic {
    beta: f64,
}

impl Logistic {
    pub fn new(beta: f64) -> Self {
        Self { beta }
    }

    pub fn f(&self, z: f64) -> f64 {
        1. / (1. + (-self.beta * z).exp())
    }

    pub fn df(&self, z: f64) -> f64 {
        let s = self.f(z);
        self.beta * s * (1. - s)
    }
}
