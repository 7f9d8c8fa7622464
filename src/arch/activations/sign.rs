/// Signum: `1`, `-1` or `0` depending on the sign of the input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sign;

impl Sign {
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, z: f64) -> f64 {
        if z > 0. {
            1.
        } else if z < 0. {
            -1.
        } else {
            0.
        }
    }

    pub fn df(&self, _z: f64) -> f64 {
        1.
    }
}
