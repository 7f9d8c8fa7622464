mod act_fn;
mod logistic;
mod sign;
mod step;
mod tanh;

pub use act_fn::ActFn;
pub use logistic::Logistic;
pub use sign::Sign;
pub use step::Step;
pub use tanh::Tanh;
