mod backprop;
mod config;

pub use config::TrainConfig;
