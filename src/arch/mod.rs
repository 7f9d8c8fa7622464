pub mod activations;
mod builder;
mod layer;
mod network;
pub mod neuron;

pub use builder::NetworkConfig;
pub use layer::Layer;
pub use network::Network;
