//! # perceptron
//!
//! A small supervised-learning engine: single-unit activation and delta-rule training, and
//! feed-forward networks of sigmoid-style units trained by backpropagation.
//!
//! ## Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use perceptron::{ActFnConfig, NetworkConfig, TrainConfig};
//!
//! let mut net = NetworkConfig {
//!     input_count: 3,
//!     output_count: 1,
//!     intermediate_layers: 1,
//!     intermediate_neurons: 4,
//!     act_fn: ActFnConfig::Logistic { beta: 1.0 },
//!     theta: 0.0,
//!     seed: Some(42),
//! }
//! .build()
//! .unwrap();
//!
//! let inputs = vec![vec![-1.0, 0.0, 1.0], vec![-1.0, 1.0, 1.0]];
//! let targets = vec![vec![0.0], vec![1.0]];
//! let config = TrainConfig::new(0.5, 0.05, NonZeroUsize::new(100).unwrap());
//!
//! net.train(&inputs, &targets, &config).unwrap();
//! assert_eq!(net.simulate(&inputs[0]).unwrap().len(), 1);
//! ```

pub mod arch;
pub mod config;
pub mod error;
mod test;
pub mod training;

pub use arch::{activations::ActFn, Layer, Network, NetworkConfig};
pub use config::{ActFnConfig, Experiment};
pub use error::{NetErr, Result};
pub use training::TrainConfig;
