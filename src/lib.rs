pub mod math;
pub mod activation;
pub mod network;
pub mod data;
pub mod train;
pub mod render;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::error::MatrixError;
pub use activation::sigmoid::{activate, sigmoid};
pub use network::network::NeuralNetwork;
pub use data::sample::Sample;
pub use train::train_config::RunConfig;
pub use train::runner::{run, RunOutcome, RunReport};
pub use error::{Error, Result};
