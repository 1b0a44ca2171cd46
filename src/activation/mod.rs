pub mod sigmoid;

pub use sigmoid::{activate, sigmoid};
