pub mod csv;
pub mod sample;

pub use self::csv::{load_samples, read_samples};
pub use sample::Sample;
