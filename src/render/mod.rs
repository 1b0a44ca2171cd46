pub mod grid;

pub use grid::{render, save_png, shade};
