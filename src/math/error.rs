use thiserror::Error;

/// Failures raised by `Matrix` and `NeuralNetwork` operations.
///
/// Both variants signal a caller bug (wrong network configuration or
/// wrongly shaped data); they are never retried or recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand dimensions are incompatible for `op`.
    #[error(
        "shape mismatch in {op}: left is {}x{}, right is {}x{}",
        .left.0, .left.1, .right.0, .right.1
    )]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A `(row, col)` access fell outside a `rows x cols` matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
