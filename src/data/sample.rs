use crate::math::{Matrix, MatrixError};

/// Largest raw pixel intensity.
pub const PIXEL_MAX: f64 = 255.0;
/// Target value for every class except the true one.
pub const TARGET_OFF: f64 = 0.01;
/// Target value for the true class.
pub const TARGET_ON: f64 = 0.99;

/// One labelled digit: a class index and its raw pixel intensities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub label: usize,
    pub pixels: Vec<u8>,
}

impl Sample {
    pub fn new(label: usize, pixels: Vec<u8>) -> Sample {
        Sample { label, pixels }
    }

    /// Normalized pixels as a `1 x n` row vector, ready for `query`/`train`.
    pub fn input_row(&self) -> Matrix {
        Matrix::row_vector(self.pixels.iter().map(|&p| normalize_pixel(p)).collect())
    }

    /// `1 x output_nodes` target row: `TARGET_OFF` everywhere, `TARGET_ON`
    /// at the label. Fails if the label is not a valid class.
    pub fn target_row(&self, output_nodes: usize) -> Result<Matrix, MatrixError> {
        let mut targets = Matrix::row_vector(vec![TARGET_OFF; output_nodes]);
        targets.set(0, self.label, TARGET_ON)?;
        Ok(targets)
    }

    /// Normalized pixels reshaped into rows of `width` cells. The pixel
    /// count must be a whole number of rows.
    pub fn pixel_matrix(&self, width: usize) -> Result<Matrix, MatrixError> {
        if width == 0 {
            return Ok(Matrix::default());
        }
        if self.pixels.len() % width != 0 {
            return Err(MatrixError::ShapeMismatch {
                op: "pixel_matrix",
                left: (self.pixels.len() / width + 1, width),
                right: (1, self.pixels.len()),
            });
        }
        let rows = self
            .pixels
            .chunks_exact(width)
            .map(|chunk| chunk.iter().map(|&p| normalize_pixel(p)).collect())
            .collect();
        Matrix::from_data(rows)
    }
}

/// Maps `[0, 255]` onto `[0.01, 1.0]`. Zero never reaches the network, so the
/// sigmoid derivative never vanishes on a blank pixel.
pub fn normalize_pixel(p: u8) -> f64 {
    (p as f64 / PIXEL_MAX) * 0.99 + 0.01
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_pixel_bounds() {
        assert!((normalize_pixel(0) - 0.01).abs() < 1e-12);
        assert!((normalize_pixel(255) - 1.0).abs() < 1e-12);
        assert!(normalize_pixel(128) > normalize_pixel(127));
    }

    #[test]
    fn input_row_is_a_normalized_row_vector() {
        let s = Sample::new(3, vec![0, 255, 51]);
        let row = s.input_row();
        assert_eq!(row.shape(), (1, 3));
        assert!((row.get(0, 2).unwrap() - (0.2 * 0.99 + 0.01)).abs() < 1e-12);
    }

    #[test]
    fn target_row_marks_label() {
        let s = Sample::new(2, vec![]);
        let t = s.target_row(4).unwrap();
        assert_eq!(t, Matrix::row_vector(vec![0.01, 0.01, 0.99, 0.01]));
    }

    #[test]
    fn target_row_rejects_label_outside_classes() {
        let s = Sample::new(4, vec![]);
        assert!(matches!(s.target_row(4), Err(MatrixError::IndexOutOfBounds { .. })));
    }

    #[test]
    fn pixel_matrix_reshapes_by_width() {
        let s = Sample::new(0, vec![0, 0, 255, 255, 0, 0]);
        let grid = s.pixel_matrix(3).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert!((grid.get(0, 2).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pixel_matrix_rejects_partial_rows() {
        let s = Sample::new(0, vec![1, 2, 3, 4, 5]);
        assert!(matches!(
            s.pixel_matrix(2),
            Err(MatrixError::ShapeMismatch { op: "pixel_matrix", .. })
        ));
    }
}
