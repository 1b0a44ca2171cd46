//! Debug rendering of a `Matrix` as a grid of filled gray cells.
//!
//! Cell `(row, col)` covers the `cell_size x cell_size` pixel square whose
//! top-left corner is `(col * cell_size, row * cell_size)`. Brighter cells
//! mean larger values.

use std::path::Path;

use image::{GrayImage, Luma};
use log::debug;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Gray level for a cell value: `[0, 1]` maps linearly onto `[0, 255]`,
/// anything outside is clamped.
pub fn shade(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Fails with `Error::Config` when the image would not fit in `u32` pixels
/// per side.
pub fn render(matrix: &Matrix, cell_size: u32) -> Result<GrayImage> {
    let width = side_length(matrix.cols(), cell_size)?;
    let height = side_length(matrix.rows(), cell_size)?;
    let rows = matrix.as_rows();

    Ok(GrayImage::from_fn(width, height, |x, y| {
        let value = rows[(y / cell_size) as usize][(x / cell_size) as usize];
        Luma([shade(value)])
    }))
}

/// Renders `matrix` and writes it to `path` as PNG.
pub fn save_png(matrix: &Matrix, cell_size: u32, path: &Path) -> Result<()> {
    let img = render(matrix, cell_size)?;
    img.save(path)?;
    debug!("wrote {}x{} grid to {}", img.width(), img.height(), path.display());
    Ok(())
}

fn side_length(cells: usize, cell_size: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|n| n.checked_mul(cell_size))
        .ok_or_else(|| {
            Error::Config(format!("{} cells of {} pixels do not fit in an image", cells, cell_size))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_is_monotonic_and_clamped() {
        assert_eq!(shade(-3.0), 0);
        assert_eq!(shade(0.0), 0);
        assert_eq!(shade(0.5), 128);
        assert_eq!(shade(1.0), 255);
        assert_eq!(shade(7.0), 255);

        let levels: Vec<u8> = (0..=100).map(|i| shade(i as f64 / 100.0)).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn render_fills_each_cell() {
        let m = Matrix::from_data(vec![vec![0.0, 1.0, 0.5], vec![1.0, 0.0, 0.0]]).unwrap();
        let img = render(&m, 4).unwrap();
        assert_eq!(img.dimensions(), (12, 8));
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
        assert_eq!(img.get_pixel(7, 3).0[0], 255);
        assert_eq!(img.get_pixel(11, 0).0[0], 128);
        assert_eq!(img.get_pixel(2, 6).0[0], 255);
    }

    #[test]
    fn empty_matrix_renders_empty_image() {
        assert_eq!(render(&Matrix::default(), 10).unwrap().dimensions(), (0, 0));
    }

    #[test]
    fn oversized_cells_are_rejected() {
        let err = render(&Matrix::zeros(28, 28), u32::MAX / 2).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let path = std::env::temp_dir().join("ferrite-digits-never-written.png");
        assert!(matches!(save_png(&Matrix::zeros(3, 3), u32::MAX, &path), Err(Error::Config(_))));
        assert!(!path.exists());
    }

    #[test]
    fn save_png_writes_a_file() {
        let name = format!("ferrite-digits-grid-{}.png", std::process::id());
        let path = std::env::temp_dir().join(name);
        let m = Matrix::column_vector(vec![0.1, 0.9]);
        save_png(&m, 2, &path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }
}
