use rand::Rng;
use std::fmt;

use crate::math::error::MatrixError;

/// Dense row-major matrix of `f64`.
///
/// The shape is fixed at construction. Every binary operation checks its
/// operands and reports `MatrixError::ShapeMismatch` instead of padding or
/// truncating. Operations that return a `Matrix` always allocate a new one;
/// only `set` and `add_in_place` mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Wraps `data`, inferring the shape from the number of rows and the
    /// length of the first row. Ragged input is rejected.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix, MatrixError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        Matrix::from_shape(data, rows, cols)
    }

    /// Wraps `data` with an explicit shape, checking that it really is
    /// `rows x cols`.
    pub fn from_shape(
        data: Vec<Vec<f64>>,
        rows: usize,
        cols: usize,
    ) -> Result<Matrix, MatrixError> {
        if data.len() != rows {
            return Err(MatrixError::ShapeMismatch {
                op: "from_shape",
                left: (rows, cols),
                right: (data.len(), cols),
            });
        }
        if let Some(row) = data.iter().find(|row| row.len() != cols) {
            return Err(MatrixError::ShapeMismatch {
                op: "from_shape",
                left: (rows, cols),
                right: (rows, row.len()),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// A `1 x n` matrix holding `values`.
    pub fn row_vector(values: Vec<f64>) -> Matrix {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values],
        }
    }

    /// An `n x 1` matrix holding `values`.
    pub fn column_vector(values: Vec<f64>) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.into_iter().map(|v| vec![v]).collect(),
        }
    }

    /// Zero matrix whose every entry is then replaced by an independent
    /// draw from the uniform distribution on `[low, high)`.
    ///
    /// The generator is supplied by the caller so weights can be reproduced
    /// from a seed.
    pub fn uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(low..high);
            }
        }

        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Row-major view of the entries.
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Values of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<f64>, MatrixError> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data.iter().map(|row| row[col]).collect())
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    pub fn subtract(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, "hadamard", |a, b| a * b)
    }

    /// `scalar - self[i][j]` for every cell.
    pub fn scalar_subtract_from(&self, scalar: f64) -> Matrix {
        self.map(|x| scalar - x)
    }

    /// `scalar * self[i][j]` for every cell.
    pub fn scalar_multiply(&self, scalar: f64) -> Matrix {
        self.map(|x| scalar * x)
    }

    /// `self[i][j] += rhs[i][j]`. On a shape mismatch `self` is left untouched.
    pub fn add_in_place(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
        self.check_same_shape(rhs, "add_in_place")?;

        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, y) in row.iter_mut().zip(rhs_row.iter()) {
                *x += y;
            }
        }

        Ok(())
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Standard matrix product. Requires `self.cols == rhs.rows`; the result
    /// is `self.rows x rhs.cols`.
    pub fn mat_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::ShapeMismatch {
                op: "mat_mul",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Row index of the largest entry in column 0.
    ///
    /// The running maximum starts at `0.0` and the index at `0`, so a column
    /// with no positive entry reports row 0 even when a later row holds the
    /// true maximum. Network outputs are sigmoid values in (0, 1), where this
    /// never matters. An empty matrix also reports 0.
    pub fn argmax_column0(&self) -> usize {
        let mut best = 0.0;
        let mut index = 0;

        for (row, values) in self.data.iter().enumerate() {
            if let Some(&value) = values.first() {
                if value > best {
                    best = value;
                    index = row;
                }
            }
        }

        index
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: &'static str, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_same_shape(rhs, op)?;

        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(&x, &y)| f(x, y)).collect())
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    fn check_same_shape(&self, rhs: &Matrix, op: &'static str) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            let cells: Vec<String> = row.iter().map(|x| x.to_string()).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        write!(f, "rows: {} columns: {}", self.rows, self.cols)
    }
}
