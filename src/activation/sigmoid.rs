use crate::math::matrix::Matrix;

/// Logistic function `1 / (1 + e^-x)`, squashing into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Applies `sigmoid` to every entry of a column vector, returning a new
/// `n x 1` matrix.
///
/// Only column vectors are ever passed in by the network.
pub fn activate(list: &Matrix) -> Matrix {
    debug_assert_eq!(list.cols(), 1, "activate expects a column vector");
    list.map(sigmoid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_bounded_and_increasing() {
        let xs: Vec<f64> = (-300..=300).map(|i| i as f64 * 0.1).collect();
        for x in &xs {
            let y = sigmoid(*x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
        for pair in xs.windows(2) {
            assert!(sigmoid(pair[0]) < sigmoid(pair[1]));
        }
    }

    #[test]
    fn sigmoid_is_symmetric_about_one_half() {
        for x in [0.3, 1.7, 4.2] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn activate_maps_each_entry() {
        let col = Matrix::column_vector(vec![0.0, 2.0, -2.0]);
        let out = activate(&col);
        assert_eq!(out.shape(), (3, 1));
        assert_eq!(out.get(0, 0).unwrap(), 0.5);
        assert!((out.get(1, 0).unwrap() - 0.8807970779778823).abs() < 1e-12);
        assert!((out.get(2, 0).unwrap() - 0.11920292202211755).abs() < 1e-12);
    }
}
