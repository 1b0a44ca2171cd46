//! End-to-end behaviour of `NeuralNetwork::query` and `NeuralNetwork::train`.

use ferrite_digits::{sigmoid, Matrix, MatrixError, NeuralNetwork};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn wih() -> Matrix {
    Matrix::from_data(vec![vec![0.9, 0.3, 0.4], vec![0.2, 0.8, 0.2], vec![0.1, 0.5, 0.6]]).unwrap()
}

fn who() -> Matrix {
    Matrix::from_data(vec![vec![0.3, 0.7, 0.5], vec![0.6, 0.5, 0.2], vec![0.8, 0.1, 0.9]]).unwrap()
}

fn sum_squared_error(net: &NeuralNetwork, input: &Matrix, target: &Matrix) -> f64 {
    let out = net.query(input).unwrap();
    target
        .transpose()
        .subtract(&out)
        .unwrap()
        .as_rows()
        .iter()
        .map(|row| row[0] * row[0])
        .sum()
}

#[test]
fn fixed_weights_forward_pass() {
    let net = NeuralNetwork::from_weights(wih(), who(), 0.3).unwrap();
    let input = Matrix::row_vector(vec![0.9, 0.1, 0.8]);

    let hidden = wih().mat_mul(&input.transpose()).unwrap().map(sigmoid);
    let expected = who().mat_mul(&hidden).unwrap().map(sigmoid);
    let out = net.query(&input).unwrap();

    assert_eq!(out.shape(), (3, 1));
    for i in 0..3 {
        assert!((out.get(i, 0).unwrap() - expected.get(i, 0).unwrap()).abs() < 1e-9);
    }
}

#[test]
fn node_counts_follow_weight_shapes() {
    let net = NeuralNetwork::from_weights(Matrix::zeros(5, 8), Matrix::zeros(2, 5), 0.1).unwrap();
    assert_eq!((net.input_nodes(), net.hidden_nodes(), net.output_nodes()), (8, 5, 2));
    assert_eq!(net.learning_rate(), 0.1);
}

#[test]
fn repeated_training_converges_on_one_example() {
    let mut net = NeuralNetwork::from_weights(wih(), who(), 0.3).unwrap();
    let input = Matrix::row_vector(vec![0.9, 0.1, 0.8]);
    let target = Matrix::row_vector(vec![0.01, 0.99, 0.01]);

    let start = sum_squared_error(&net, &input, &target);
    let mut previous = start;
    for step in 0..50 {
        net.train(&input, &target).unwrap();
        let current = sum_squared_error(&net, &input, &target);
        assert!(current < previous, "step {step}: {current} >= {previous}");
        previous = current;
    }
    assert!(previous < start * 0.5);
}

#[test]
fn random_network_learns_to_separate_two_patterns() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut net = NeuralNetwork::new(4, 6, 2, 0.3, &mut rng);

    let a = Matrix::row_vector(vec![0.99, 0.99, 0.01, 0.01]);
    let b = Matrix::row_vector(vec![0.01, 0.01, 0.99, 0.99]);
    let ta = Matrix::row_vector(vec![0.99, 0.01]);
    let tb = Matrix::row_vector(vec![0.01, 0.99]);

    for _ in 0..500 {
        net.train(&a, &ta).unwrap();
        net.train(&b, &tb).unwrap();
    }

    assert_eq!(net.predict(&a).unwrap(), 0);
    assert_eq!(net.predict(&b).unwrap(), 1);
}

#[test]
fn zero_learning_rate_freezes_weights() {
    let mut net = NeuralNetwork::seeded(6, 4, 3, 0.0, 5);
    let (wih_before, who_before) = (net.wih().clone(), net.who().clone());
    net.train(
        &Matrix::row_vector(vec![0.5; 6]),
        &Matrix::row_vector(vec![0.99, 0.01, 0.01]),
    )
    .unwrap();
    assert_eq!(net.wih(), &wih_before);
    assert_eq!(net.who(), &who_before);
}

#[test]
fn wrong_target_width_is_a_shape_mismatch() {
    let mut net = NeuralNetwork::seeded(3, 3, 3, 0.3, 5);
    let err = net
        .train(&Matrix::row_vector(vec![0.1, 0.2, 0.3]), &Matrix::row_vector(vec![0.5; 4]))
        .unwrap_err();
    assert!(matches!(err, MatrixError::ShapeMismatch { .. }));
}
