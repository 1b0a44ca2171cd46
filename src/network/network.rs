use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::sigmoid::activate;
use crate::math::{Matrix, MatrixError};

/// Initial weights are drawn uniformly from `[WEIGHT_LOW, WEIGHT_HIGH)`.
pub const WEIGHT_LOW: f64 = -0.5;
pub const WEIGHT_HIGH: f64 = 0.5;

/// Fully connected network with one hidden layer and sigmoid activations.
///
/// Inputs and targets are supplied as `1 x n` row vectors and transposed to
/// columns internally. `wih` is `hidden x input`, `who` is `output x hidden`;
/// both keep their shape for the lifetime of the network and are only
/// mutated by `train`.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    input_nodes: usize,
    hidden_nodes: usize,
    output_nodes: usize,
    learning_rate: f64,
    wih: Matrix,
    who: Matrix,
}

/// Intermediate column vectors of one forward pass.
struct Forward {
    inputs: Matrix,
    hidden_outputs: Matrix,
    final_outputs: Matrix,
}

impl NeuralNetwork {
    /// Builds a network whose weights are independent uniform draws from
    /// `rng`. Pass a seeded generator for reproducible weights.
    pub fn new<R: Rng + ?Sized>(
        input_nodes: usize,
        hidden_nodes: usize,
        output_nodes: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> NeuralNetwork {
        let wih = Matrix::uniform(hidden_nodes, input_nodes, WEIGHT_LOW, WEIGHT_HIGH, rng);
        let who = Matrix::uniform(output_nodes, hidden_nodes, WEIGHT_LOW, WEIGHT_HIGH, rng);

        debug!(
            "initialized {}-{}-{} network, learning rate {}",
            input_nodes, hidden_nodes, output_nodes, learning_rate
        );

        NeuralNetwork {
            input_nodes,
            hidden_nodes,
            output_nodes,
            learning_rate,
            wih,
            who,
        }
    }

    /// Same as `new` with a `StdRng` seeded from `seed`.
    pub fn seeded(
        input_nodes: usize,
        hidden_nodes: usize,
        output_nodes: usize,
        learning_rate: f64,
        seed: u64,
    ) -> NeuralNetwork {
        let mut rng = StdRng::seed_from_u64(seed);
        NeuralNetwork::new(input_nodes, hidden_nodes, output_nodes, learning_rate, &mut rng)
    }

    /// Builds a network around existing weights. Node counts are taken from
    /// the matrix shapes; `who.cols()` must equal `wih.rows()`.
    pub fn from_weights(
        wih: Matrix,
        who: Matrix,
        learning_rate: f64,
    ) -> Result<NeuralNetwork, MatrixError> {
        if who.cols() != wih.rows() {
            return Err(MatrixError::ShapeMismatch {
                op: "from_weights",
                left: wih.shape(),
                right: who.shape(),
            });
        }

        Ok(NeuralNetwork {
            input_nodes: wih.cols(),
            hidden_nodes: wih.rows(),
            output_nodes: who.rows(),
            learning_rate,
            wih,
            who,
        })
    }

    pub fn input_nodes(&self) -> usize {
        self.input_nodes
    }

    pub fn hidden_nodes(&self) -> usize {
        self.hidden_nodes
    }

    pub fn output_nodes(&self) -> usize {
        self.output_nodes
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Input-to-hidden weights, `hidden x input`.
    pub fn wih(&self) -> &Matrix {
        &self.wih
    }

    /// Hidden-to-output weights, `output x hidden`.
    pub fn who(&self) -> &Matrix {
        &self.who
    }

    /// Forward pass for a `1 x input_nodes` row. Returns the
    /// `output_nodes x 1` column of sigmoid outputs.
    pub fn query(&self, input_row: &Matrix) -> Result<Matrix, MatrixError> {
        Ok(self.forward(input_row)?.final_outputs)
    }

    /// Index of the strongest output for `input_row`.
    pub fn predict(&self, input_row: &Matrix) -> Result<usize, MatrixError> {
        Ok(self.query(input_row)?.argmax_column0())
    }

    /// One gradient-descent step on a single `(input, target)` pair of row
    /// vectors.
    ///
    /// Errors are `target - output`, so the scaled gradients are *added* to
    /// the weights. Both updates are computed from the pre-step weights and
    /// applied only once every shape has checked out, so a failed call leaves
    /// the network unchanged.
    pub fn train(&mut self, input_row: &Matrix, target_row: &Matrix) -> Result<(), MatrixError> {
        check_row(target_row, self.output_nodes, "train")?;

        let Forward {
            inputs,
            hidden_outputs,
            final_outputs,
        } = self.forward(input_row)?;
        let targets = target_row.transpose();

        let output_errors = targets.subtract(&final_outputs)?;
        let hidden_errors = self.who.transpose().mat_mul(&output_errors)?;

        // error * out * (1 - out)
        let output_gradient = output_errors
            .hadamard(&final_outputs)?
            .hadamard(&final_outputs.scalar_subtract_from(1.0))?;
        let who_delta = output_gradient
            .mat_mul(&hidden_outputs.transpose())?
            .scalar_multiply(self.learning_rate);

        let hidden_gradient = hidden_errors
            .hadamard(&hidden_outputs)?
            .hadamard(&hidden_outputs.scalar_subtract_from(1.0))?;
        let wih_delta = hidden_gradient
            .mat_mul(&inputs.transpose())?
            .scalar_multiply(self.learning_rate);

        self.who.add_in_place(&who_delta)?;
        self.wih.add_in_place(&wih_delta)?;

        Ok(())
    }

    fn forward(&self, input_row: &Matrix) -> Result<Forward, MatrixError> {
        check_row(input_row, self.input_nodes, "query")?;

        let inputs = input_row.transpose();
        let hidden_inputs = self.wih.mat_mul(&inputs)?;
        let hidden_outputs = activate(&hidden_inputs);
        let final_inputs = self.who.mat_mul(&hidden_outputs)?;
        let final_outputs = activate(&final_inputs);

        Ok(Forward {
            inputs,
            hidden_outputs,
            final_outputs,
        })
    }
}

fn check_row(row: &Matrix, width: usize, op: &'static str) -> Result<(), MatrixError> {
    if row.shape() != (1, width) {
        return Err(MatrixError::ShapeMismatch {
            op,
            left: (1, width),
            right: row.shape(),
        });
    }
    Ok(())
}
