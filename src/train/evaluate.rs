use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::data::sample::Sample;
use crate::error::Result;
use crate::network::network::NeuralNetwork;

/// Outcome of scoring a network against labelled samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
    /// `true` where the prediction matched the label, in sample order.
    pub scorecard: Vec<bool>,
}

impl Evaluation {
    /// Fraction of correct predictions in [0, 1]; `0.0` when nothing was scored.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

/// Queries every sample and compares the predicted class (`argmax_column0`
/// of the output column) with its label. Progress is logged every
/// `log_every` samples, `0` to silence.
pub fn evaluate(
    network: &NeuralNetwork,
    samples: &[Sample],
    log_every: usize,
) -> Result<Evaluation> {
    if samples.is_empty() {
        warn!("test set is empty; accuracy reported as 0");
    }

    let scorecard = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| -> Result<bool> {
            if log_every > 0 && i % log_every == 0 {
                debug!("evaluating sample {}/{}", i, samples.len());
            }
            Ok(network.predict(&sample.input_row())? == sample.label)
        })
        .collect::<Result<Vec<bool>>>()?;
    let correct = scorecard.iter().filter(|&&hit| hit).count();

    let evaluation = Evaluation {
        correct,
        total: scorecard.len(),
        scorecard,
    };
    info!(
        "evaluated {} samples: {} correct, performance = {}",
        evaluation.total,
        evaluation.correct,
        evaluation.accuracy()
    );

    Ok(evaluation)
}
