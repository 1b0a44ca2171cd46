use log::info;
use serde::{Deserialize, Serialize};

use crate::data::sample::Sample;
use crate::error::Result;
use crate::network::network::NeuralNetwork;
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::{evaluate, Evaluation};
use crate::train::loop_fn::train_epochs;
use crate::train::train_config::RunConfig;

/// A trained network together with how it got there and how it scored.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub network: NeuralNetwork,
    pub epochs: Vec<EpochStats>,
    pub evaluation: Evaluation,
}

/// Serializable summary of a run. Weights are not included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub config: RunConfig,
    pub epochs: Vec<EpochStats>,
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
}

impl RunOutcome {
    pub fn accuracy(&self) -> f64 {
        self.evaluation.accuracy()
    }

    pub fn report(&self, config: &RunConfig) -> RunReport {
        RunReport {
            config: config.clone(),
            epochs: self.epochs.clone(),
            correct: self.evaluation.correct,
            total: self.evaluation.total,
            accuracy: self.evaluation.accuracy(),
        }
    }
}

/// Builds a network from `config`, trains it on `train` and scores it on
/// `test`.
pub fn run(config: &RunConfig, train: &[Sample], test: &[Sample]) -> Result<RunOutcome> {
    config.validate()?;

    let mut network = match config.seed {
        Some(seed) => NeuralNetwork::seeded(
            config.input_nodes,
            config.hidden_nodes,
            config.output_nodes,
            config.learning_rate,
            seed,
        ),
        None => NeuralNetwork::new(
            config.input_nodes,
            config.hidden_nodes,
            config.output_nodes,
            config.learning_rate,
            &mut rand::thread_rng(),
        ),
    };

    info!(
        "training {}-{}-{} network for {} epochs on {} samples (learning rate {})",
        config.input_nodes,
        config.hidden_nodes,
        config.output_nodes,
        config.epochs,
        train.len(),
        config.learning_rate
    );

    let epochs = train_epochs(&mut network, train, config)?;
    let evaluation = evaluate(&network, test, config.log_every)?;

    Ok(RunOutcome {
        network,
        epochs,
        evaluation,
    })
}
