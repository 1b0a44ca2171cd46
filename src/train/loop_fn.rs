use std::time::Instant;

use log::{debug, info, warn};

use crate::data::sample::Sample;
use crate::error::Result;
use crate::network::network::NeuralNetwork;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::RunConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs `config.epochs` full passes over `samples`, one `train` step per
/// sample in data order, and returns one `EpochStats` per epoch.
///
/// Stops at the first sample whose shape or label does not fit the network;
/// earlier steps stay applied.
pub fn train_epochs(
    network: &mut NeuralNetwork,
    samples: &[Sample],
    config: &RunConfig,
) -> Result<Vec<EpochStats>> {
    if samples.is_empty() {
        warn!("training set is empty; weights stay at their initial values");
    }

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        run_one_epoch(network, samples, epoch, config.log_every)?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            samples: samples.len(),
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        info!(
            "epoch {}/{}: {} samples in {} ms",
            stats.epoch, stats.total_epochs, stats.samples, stats.elapsed_ms
        );
        history.push(stats);
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn run_one_epoch(
    network: &mut NeuralNetwork,
    samples: &[Sample],
    epoch: usize,
    log_every: usize,
) -> Result<()> {
    let output_nodes = network.output_nodes();

    for (i, sample) in samples.iter().enumerate() {
        if log_every > 0 && i % log_every == 0 {
            debug!("epoch {} - sample {}/{}", epoch, i, samples.len());
        }

        let inputs = sample.input_row();
        let targets = sample.target_row(output_nodes)?;
        network.train(&inputs, &targets)?;
    }

    Ok(())
}
