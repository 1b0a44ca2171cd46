use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Everything a training run needs: network shape, learning rate, epoch
/// count, and where the data lives.
///
/// # Fields
/// - `input_nodes`   — pixels per sample
/// - `hidden_nodes`  — width of the hidden layer
/// - `output_nodes`  — number of classes
/// - `learning_rate` — gradient scale, in (0, 1]
/// - `epochs`        — full passes over the training set
/// - `seed`          — seeds weight initialization; `None` uses the thread RNG
/// - `log_every`     — progress log cadence in samples, `0` to silence
/// - `train_data`    — training CSV, used by the command-line driver
/// - `test_data`     — test CSV, used by the command-line driver
///
/// Missing JSON fields fall back to `RunConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input_nodes: usize,
    pub hidden_nodes: usize,
    pub output_nodes: usize,
    pub learning_rate: f64,
    pub epochs: usize,
    pub seed: Option<u64>,
    pub log_every: usize,
    pub train_data: Option<PathBuf>,
    pub test_data: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input_nodes: 784,
            hidden_nodes: 100,
            output_nodes: 10,
            learning_rate: 0.2,
            epochs: 5,
            seed: None,
            log_every: 100,
            train_data: None,
            test_data: None,
        }
    }
}

impl RunConfig {
    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json(path: &Path) -> Result<RunConfig> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_nodes == 0 || self.hidden_nodes == 0 || self.output_nodes == 0 {
            return Err(Error::Config(format!(
                "node counts must be positive, got {}-{}-{}",
                self.input_nodes, self.hidden_nodes, self.output_nodes
            )));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::Config(format!(
                "learning rate must lie in (0, 1], got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
