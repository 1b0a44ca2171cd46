pub mod epoch_stats;
pub mod evaluate;
pub mod loop_fn;
pub mod runner;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use evaluate::{evaluate, Evaluation};
pub use loop_fn::train_epochs;
pub use runner::{run, RunOutcome, RunReport};
pub use train_config::RunConfig;
