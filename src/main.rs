use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use ferrite_digits::data::load_samples;
use ferrite_digits::render::save_png;
use ferrite_digits::{run, RunConfig};

/// Train and evaluate a one-hidden-layer digit classifier on MNIST CSV data.
#[derive(Parser)]
#[command(name = "ferrite-digits", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train on one CSV file, then report accuracy on another.
    Train {
        /// JSON run configuration; flags below override its fields.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Training CSV (label,pixels...).
        #[arg(long)]
        train: Option<PathBuf>,
        /// Test CSV (label,pixels...).
        #[arg(long)]
        test: Option<PathBuf>,
        #[arg(long)]
        hidden: Option<usize>,
        #[arg(long)]
        learning_rate: Option<f64>,
        #[arg(long)]
        epochs: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write a JSON run report here.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Draw one sample of a CSV file as a PNG cell grid.
    Render {
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Pixels per image row.
        #[arg(long, default_value_t = 28)]
        width: usize,
        /// Image rows.
        #[arg(long, default_value_t = 28)]
        height: usize,
        #[arg(long, default_value_t = 10)]
        classes: usize,
        #[arg(long, default_value_t = 10)]
        cell_size: u32,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Train {
            config,
            train,
            test,
            hidden,
            learning_rate,
            epochs,
            seed,
            report,
        } => {
            let mut cfg = match config {
                Some(path) => RunConfig::load_json(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => RunConfig::default(),
            };
            if let Some(train) = train {
                cfg.train_data = Some(train);
            }
            if let Some(test) = test {
                cfg.test_data = Some(test);
            }
            if let Some(hidden) = hidden {
                cfg.hidden_nodes = hidden;
            }
            if let Some(lr) = learning_rate {
                cfg.learning_rate = lr;
            }
            if let Some(epochs) = epochs {
                cfg.epochs = epochs;
            }
            if seed.is_some() {
                cfg.seed = seed;
            }

            let train_path = cfg.train_data.clone().context("no training data given (--train)")?;
            let test_path = cfg.test_data.clone().context("no test data given (--test)")?;

            info!("training data: {}", train_path.display());
            let train_set = load_samples(&train_path, cfg.input_nodes, cfg.output_nodes)?;
            info!("test data: {}", test_path.display());
            let test_set = load_samples(&test_path, cfg.input_nodes, cfg.output_nodes)?;

            let outcome = run(&cfg, &train_set, &test_set)?;
            println!("performance = {}", outcome.accuracy());

            if let Some(path) = report {
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("creating report {}", path.display()))?;
                serde_json::to_writer_pretty(std::io::BufWriter::new(file), &outcome.report(&cfg))?;
                info!("report written to {}", path.display());
            }
        }
        Command::Render {
            data,
            index,
            width,
            height,
            classes,
            cell_size,
            out,
        } => {
            let samples = load_samples(&data, width * height, classes)?;
            let sample = samples
                .get(index)
                .with_context(|| {
                    format!("{} holds only {} samples", data.display(), samples.len())
                })?;
            let grid = sample.pixel_matrix(width)?;
            save_png(&grid, cell_size, &out)?;
            println!("label {} written to {}", sample.label, out.display());
        }
    }

    Ok(())
}
