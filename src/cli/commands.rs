// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every flag defaults to the reference experiment, so running
// the binary with no arguments trains on 10000 samples for 10
// epochs and scores 100 trials.

use clap::Args;
use crate::application::train_use_case::ExperimentConfig;

/// All arguments for an experiment run.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Length of every source sequence
    #[arg(long, default_value_t = 6)]
    pub n_in: usize,

    /// Number of leading source values the model must reverse
    #[arg(long, default_value_t = 3)]
    pub n_out: usize,

    /// Number of classes, including the reserved 0 start token
    #[arg(long, default_value_t = 51)]
    pub cardinality: usize,

    /// LSTM hidden/cell state width
    #[arg(long, default_value_t = 128)]
    pub hidden: usize,

    /// Number of generated training examples
    #[arg(long, default_value_t = 10_000)]
    pub samples: usize,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 10)]
    pub epochs: usize,

    /// Examples per optimiser step
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Fresh examples decoded for the accuracy figure (and again for the report)
    #[arg(long, default_value_t = 100)]
    pub trials: usize,

    /// Seed for data generation, weight init and shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the decoded predictions
    #[arg(long, default_value = "predictions.txt")]
    pub predictions: String,

    /// Append per-epoch loss/accuracy to this CSV
    #[arg(long)]
    pub metrics_csv: Option<String>,

    /// Read the whole experiment config from a JSON file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,
}

/// This is the boundary between Layer 1 and Layer 2:
/// the application layer never sees clap types.
impl From<RunArgs> for ExperimentConfig {
    fn from(a: RunArgs) -> Self {
        ExperimentConfig {
            n_in:             a.n_in,
            n_out:            a.n_out,
            cardinality:      a.cardinality,
            hidden:           a.hidden,
            samples:          a.samples,
            epochs:           a.epochs,
            batch_size:       a.batch_size,
            lr:               a.lr,
            trials:           a.trials,
            seed:             a.seed,
            predictions_path: a.predictions,
            metrics_csv:      a.metrics_csv,
        }
    }
}
