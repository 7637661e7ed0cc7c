// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for user interaction. Parses flags with clap,
// then runs the experiment in three steps:
//
//   1. train       (TrainUseCase)
//   2. evaluate    (EvaluateUseCase::accuracy)
//   3. report      (EvaluateUseCase::write_predictions)
//
// The only console output besides per-epoch progress is the
// final accuracy line.
//
// Reference: Rust Book §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::RunArgs;

use crate::application::{
    evaluate_use_case::EvaluateUseCase,
    train_use_case::{ExperimentConfig, TrainUseCase},
};
use crate::ml::inferencer::Inferencer;

#[derive(Parser, Debug)]
#[command(
    name = "seq2seq-reverse",
    version = "0.1.0",
    about = "Train an encoder-decoder LSTM to reverse integer sequences, then score it."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: RunArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = match self.args.config.clone() {
            Some(path) => {
                tracing::info!("Loading experiment config from '{}'", path);
                ExperimentConfig::from_json_file(path)?
            }
            None => self.args.into(),
        };
        config.validate()?;
        tracing::debug!("Experiment config: {:?}", config);

        let mut rng = config.rng();

        let run = TrainUseCase::new(config.clone()).execute(&mut rng)?;
        if let Some(last) = run.history.last() {
            tracing::info!("Final epoch loss {:.4}, token accuracy {:.4}", last.loss, last.accuracy);
        }
        let device = Default::default();
        let inferencer = Inferencer::new(run.model, config.cardinality, device);

        let eval     = EvaluateUseCase::new(&config, &inferencer);
        let accuracy = eval.accuracy(&mut rng)?;
        println!("{accuracy}");

        eval.write_predictions(&config.predictions_path, &mut rng)?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_the_reference_experiment() {
        let cli = Cli::try_parse_from(["seq2seq-reverse"]).unwrap();
        let config: ExperimentConfig = cli.args.into();
        assert_eq!(config, ExperimentConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "seq2seq-reverse", "--n-in", "8", "--n-out", "4", "--seed", "17",
            "--predictions", "out/preds.txt", "--metrics-csv", "m.csv",
        ]).unwrap();
        let config: ExperimentConfig = cli.args.into();
        assert_eq!((config.n_in, config.n_out), (8, 4));
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.predictions_path, "out/preds.txt");
        assert_eq!(config.metrics_csv.as_deref(), Some("m.csv"));
        assert_eq!(config.epochs, 10);
    }
}
