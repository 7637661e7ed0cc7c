// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the training half of an experiment:
//
//   Step 1: Validate the configuration
//   Step 2: Generate the synthetic dataset   (Layer 4 - data)
//   Step 3: Wrap it as a Burn dataset        (Layer 4 - data)
//   Step 4: Open the metrics CSV, if any     (Layer 6 - infra)
//   Step 5: Run the training loop            (Layer 5 - ml)
//
// The trained model is handed back in memory; the evaluate use
// case wraps it in an Inferencer.
//
// Reference: Burn Book §5 (Training)

use std::path::Path;

use anyhow::{ensure, Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{dataset::ReversalDataset, generator::get_dataset};
use crate::infra::metrics::MetricsLogger;
use crate::ml::{trainer::{run_training, TrainingRun}, InferBackend};

// ─── Experiment Configuration ────────────────────────────────────────────────
// Every knob of a run. Defaults reproduce the reference setup:
// reverse the first 3 of 6 integers drawn from 1..=50.
// Missing keys in a JSON config file fall back to these defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub n_in:             usize,
    pub n_out:            usize,
    /// Number of classes including the reserved 0 sentinel
    pub cardinality:      usize,
    pub hidden:           usize,
    pub samples:          usize,
    pub epochs:           usize,
    pub batch_size:       usize,
    pub lr:               f64,
    pub trials:           usize,
    /// Unset means a fresh entropy seed every run
    pub seed:             Option<u64>,
    pub predictions_path: String,
    pub metrics_csv:      Option<String>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            n_in:             6,
            n_out:            3,
            cardinality:      50 + 1,
            hidden:           128,
            samples:          10_000,
            epochs:           10,
            batch_size:       32,
            lr:               1e-3,
            trials:           100,
            seed:             None,
            predictions_path: "predictions.txt".to_string(),
            metrics_csv:      None,
        }
    }
}

impl ExperimentConfig {
    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cardinality >= 2, "cardinality must be at least 2 (got {})", self.cardinality);
        ensure!(self.n_out >= 1, "n_out must be at least 1");
        ensure!(
            self.n_out <= self.n_in,
            "n_out ({}) cannot exceed n_in ({})", self.n_out, self.n_in,
        );
        ensure!(self.hidden >= 1, "hidden must be at least 1");
        ensure!(self.samples >= 1, "samples must be at least 1");
        ensure!(self.batch_size >= 1, "batch_size must be at least 1");
        ensure!(self.lr > 0.0, "lr must be positive (got {})", self.lr);
        Ok(())
    }

    /// RNG for data generation and evaluation trials.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: ExperimentConfig,
}

impl TrainUseCase {
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    /// Generate data with `rng` and train a fresh model on it.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrainingRun<InferBackend>> {
        let cfg = &self.config;
        cfg.validate()?;

        tracing::info!(
            "Generating {} examples (n_in={}, n_out={}, cardinality={})",
            cfg.samples, cfg.n_in, cfg.n_out, cfg.cardinality,
        );
        let examples = get_dataset(cfg.n_in, cfg.n_out, cfg.cardinality, cfg.samples, rng)?;
        let dataset  = ReversalDataset::new(examples);

        let metrics = cfg
            .metrics_csv
            .as_deref()
            .map(MetricsLogger::new)
            .transpose()?;

        run_training(cfg, dataset, metrics.as_ref())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_setup() {
        let cfg = ExperimentConfig::default();
        assert_eq!((cfg.n_in, cfg.n_out, cfg.cardinality), (6, 3, 51));
        assert_eq!((cfg.hidden, cfg.samples, cfg.epochs, cfg.trials), (128, 10_000, 10, 100));
        assert_eq!(cfg.predictions_path, "predictions.txt");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_shapes() {
        let cfg = ExperimentConfig { n_out: 7, ..ExperimentConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = ExperimentConfig { cardinality: 1, ..ExperimentConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = ExperimentConfig { batch_size: 0, ..ExperimentConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = ExperimentConfig { lr: 0.0, ..ExperimentConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "epochs": 2, "seed": 9 }"#).unwrap();

        let cfg = ExperimentConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.epochs, 2);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.n_in, 6);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(ExperimentConfig::from_json_file("/definitely/not/here.json").is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let cfg = ExperimentConfig { seed: Some(5), ..ExperimentConfig::default() };
        let a: u64 = cfg.rng().gen();
        let b: u64 = cfg.rng().gen();
        assert_eq!(a, b);
    }
}
