// ============================================================
// Layer 2 — Evaluate Use Case
// ============================================================
// Scores a trained model on fresh random examples.
//
// For every trial:
//   1. generate one new example            (Layer 4 - data)
//   2. decode it autoregressively          (Layer 5 - ml)
//   3. arg-max prediction vs arg-max label (Layer 3 - domain)
//
// A trial only counts as correct if the WHOLE output sequence
// matches. The predictions report draws its own fresh trials,
// separate from the ones behind the accuracy figure.

use std::path::Path;

use anyhow::Result;
use burn::prelude::Backend;
use rand::Rng;

use crate::application::train_use_case::ExperimentConfig;
use crate::data::generator::{generate_example, EncodedExample};
use crate::domain::{evaluation::Accuracy, one_hot::one_hot_decode};
use crate::infra::report::PredictionsReport;
use crate::ml::inferencer::Inferencer;

/// One decoded trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    pub source:    Vec<usize>,
    pub target:    Vec<usize>,
    pub predicted: Vec<usize>,
}

impl Trial {
    pub fn is_match(&self) -> bool {
        self.target == self.predicted
    }
}

pub struct EvaluateUseCase<'a, B: Backend> {
    config:     &'a ExperimentConfig,
    inferencer: &'a Inferencer<B>,
}

impl<'a, B: Backend> EvaluateUseCase<'a, B> {
    pub fn new(config: &'a ExperimentConfig, inferencer: &'a Inferencer<B>) -> Self {
        Self { config, inferencer }
    }

    /// Decode one already-generated example.
    pub fn decode(&self, example: &EncodedExample) -> Result<Trial> {
        let distributions = self.inferencer.predict(&example.source, self.config.n_out)?;
        Ok(Trial {
            source:    example.source.decode(),
            target:    example.target.decode(),
            predicted: one_hot_decode(distributions.rows()),
        })
    }

    /// Generate and decode one fresh example.
    pub fn run_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Trial> {
        let cfg = self.config;
        let example = generate_example(cfg.n_in, cfg.n_out, cfg.cardinality, rng)?;
        self.decode(&example)
    }

    /// Exact-match accuracy over `config.trials` fresh examples.
    pub fn accuracy<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Accuracy> {
        let mut acc = Accuracy::default();
        for _ in 0..self.config.trials {
            let trial = self.run_trial(rng)?;
            acc.record(trial.is_match());
        }
        tracing::info!("{} of {} sequences decoded exactly", acc.correct, acc.total);
        Ok(acc)
    }

    /// Write `config.trials` fresh decoded trials to `path`.
    pub fn write_predictions<R: Rng + ?Sized>(&self, path: impl AsRef<Path>, rng: &mut R) -> Result<usize> {
        let mut report = PredictionsReport::create(path.as_ref())?;
        for _ in 0..self.config.trials {
            let trial = self.run_trial(rng)?;
            report.write(&trial.source, &trial.target, &trial.predicted)?;
        }
        let written = report.finish()?;
        tracing::info!("Wrote {} predictions to '{}'", written, path.as_ref().display());
        Ok(written)
    }
}
