// ============================================================
// Layer 4 — Synthetic Sequence Generator
// ============================================================
// Produces the reversal dataset from scratch; there are no
// files to load. Each example is:
//
//   source   n_in uniform ints in [1, cardinality-1]
//   target   reverse(source[..n_out])
//   shifted  [0] ++ target[..n_out-1]
//
// all three one-hot encoded over `cardinality` classes.
//
// The RNG is passed in rather than created here so a seeded
// StdRng reproduces the same dataset and the same evaluation
// trials run after run.
//
// Reference: rand crate documentation

use anyhow::Result;
use rand::Rng;

use crate::domain::{
    example::{TrainingExample, START_TOKEN},
    one_hot::OneHot,
};

/// One example in model-ready form.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedExample {
    /// `[n_in, cardinality]`
    pub source: OneHot,

    /// Shifted target fed to the decoder, `[n_out, cardinality]`
    pub decoder_input: OneHot,

    /// Label, `[n_out, cardinality]`
    pub target: OneHot,
}

impl EncodedExample {
    pub fn encode(example: &TrainingExample, cardinality: usize) -> Result<Self> {
        Ok(Self {
            source:        OneHot::encode(&example.source, cardinality)?,
            decoder_input: OneHot::encode(&example.shifted_target, cardinality)?,
            target:        OneHot::encode(&example.target, cardinality)?,
        })
    }
}

/// `length` uniform integers in `[1, cardinality-1]`.
/// `START_TOKEN` is never produced. Needs `cardinality >= 2`.
pub fn generate_sequence<R: Rng + ?Sized>(length: usize, cardinality: usize, rng: &mut R) -> Vec<usize> {
    (0..length)
        .map(|_| rng.gen_range(START_TOKEN + 1..cardinality))
        .collect()
}

/// One fresh random example.
pub fn generate_example<R: Rng + ?Sized>(
    n_in:        usize,
    n_out:       usize,
    cardinality: usize,
    rng:         &mut R,
) -> Result<EncodedExample> {
    let source  = generate_sequence(n_in, cardinality, rng);
    let example = TrainingExample::from_source(source, n_out)?;
    EncodedExample::encode(&example, cardinality)
}

/// `n_samples` independent examples.
pub fn get_dataset<R: Rng + ?Sized>(
    n_in:        usize,
    n_out:       usize,
    cardinality: usize,
    n_samples:   usize,
    rng:         &mut R,
) -> Result<Vec<EncodedExample>> {
    let samples = (0..n_samples)
        .map(|_| generate_example(n_in, n_out, cardinality, rng))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Generated {} examples (n_in={}, n_out={}, cardinality={})",
        samples.len(), n_in, n_out, cardinality,
    );
    Ok(samples)
}
