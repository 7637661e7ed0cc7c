// ============================================================
// Layer 3 — TrainingExample Domain Type
// ============================================================
// The reversal task in integer form. Given a source of length
// n_in the model must emit the first n_out values reversed.
//
// Example (n_out = 3):
//   source          [12, 5, 40, 3, 22, 9]
//   target          [40, 5, 12]     ← reverse(source[..3])
//   shifted_target  [ 0, 40, 5]     ← decoder input during training
//
// shifted_target is what teacher forcing feeds the decoder:
// at step t the decoder sees the TRUE token from step t-1,
// with the start sentinel 0 standing in for step -1.

use serde::{Deserialize, Serialize};

use crate::domain::error::EncodingError;

/// Reserved category for the start-of-sequence / padding sentinel.
/// Generated content never contains it.
pub const START_TOKEN: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Full input sequence, length n_in
    pub source: Vec<usize>,

    /// Decoder input for teacher forcing, length n_out
    pub shifted_target: Vec<usize>,

    /// Expected output, length n_out
    pub target: Vec<usize>,
}

impl TrainingExample {
    /// Derive target and shifted target from a source sequence.
    pub fn from_source(source: Vec<usize>, n_out: usize) -> Result<Self, EncodingError> {
        let target         = reversed_prefix(&source, n_out)?;
        let shifted_target = shift_right(&target);
        Ok(Self { source, shifted_target, target })
    }
}

/// `reverse(source[..n_out])`
pub fn reversed_prefix(source: &[usize], n_out: usize) -> Result<Vec<usize>, EncodingError> {
    if n_out > source.len() {
        return Err(EncodingError::TargetTooLong { n_out, n_in: source.len() });
    }
    Ok(source[..n_out].iter().rev().copied().collect())
}

/// `[START_TOKEN] ++ target[..len-1]`, same length as `target`.
pub fn shift_right(target: &[usize]) -> Vec<usize> {
    if target.is_empty() {
        return Vec::new();
    }
    let mut shifted = Vec::with_capacity(target.len());
    shifted.push(START_TOKEN);
    shifted.extend_from_slice(&target[..target.len() - 1]);
    shifted
}
