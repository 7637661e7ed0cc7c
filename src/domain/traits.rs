// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The autoregressive decode loop only needs two capabilities:
//
//   StateEncoder → turn a whole source sequence into a state
//   StepDecoder  → advance that state by one output step
//
// Neither trait mentions Burn. The state is an associated type
// so the loop can thread it through without knowing what it is
// (for the LSTM it is the (hidden, cell) pair). This keeps the
// loop testable with a plain-Rust stand-in and lets the Burn
// views in the ml layer plug in unchanged.
//
// Reference: Rust Book §10 (Traits), §19 (Associated Types)

use anyhow::Result;
use crate::domain::one_hot::OneHot;

// ─── StateEncoder ─────────────────────────────────────────────────────────────
/// Summarises a full source sequence into a recurrent state.
///
/// Implementations:
///   - InferenceEncoder → runs the encoder LSTM over the source
pub trait StateEncoder {
    /// Opaque state handed to the matching `StepDecoder`
    type State;

    /// Encode one source sequence (shape `[n_in, cardinality]`).
    fn encode(&self, source: &OneHot) -> Result<Self::State>;
}

// ─── StepDecoder ──────────────────────────────────────────────────────────────
/// Produces one output distribution per call from the previous
/// input row and the current state.
///
/// Implementations:
///   - InferenceDecoder → one decoder LSTM step + softmax projection
pub trait StepDecoder {
    type State;

    /// Advance by one step. `input` is a single row of width
    /// `cardinality`; the returned row has the same width.
    fn step(&self, input: &[f32], state: Self::State) -> Result<(Vec<f32>, Self::State)>;
}
