// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Inference re-enters the trained Seq2Seq one piece at a time:
//
//   InferenceEncoder  source one-hot → (hidden, cell)
//   InferenceDecoder  one input row + state → distribution + state
//
// Both are thin borrowing views over the SAME Seq2Seq that the
// Inferencer owns, so they can never drift from the trained
// weights or from each other.
//
// predict_sequence is the autoregressive loop. It starts from
// an all-zero input row and feeds every step's raw softmax
// output back in as the next input. The distribution is NOT
// snapped to a one-hot first; accuracy numbers depend on that.

use anyhow::{anyhow, ensure, Result};
use burn::{
    nn::LstmState,
    prelude::*,
    tensor::{activation::softmax, TensorData},
};

use crate::domain::{
    one_hot::OneHot,
    traits::{StateEncoder, StepDecoder},
};
use crate::ml::model::Seq2Seq;

/// Owns a trained model and hands out inference views over it.
pub struct Inferencer<B: Backend> {
    model:       Seq2Seq<B>,
    cardinality: usize,
    device:      B::Device,
}

impl<B: Backend> Inferencer<B> {
    pub fn new(model: Seq2Seq<B>, cardinality: usize, device: B::Device) -> Self {
        Self { model, cardinality, device }
    }

    pub fn encoder(&self) -> InferenceEncoder<'_, B> {
        InferenceEncoder { model: &self.model, cardinality: self.cardinality, device: &self.device }
    }

    pub fn decoder(&self) -> InferenceDecoder<'_, B> {
        InferenceDecoder { model: &self.model, cardinality: self.cardinality, device: &self.device }
    }

    /// Decode `n_steps` output distributions for one source sequence,
    /// stacked into a `[n_steps, cardinality]` buffer.
    pub fn predict(&self, source: &OneHot, n_steps: usize) -> Result<OneHot> {
        let rows = predict_sequence(&self.encoder(), &self.decoder(), source, n_steps, self.cardinality)?;
        Ok(OneHot::from_rows(&rows, self.cardinality)?)
    }
}

// ─── Inference views ──────────────────────────────────────────────────────────

pub struct InferenceEncoder<'a, B: Backend> {
    model:       &'a Seq2Seq<B>,
    cardinality: usize,
    device:      &'a B::Device,
}

impl<B: Backend> StateEncoder for InferenceEncoder<'_, B> {
    type State = LstmState<B, 2>;

    fn encode(&self, source: &OneHot) -> Result<Self::State> {
        ensure!(
            source.cardinality() == self.cardinality,
            "source width {} does not match model cardinality {}",
            source.cardinality(), self.cardinality,
        );
        let [len, width] = source.shape();
        let input = Tensor::<B, 3>::from_data(
            TensorData::new(source.as_slice().to_vec(), [1, len, width]),
            self.device,
        );
        Ok(self.model.encode(input))
    }
}

pub struct InferenceDecoder<'a, B: Backend> {
    model:       &'a Seq2Seq<B>,
    cardinality: usize,
    device:      &'a B::Device,
}

impl<B: Backend> StepDecoder for InferenceDecoder<'_, B> {
    type State = LstmState<B, 2>;

    fn step(&self, input: &[f32], state: Self::State) -> Result<(Vec<f32>, Self::State)> {
        ensure!(
            input.len() == self.cardinality,
            "decoder input width {} does not match model cardinality {}",
            input.len(), self.cardinality,
        );
        // [1 sequence, 1 step, C]
        let input = Tensor::<B, 3>::from_data(
            TensorData::new(input.to_vec(), [1, 1, self.cardinality]),
            self.device,
        );

        let (logits, state) = self.model.decode(input, state);
        let distribution = softmax(logits, 2)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("Cannot read decoder output: {e:?}"))?;

        Ok((distribution, state))
    }
}

// ─── Autoregressive decode loop ───────────────────────────────────────────────

/// Generate `n_steps` output distributions for `source`.
///
/// Step t's input is step t-1's output, so the loop is strictly
/// sequential. Returns exactly `n_steps` rows of width `cardinality`.
pub fn predict_sequence<E, D>(
    encoder:     &E,
    decoder:     &D,
    source:      &OneHot,
    n_steps:     usize,
    cardinality: usize,
) -> Result<Vec<Vec<f32>>>
where
    E: StateEncoder,
    D: StepDecoder<State = E::State>,
{
    ensure!(
        source.cardinality() == cardinality,
        "source width {} does not match cardinality {}",
        source.cardinality(), cardinality,
    );

    let mut state      = encoder.encode(source)?;
    let mut target_seq = vec![0.0f32; cardinality];
    let mut output     = Vec::with_capacity(n_steps);

    for _ in 0..n_steps {
        let (yhat, next_state) = decoder.step(&target_seq, state)?;
        state      = next_state;
        target_seq = yhat.clone();
        output.push(yhat);
    }

    tracing::trace!("Decoded {} steps", output.len());
    Ok(output)
}
