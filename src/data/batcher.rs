// ============================================================
// Layer 4 — Seq2Seq Batcher
// ============================================================
// Implements Burn's Batcher trait to stack EncodedExamples
// into tensors for the training graph.
//
// Shapes for a batch of N examples:
//
//   source         [N, n_in,  C]   float, one-hot rows
//   decoder_input  [N, n_out, C]   float, one-hot rows
//   targets        [N, n_out]      int,   class indices
//
// Targets are stored as class indices rather than one-hot
// rows because Burn's cross-entropy takes integer labels.
// The loss is the same: CE against a one-hot label only ever
// reads the log-probability of the hot class.
//
// Every example in a run has the same n_in / n_out, so the
// OneHot buffers can simply be concatenated and reshaped.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
    tensor::TensorData,
};

use crate::data::generator::EncodedExample;

// ─── Seq2SeqBatch ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct Seq2SeqBatch<B: Backend> {
    pub source:        Tensor<B, 3>,
    pub decoder_input: Tensor<B, 3>,
    pub targets:       Tensor<B, 2, Int>,
}

// ─── Seq2SeqBatcher ───────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct Seq2SeqBatcher<B: Backend> {
    /// The device to create tensors on
    pub device: B::Device,
}

impl<B: Backend> Seq2SeqBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    fn stack(&self, buffers: Vec<&[f32]>, shape: [usize; 3]) -> Tensor<B, 3> {
        let flat: Vec<f32> = buffers.concat();
        Tensor::<B, 3>::from_data(TensorData::new(flat, shape), &self.device)
    }
}

impl<B: Backend> Batcher<EncodedExample, Seq2SeqBatch<B>> for Seq2SeqBatcher<B> {
    fn batch(&self, items: Vec<EncodedExample>) -> Seq2SeqBatch<B> {
        let batch_size  = items.len();
        let [n_in, c]   = items[0].source.shape();
        let [n_out, _]  = items[0].target.shape();

        let source = self.stack(
            items.iter().map(|e| e.source.as_slice()).collect(),
            [batch_size, n_in, c],
        );
        let decoder_input = self.stack(
            items.iter().map(|e| e.decoder_input.as_slice()).collect(),
            [batch_size, n_out, c],
        );

        // Labels go in as class indices
        let labels: Vec<i32> = items
            .iter()
            .flat_map(|e| e.target.decode())
            .map(|class| class as i32)
            .collect();
        let targets = Tensor::<B, 1, Int>::from_ints(labels.as_slice(), &self.device)
            .reshape([batch_size, n_out]);

        Seq2SeqBatch { source, decoder_input, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::get_dataset;
    use burn::backend::NdArray;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_batch_shapes() {
        let examples = get_dataset(6, 3, 11, 4, &mut StdRng::seed_from_u64(5)).unwrap();
        let batcher  = Seq2SeqBatcher::<NdArray>::new(Default::default());
        let batch    = batcher.batch(examples);

        assert_eq!(batch.source.dims(),        [4, 6, 11]);
        assert_eq!(batch.decoder_input.dims(), [4, 3, 11]);
        assert_eq!(batch.targets.dims(),       [4, 3]);
    }

    #[test]
    fn test_targets_are_class_indices() {
        let examples = get_dataset(5, 2, 9, 2, &mut StdRng::seed_from_u64(8)).unwrap();
        let expected: Vec<i64> = examples
            .iter()
            .flat_map(|e| e.target.decode())
            .map(|c| c as i64)
            .collect();

        let batcher = Seq2SeqBatcher::<NdArray>::new(Default::default());
        let batch   = batcher.batch(examples);
        let got: Vec<i64> = batch
            .targets
            .into_data()
            .convert::<i64>()
            .to_vec::<i64>()
            .unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_source_rows_stay_one_hot() {
        let examples = get_dataset(3, 1, 6, 3, &mut StdRng::seed_from_u64(9)).unwrap();
        let batcher  = Seq2SeqBatcher::<NdArray>::new(Default::default());
        let batch    = batcher.batch(examples);

        // every (sample, step) row sums to exactly one
        let sums: Vec<f32> = batch
            .source
            .sum_dim(2)
            .into_data()
            .to_vec::<f32>()
            .unwrap();
        assert_eq!(sums.len(), 9);
        assert!(sums.iter().all(|&s| (s - 1.0).abs() < 1e-6));
    }
}
