use burn::{
    nn::{
        loss::CrossEntropyLossConfig,
        Linear, LinearConfig,
        Lstm, LstmConfig, LstmState,
    },
    prelude::*,
};

#[derive(Config, Debug)]
pub struct Seq2SeqConfig {
    /// One-hot width of every input and output step (includes the sentinel)
    pub cardinality: usize,
    /// Width of the LSTM hidden and cell state
    pub hidden:      usize,
}

impl Seq2SeqConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> Seq2Seq<B> {
        let encoder    = LstmConfig::new(self.cardinality, self.hidden, true).init(device);
        let decoder    = LstmConfig::new(self.cardinality, self.hidden, true).init(device);
        let projection = LinearConfig::new(self.hidden, self.cardinality).init(device);
        Seq2Seq { encoder, decoder, projection }
    }
}

/// Encoder-decoder LSTM. This one module is the only parameter store:
/// the training graph and both inference views run on these fields.
#[derive(Module, Debug)]
pub struct Seq2Seq<B: Backend> {
    pub encoder:    Lstm<B>,
    pub decoder:    Lstm<B>,
    pub projection: Linear<B>,
}

impl<B: Backend> Seq2Seq<B> {
    /// source: [batch, n_in, C] → final (hidden, cell), each [batch, hidden]
    pub fn encode(&self, source: Tensor<B, 3>) -> LstmState<B, 2> {
        let (_, state) = self.encoder.forward(source, None);
        state
    }

    /// Run the decoder over `decoder_input` ([batch, steps, C]) from
    /// `state` and project every step to logits ([batch, steps, C]).
    pub fn decode(
        &self,
        decoder_input: Tensor<B, 3>,
        state:         LstmState<B, 2>,
    ) -> (Tensor<B, 3>, LstmState<B, 2>) {
        let (hidden_seq, state) = self.decoder.forward(decoder_input, Some(state));
        (self.projection.forward(hidden_seq), state)
    }

    /// Training graph with teacher forcing: the decoder starts from the
    /// encoder's final state and reads the shifted target.
    pub fn forward(&self, source: Tensor<B, 3>, decoder_input: Tensor<B, 3>) -> Tensor<B, 3> {
        let state = self.encode(source);
        let (logits, _) = self.decode(decoder_input, state);
        logits
    }

    /// Mean categorical cross-entropy over every (sample, step) pair.
    /// Returns the loss and the logits for accuracy bookkeeping.
    pub fn forward_loss(
        &self,
        source:        Tensor<B, 3>,
        decoder_input: Tensor<B, 3>,
        targets:       Tensor<B, 2, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 3>) {
        let logits = self.forward(source, decoder_input);
        let [batch, steps, classes] = logits.dims();

        let ce = CrossEntropyLossConfig::new().init(&logits.device());
        let loss = ce.forward(
            logits.clone().reshape([batch * steps, classes]),
            targets.reshape([batch * steps]),
        );
        (loss, logits)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_training_graph_shapes() {
        let device = Default::default();
        let model: Seq2Seq<TestBackend> = Seq2SeqConfig::new(7, 8).init(&device);

        let source        = Tensor::<TestBackend, 3>::zeros([2, 5, 7], &device);
        let decoder_input = Tensor::<TestBackend, 3>::zeros([2, 3, 7], &device);
        let logits = model.forward(source.clone(), decoder_input);
        assert_eq!(logits.dims(), [2, 3, 7]);

        let state = model.encode(source);
        assert_eq!(state.hidden.dims(), [2, 8]);
        assert_eq!(state.cell.dims(),   [2, 8]);
    }

    #[test]
    fn test_loss_is_finite() {
        let device = Default::default();
        let model: Seq2Seq<TestBackend> = Seq2SeqConfig::new(5, 4).init(&device);

        let source        = Tensor::<TestBackend, 3>::ones([3, 4, 5], &device);
        let decoder_input = Tensor::<TestBackend, 3>::zeros([3, 2, 5], &device);
        let targets = Tensor::<TestBackend, 1, Int>::from_ints([1, 2, 3, 4, 1, 2], &device)
            .reshape([3, 2]);

        let (loss, logits) = model.forward_loss(source, decoder_input, targets);
        let loss: f64 = loss.into_scalar().elem::<f64>();
        assert!(loss.is_finite());
        assert!(loss > 0.0);
        assert_eq!(logits.dims(), [3, 2, 5]);
    }
}
