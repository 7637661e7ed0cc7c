// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn model code. The domain layer
// never imports burn; the data layer only touches it for the
// Dataset / Batcher plumbing.
//
// What's in this layer:
//
//   model.rs      : The encoder-decoder LSTM
//                   • encoder LSTM   (source → final state)
//                   • decoder LSTM   (seeded with that state)
//                   • dense projection to class logits
//                   • teacher-forced forward + cross-entropy
//
//   trainer.rs    : The training loop
//                   DataLoader batches, forward pass, loss,
//                   backward pass, Adam step, epoch metrics
//
//   inferencer.rs : Inference views + autoregressive decoding
//                   Encoder and single-step decoder views that
//                   borrow the trained model, and the loop that
//                   feeds each prediction back as the next input
//
// Reference: Burn Book §3 (Building Blocks), §5 (Training)
//            Sutskever et al. (2014) Sequence to Sequence Learning
//            Hochreiter & Schmidhuber (1997) LSTM

/// Encoder-decoder LSTM architecture
pub mod model;

/// Training loop with per-epoch metrics
pub mod trainer;

/// Inference views and the autoregressive decode loop
pub mod inferencer;

/// Backend used for inference and as the inner backend for training.
#[cfg(feature = "wgpu")]
pub type InferBackend = burn::backend::Wgpu;
#[cfg(not(feature = "wgpu"))]
pub type InferBackend = burn::backend::NdArray;

pub type TrainBackend = burn::backend::Autodiff<InferBackend>;
