// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between "random integers" and tensor batches:
//
//   generator   → random sources, reversed targets, one-hot
//       │
//       ▼
//   ReversalDataset  → implements Burn's Dataset trait
//       │
//       ▼
//   Seq2SeqBatcher   → stacks examples into tensor batches
//       │
//       ▼
//   DataLoader       → feeds (shuffled) batches to the trainer
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Random sequence and example generation
pub mod generator;

/// Implements Burn's Dataset trait for reversal examples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
