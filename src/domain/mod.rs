// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types that describe the reversal task:
//
//   - what a training example is (source, target, shifted target)
//   - how sequences become fixed-shape one-hot buffers and back
//   - how accuracy is tallied and printed
//   - what the decode loop needs from a model (traits)
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, functions and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Typed errors for shape and range violations
pub mod error;

/// Source / target / shifted-target construction
pub mod example;

/// Fixed-shape one-hot buffers and arg-max decoding
pub mod one_hot;

/// Exact-match accuracy tally
pub mod evaluation;

// Abstractions the decode loop is written against
pub mod traits;
