// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to run an
// experiment end to end.
//
// Rules for this layer:
//   - No ML math or model code here
//   - No console printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// Config + the training workflow
pub mod train_use_case;

// Accuracy and predictions report on fresh samples
pub mod evaluate_use_case;
