// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// The two files a run leaves behind:
//
//   metrics.rs : per-epoch loss / token accuracy, appended to
//                an optional CSV for plotting learning curves.
//
//   report.rs  : predictions.txt, one decoded trial per line,
//                for eyeballing what the model gets wrong.
//
// Nothing else touches the filesystem. Model weights live only
// in memory for the duration of the run.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Training metrics CSV logger
pub mod metrics;

/// Plain-text predictions report
pub mod report;
