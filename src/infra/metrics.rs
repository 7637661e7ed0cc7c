// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records training metrics to a CSV file after each epoch.
//
// Metrics recorded per epoch:
//   - epoch:    the epoch number (1, 2, 3, ...)
//   - loss:     mean cross-entropy over all training batches
//   - accuracy: fraction of output tokens whose arg-max matches
//               the label under teacher forcing
//
// Example CSV output:
//   epoch,loss,accuracy
//   1,3.412000,0.081000
//   2,2.655100,0.214300
//   ...
//
// Token accuracy under teacher forcing is always higher than
// the exact-match accuracy reported after autoregressive
// decoding, since one wrong token there ruins the sequence.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use serde::{Deserialize, Serialize};

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Mean cross-entropy loss over all training batches.
    /// Random initialisation gives ~ln(cardinality)
    pub loss: f64,

    /// Per-token accuracy in [0.0, 1.0]
    pub accuracy: f64,
}

impl EpochMetrics {
    pub fn new(epoch: usize, loss: f64, accuracy: f64) -> Self {
        Self { epoch, loss, accuracy }
    }

    /// Returns true if this epoch improved over the previous best loss
    pub fn is_improvement(&self, best_loss: f64) -> bool {
        self.loss < best_loss
    }
}

/// Appends epoch metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet, so
    /// repeated runs append to one log.
    pub fn new(csv_path: impl AsRef<Path>) -> Result<Self> {
        let csv_path = csv_path.as_ref().to_path_buf();

        if let Some(parent) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create metrics CSV '{}'", csv_path.display()))?;
            writeln!(f, "epoch,loss,accuracy")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new row.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open metrics CSV '{}'", self.csv_path.display()))?;

        writeln!(f, "{},{:.6},{:.6}", m.epoch, m.loss, m.accuracy)?;

        tracing::debug!(
            "Logged epoch {} metrics: loss={:.4}, accuracy={:.4}",
            m.epoch, m.loss, m.accuracy,
        );
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_improvement() {
        let m = EpochMetrics::new(2, 2.3, 0.2);
        assert!(m.is_improvement(3.0));
        assert!(!m.is_improvement(2.0));
    }

    #[test]
    fn test_header_then_rows() {
        let dir    = tempfile::tempdir().unwrap();
        let path   = dir.path().join("runs").join("metrics.csv");
        let logger = MetricsLogger::new(&path).unwrap();

        logger.log(&EpochMetrics::new(1, 3.5, 0.1)).unwrap();
        logger.log(&EpochMetrics::new(2, 2.25, 0.375)).unwrap();

        let text = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "epoch,loss,accuracy",
            "1,3.500000,0.100000",
            "2,2.250000,0.375000",
        ]);
    }

    #[test]
    fn test_existing_file_is_appended() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");

        MetricsLogger::new(&path).unwrap().log(&EpochMetrics::new(1, 1.0, 0.5)).unwrap();
        MetricsLogger::new(&path).unwrap().log(&EpochMetrics::new(1, 0.9, 0.6)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("epoch")).count(), 1);
        assert_eq!(text.lines().count(), 3);
    }
}
