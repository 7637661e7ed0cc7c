// ============================================================
// Layer 6 — Predictions Report
// ============================================================
// Plain-text record of decoded predictions, one trial per line:
//
//   X=[12, 5, 40, 3, 22, 9] y=[40, 5, 12], yhat=[40, 5, 12]
//
// X is the decoded source, y the expected target and yhat the
// arg-max of the autoregressive prediction. The file is
// truncated when the report is opened.

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Format one report line (without the trailing newline).
pub fn format_prediction(source: &[usize], target: &[usize], predicted: &[usize]) -> String {
    format!("X={source:?} y={target:?}, yhat={predicted:?}")
}

pub struct PredictionsReport {
    path:   PathBuf,
    writer: BufWriter<File>,
    lines:  usize,
}

impl PredictionsReport {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .with_context(|| format!("Cannot create predictions file '{}'", path.display()))?;
        Ok(Self { path, writer: BufWriter::new(file), lines: 0 })
    }

    pub fn write(&mut self, source: &[usize], target: &[usize], predicted: &[usize]) -> Result<()> {
        writeln!(self.writer, "{}", format_prediction(source, target, predicted))
            .with_context(|| format!("Cannot write to '{}'", self.path.display()))?;
        self.lines += 1;
        Ok(())
    }

    /// Flush and close; returns the number of lines written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .with_context(|| format!("Cannot flush '{}'", self.path.display()))?;
        tracing::debug!("Wrote {} predictions to '{}'", self.lines, self.path.display());
        Ok(self.lines)
    }
}
