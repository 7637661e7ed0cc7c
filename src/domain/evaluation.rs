use std::fmt;

/// Exact-sequence-match tally over a number of evaluation trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accuracy {
    pub correct: usize,
    pub total:   usize,
}

impl Accuracy {
    /// Count one trial
    pub fn record(&mut self, is_match: bool) {
        self.total += 1;
        if is_match {
            self.correct += 1;
        }
    }

    /// `correct / total * 100`, or 0 when nothing was recorded
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accuracy: {:.2}%", self.percent())
    }
}
