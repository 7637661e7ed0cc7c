// ============================================================
// Layer 3 — One-Hot Buffers
// ============================================================
// A category index c over a vocabulary of size C becomes a row
// of C floats with a single 1.0 at position c:
//
//   cardinality = 5, sequence = [3, 1]
//
//     row 0 → [0, 0, 0, 1, 0]
//     row 1 → [0, 1, 0, 0, 0]
//
// Rows are stored back to back in one Vec<f32> so the batcher
// can hand the buffer straight to a tensor constructor without
// re-packing. The shape (len, cardinality) is fixed when the
// buffer is built and never changes afterwards.
//
// Decoding goes the other way with arg-max, which also works
// for soft rows (probability distributions) coming out of the
// model. That is how predictions are turned back into ints.

use crate::domain::error::EncodingError;

/// A row-major `(len, cardinality)` buffer of one-hot (or soft) rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHot {
    data:        Vec<f32>,
    len:         usize,
    cardinality: usize,
}

impl OneHot {
    /// Encode a sequence of category indices.
    ///
    /// Every index must be strictly below `cardinality`.
    pub fn encode(sequence: &[usize], cardinality: usize) -> Result<Self, EncodingError> {
        if cardinality == 0 {
            return Err(EncodingError::ZeroCardinality);
        }

        let mut data = vec![0.0f32; sequence.len() * cardinality];
        for (row, &value) in sequence.iter().enumerate() {
            if value >= cardinality {
                return Err(EncodingError::CategoryOutOfRange { value, cardinality });
            }
            data[row * cardinality + value] = 1.0;
        }

        Ok(Self { data, len: sequence.len(), cardinality })
    }

    /// Build a buffer from arbitrary rows, e.g. model output distributions.
    /// Every row must be exactly `cardinality` wide.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R], cardinality: usize) -> Result<Self, EncodingError> {
        if cardinality == 0 {
            return Err(EncodingError::ZeroCardinality);
        }

        let mut data = Vec::with_capacity(rows.len() * cardinality);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cardinality {
                return Err(EncodingError::ShapeMismatch {
                    expected: cardinality,
                    actual:   row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { data, len: rows.len(), cardinality })
    }

    /// Number of rows (sequence steps)
    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Width of every row
    pub fn cardinality(&self) -> usize { self.cardinality }

    /// `[len, cardinality]`, the shape a single-sample tensor needs
    pub fn shape(&self) -> [usize; 2] { [self.len, self.cardinality] }

    /// The flat row-major data
    pub fn as_slice(&self) -> &[f32] { &self.data }

    /// Iterate over rows in sequence order
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.cardinality)
    }

    /// Arg-max every row back into a category index.
    pub fn decode(&self) -> Vec<usize> {
        one_hot_decode(self.rows())
    }
}

/// Index of the largest component. Ties go to the first occurrence,
/// an empty row decodes to 0.
pub fn argmax(row: &[f32]) -> usize {
    let mut best_index = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (i, &v) in row.iter().enumerate() {
        // strict `>` keeps the earliest maximum
        if v > best_value {
            best_value = v;
            best_index = i;
        }
    }
    best_index
}

/// Decode a sequence of (one-hot or soft) rows into category indices.
pub fn one_hot_decode<I, R>(rows: I) -> Vec<usize>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f32]>,
{
    rows.into_iter().map(|r| argmax(r.as_ref())).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_hot_per_row() {
        let encoded = OneHot::encode(&[3, 1, 4], 6).unwrap();
        assert_eq!(encoded.shape(), [3, 6]);
        for row in encoded.rows() {
            assert_eq!(row.iter().filter(|&&v| v == 1.0).count(), 1);
            assert_eq!(row.iter().filter(|&&v| v == 0.0).count(), 5);
        }
        assert_eq!(encoded.rows().nth(2).unwrap()[4], 1.0);
    }

    #[test]
    fn test_round_trip() {
        let seq = vec![12, 5, 40, 3, 22, 9];
        let encoded = OneHot::encode(&seq, 51).unwrap();
        assert_eq!(encoded.decode(), seq);
        let rows: Vec<&[f32]> = encoded.rows().collect();
        assert_eq!(one_hot_decode(&rows), seq);
    }

    #[test]
    fn test_sentinel_zero_is_a_unit_row() {
        let encoded = OneHot::encode(&[0], 4).unwrap();
        assert_eq!(encoded.as_slice(), &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = OneHot::encode(&[1, 51], 51).unwrap_err();
        assert_eq!(err, EncodingError::CategoryOutOfRange { value: 51, cardinality: 51 });
    }

    #[test]
    fn test_zero_cardinality_rejected() {
        assert_eq!(OneHot::encode(&[], 0).unwrap_err(), EncodingError::ZeroCardinality);
    }

    #[test]
    fn test_from_rows_checks_width() {
        let rows = vec![vec![0.1, 0.9], vec![0.5]];
        let err = OneHot::from_rows(&rows, 2).unwrap_err();
        assert_eq!(err, EncodingError::ShapeMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn test_argmax_ties_pick_first() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4, 0.0]), 1);
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn test_decode_soft_rows() {
        let rows = vec![vec![0.1, 0.7, 0.2], vec![0.6, 0.3, 0.1]];
        assert_eq!(one_hot_decode(&rows), vec![1, 0]);
        let soft = OneHot::from_rows(&rows, 3).unwrap();
        assert_eq!(soft.decode(), vec![1, 0]);
    }

    #[test]
    fn test_empty_sequence() {
        let encoded = OneHot::encode(&[], 3).unwrap();
        assert!(encoded.is_empty());
        assert!(encoded.decode().is_empty());
        assert_eq!(encoded.rows().count(), 0);
    }
}
