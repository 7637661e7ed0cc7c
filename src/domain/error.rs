use thiserror::Error;

/// Shape and range violations when building sequences and one-hot buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("category {value} is out of range for cardinality {cardinality}")]
    CategoryOutOfRange { value: usize, cardinality: usize },

    #[error("cardinality must be at least 1")]
    ZeroCardinality,

    #[error("row width {actual} does not match cardinality {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("target length {n_out} exceeds source length {n_in}")]
    TargetTooLong { n_out: usize, n_in: usize },
}
