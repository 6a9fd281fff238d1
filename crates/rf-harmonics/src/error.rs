//! Error types for harmonic lookups

use thiserror::Error;

/// Harmonic error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarmonicError {
    /// (degree, order) pair is not a harmonic of the dimension
    #[error("No {dimension} harmonic with degree {degree} and order {order}")]
    OrderOutOfRange {
        dimension: &'static str,
        degree: usize,
        order: i64,
    },

    /// Serialized harmonic whose degree/order disagree with its index
    #[error("Inconsistent harmonic record: index {index} is not degree {degree} order {order}")]
    InconsistentRecord {
        index: usize,
        degree: usize,
        order: i64,
    },
}

/// Result type for harmonic operations
pub type HarmonicResult<T> = Result<T, HarmonicError>;
