//! Error types for binrank.

use thiserror::Error;

/// Errors that can occur while building bit vectors or ranking a column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Bit widths of two vectors (or of query and column) differ.
    #[error("dimension mismatch: query has {query_bits} bits, column has {column_bits}")]
    DimensionMismatch {
        query_bits: usize,
        column_bits: usize,
    },

    /// Position is outside the valid range of a vector or column.
    #[error("index out of range: position {position}, size {size}")]
    IndexOutOfRange { position: usize, size: usize },

    /// Invalid construction input (malformed packed words, zero-width query).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for ranking operations.
pub type Result<T> = std::result::Result<T, RankError>;
