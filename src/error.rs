//! Error type shared by every encoder.

use thiserror::Error;

/// Error type for encoding operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// Empty sequence collection, or an aggregate (max/len) taken over nothing.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Symbol missing from the vocabulary used for the call.
    #[error("Unknown symbol {symbol} at sequence {row}, position {position}")]
    UnknownSymbol {
        /// `Debug` rendering of the offending symbol.
        symbol: String,
        row: usize,
        position: usize,
    },

    /// Requested or supplied shape is unusable.
    #[error("Dimension error: {0}")]
    Dimension(String),

    /// Row sum was zero during L1 normalization.
    #[error("Cannot normalize row {row}: row sum is zero")]
    Normalization { row: usize },

    /// An index sequence does not fit the requested padded width.
    #[error("Sequence {row} has length {len}, exceeds max_len {max_len}")]
    SequenceTooLong { row: usize, len: usize, max_len: usize },

    /// Out-of-range numeric option.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Same symbol listed twice when building an explicit vocabulary.
    #[error("Duplicate symbol in vocabulary: {0}")]
    DuplicateSymbol(String),
}

pub type EncodeResult<T> = Result<T, EncodeError>;
