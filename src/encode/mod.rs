//! Sequence encoders.
//!
//! Each encoder is an independent function over a list of sequences and a
//! caller-supplied [`Vocabulary`](crate::Vocabulary). Output row `i` always
//! corresponds to input sequence `i`.
//!
//! - [`indices`] — Index sequences with start/end sentinels, padded matrices
//! - [`onehot`] — Boolean `(sample, position, symbol)` tensors
//! - [`fofe`] — Exponentially decayed bag vectors
//! - [`bow`] — Count vectors with IDF weighting and normalization

pub mod bow;
pub mod fofe;
pub mod indices;
pub mod onehot;

pub use bow::{bag_of_words, document_frequency, BowConfig};
pub use fofe::{fofe, FofeConfig};
pub use indices::{
    padded_indices, sequences_to_indices, IndexConfig, IndexSequences, PadConfig, PaddedMatrix,
    Padding,
};
pub use onehot::onehot;
