//! # seqenc
//!
//! Encoders that turn variable-length symbol sequences into fixed-shape
//! numeric arrays for sequence models.
//!
//! ## Overview
//!
//! Every encoder takes a list of sequences and an explicit [`Vocabulary`].
//! Symbols map to `index + 1` so that 0 is free for padding.
//!
//! ```text
//! sequences ──► sequences_to_indices ──► padded_indices ──► next_symbol_samples
//!           ├─► onehot
//!           ├─► fofe
//!           └─► bag_of_words
//! ```
//!
//! ## Structure
//!
//! - [`data`] — Vocabulary and next-symbol sample expansion
//! - [`encode`] — Index, padding, one-hot, FOFE and bag-of-words encoders
//! - [`matrix`] — Dense/sparse output storage
//! - [`error`] — Error type shared by all operations

pub mod data;
pub mod encode;
pub mod error;
pub mod matrix;

pub use data::{
    char_sequences, next_symbol_samples, next_symbol_samples_from, Vocabulary, WindowSamples,
};
pub use encode::{
    bag_of_words, document_frequency, fofe, onehot, padded_indices, sequences_to_indices,
    BowConfig, FofeConfig, IndexConfig, IndexSequences, PadConfig, PaddedMatrix, Padding,
};
pub use error::{EncodeError, EncodeResult};
pub use matrix::FeatureMatrix;
