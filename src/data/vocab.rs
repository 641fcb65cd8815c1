//! Symbol vocabulary shared by all encoders.
//!
//! Maps each distinct symbol to a dense index in `[0, size)`. Encoders
//! shift these by one so that 0 stays free for padding.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{EncodeError, EncodeResult};

/// Symbol-to-index vocabulary.
///
/// Immutable after construction. Share one instance across calls (train and
/// test data, for example) to keep encodings consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<S: Eq + Hash> {
    /// Symbols in index order.
    symbols: Vec<S>,
    /// Reverse mapping from symbol to index.
    symbol_to_idx: HashMap<S, usize>,
}

impl<S: Eq + Hash + Clone + Debug> Vocabulary<S> {
    /// Derive a vocabulary from the distinct symbols of `sequences`.
    ///
    /// Indices are assigned in order of first occurrence, scanning sequences
    /// in order and each sequence left to right.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::EmptyInput`] if `sequences` is empty.
    pub fn build<Q: AsRef<[S]>>(sequences: &[Q]) -> EncodeResult<Self> {
        if sequences.is_empty() {
            return Err(EncodeError::EmptyInput(
                "cannot build a vocabulary from zero sequences".to_string(),
            ));
        }
        let mut symbols = Vec::new();
        let mut symbol_to_idx = HashMap::new();
        for seq in sequences {
            for s in seq.as_ref() {
                if !symbol_to_idx.contains_key(s) {
                    symbol_to_idx.insert(s.clone(), symbols.len());
                    symbols.push(s.clone());
                }
            }
        }
        tracing::debug!(size = symbols.len(), "built vocabulary");
        Ok(Self {
            symbols,
            symbol_to_idx,
        })
    }

    /// Create a vocabulary from an explicit ordered list of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::DuplicateSymbol`] if a symbol repeats.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> EncodeResult<Self> {
        let symbols: Vec<S> = symbols.into_iter().collect();
        let mut symbol_to_idx = HashMap::with_capacity(symbols.len());
        for (i, s) in symbols.iter().enumerate() {
            if symbol_to_idx.insert(s.clone(), i).is_some() {
                return Err(EncodeError::DuplicateSymbol(format!("{s:?}")));
            }
        }
        Ok(Self {
            symbols,
            symbol_to_idx,
        })
    }

    /// Number of symbols in the vocabulary.
    #[must_use]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the index for a symbol, or `None` if not in vocabulary.
    #[must_use]
    pub fn index_of(&self, symbol: &S) -> Option<usize> {
        self.symbol_to_idx.get(symbol).copied()
    }

    /// Get the symbol for an index, or `None` if out of bounds.
    #[must_use]
    pub fn symbol_at(&self, idx: usize) -> Option<&S> {
        self.symbols.get(idx)
    }

    /// Symbols in index order.
    #[must_use]
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Index lookup that reports where an unknown symbol was found.
    pub(crate) fn lookup(&self, symbol: &S, row: usize, position: usize) -> EncodeResult<usize> {
        self.index_of(symbol)
            .ok_or_else(|| EncodeError::UnknownSymbol {
                symbol: format!("{symbol:?}"),
                row,
                position,
            })
    }

    /// Decode a shifted index sequence back to symbols.
    ///
    /// Values are `index + 1`. Padding (0) and values past the vocabulary
    /// (start/end sentinels) are skipped.
    #[must_use]
    pub fn decode(&self, indices: &[usize]) -> Vec<S> {
        indices
            .iter()
            .filter(|&&v| v > 0)
            .filter_map(|&v| self.symbol_at(v - 1).cloned())
            .collect()
    }
}
