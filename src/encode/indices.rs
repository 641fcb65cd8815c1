//! Integer index sequences and padded index matrices.
//!
//! Every symbol becomes `vocab index + 1`; 0 is reserved for padding. Start
//! and end sentinels sit above the largest value seen in the whole call, so
//! they are identical across rows.

use std::fmt::Debug;
use std::hash::Hash;

use ndarray::{s, Array2, ArrayD, ArrayView1, Axis};

use crate::data::vocab::Vocabulary;
use crate::error::{EncodeError, EncodeResult};

/// Sentinel options for [`sequences_to_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Prepend the start sentinel to every sequence.
    pub add_start: bool,
    /// Append the end sentinel to every sequence.
    pub add_end: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            add_start: true,
            add_end: true,
        }
    }
}

/// Encoded index sequences plus the sentinel values assigned by the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSequences {
    pub rows: Vec<Vec<usize>>,
    /// Start sentinel value, if one was added.
    pub start: Option<usize>,
    /// End sentinel value, if one was added.
    pub end: Option<usize>,
    max_value: usize,
}

impl IndexSequences {
    /// Largest value in any row, sentinels included.
    #[must_use]
    pub fn max_value(&self) -> usize {
        self.max_value
    }

    /// Length of the longest row.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Encode sequences of symbols as sequences of integer indices starting from 1.
///
/// When both sentinels are requested the start value is assigned first, so
/// `end == start + 1`.
///
/// # Errors
///
/// - [`EncodeError::EmptyInput`] if `sequences` is empty or any sequence is empty.
/// - [`EncodeError::UnknownSymbol`] if a symbol is missing from `vocab`.
pub fn sequences_to_indices<S, Q>(
    sequences: &[Q],
    vocab: &Vocabulary<S>,
    config: &IndexConfig,
) -> EncodeResult<IndexSequences>
where
    S: Eq + Hash + Clone + Debug,
    Q: AsRef<[S]>,
{
    if sequences.is_empty() {
        return Err(EncodeError::EmptyInput("no sequences to encode".to_string()));
    }

    let mut rows = Vec::with_capacity(sequences.len());
    let mut max_value = 0;
    for (i, seq) in sequences.iter().enumerate() {
        let seq = seq.as_ref();
        if seq.is_empty() {
            return Err(EncodeError::EmptyInput(format!("sequence {i} is empty")));
        }
        // Room for both sentinels up front.
        let mut row = Vec::with_capacity(seq.len() + 2);
        for (j, s) in seq.iter().enumerate() {
            let v = vocab.lookup(s, i, j)? + 1;
            max_value = max_value.max(v);
            row.push(v);
        }
        rows.push(row);
    }

    let mut start = None;
    let mut end = None;
    if config.add_start {
        max_value += 1;
        start = Some(max_value);
        for row in &mut rows {
            row.insert(0, max_value);
        }
    }
    if config.add_end {
        max_value += 1;
        end = Some(max_value);
        for row in &mut rows {
            row.push(max_value);
        }
    }

    tracing::debug!(n = rows.len(), max_value, ?start, ?end, "encoded index sequences");
    Ok(IndexSequences {
        rows,
        start,
        end,
        max_value,
    })
}

/// Which side of a row receives the zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Zeros before the data; rows are right-aligned.
    Pre,
    /// Zeros after the data; rows are left-aligned.
    #[default]
    Post,
}

/// Options for [`padded_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadConfig {
    /// Output rank, at least 2. Extra dimensions are trailing singletons.
    pub ndim: usize,
    pub padding: Padding,
    pub add_start: bool,
    pub add_end: bool,
    /// Fixed row width. `None` uses the longest encoded row.
    pub max_len: Option<usize>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            ndim: 2,
            padding: Padding::Post,
            add_start: true,
            add_end: true,
            max_len: None,
        }
    }
}

/// Zero-padded index matrix together with the side it was padded on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMatrix {
    /// Shape `(n_sequences, max_len)`.
    pub values: Array2<usize>,
    pub padding: Padding,
    /// Requested output rank; dims past the second are singletons.
    pub ndim: usize,
}

impl PaddedMatrix {
    /// Number of rows (sequences).
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    /// Row width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    /// Full shape including trailing singleton dimensions.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = vec![self.nrows(), self.width()];
        shape.resize(self.ndim, 1);
        shape
    }

    /// Copy with the trailing singleton dimensions of rank `ndim`.
    #[must_use]
    pub fn to_array(&self) -> ArrayD<usize> {
        let mut out = self.values.clone().into_dyn();
        while out.ndim() < self.ndim {
            let axis = Axis(out.ndim());
            out = out.insert_axis(axis);
        }
        out
    }
}

/// Encode sequences as indices and pad them into a rectangular matrix.
///
/// # Errors
///
/// - [`EncodeError::Dimension`] if `config.ndim < 2`.
/// - [`EncodeError::SequenceTooLong`] if an encoded row exceeds `config.max_len`.
/// - Any error from [`sequences_to_indices`].
pub fn padded_indices<S, Q>(
    sequences: &[Q],
    vocab: &Vocabulary<S>,
    config: &PadConfig,
) -> EncodeResult<PaddedMatrix>
where
    S: Eq + Hash + Clone + Debug,
    Q: AsRef<[S]>,
{
    if config.ndim < 2 {
        return Err(EncodeError::Dimension(format!(
            "padded output must have at least 2 dims, got {}",
            config.ndim
        )));
    }

    let encoded = sequences_to_indices(
        sequences,
        vocab,
        &IndexConfig {
            add_start: config.add_start,
            add_end: config.add_end,
        },
    )?;

    let max_len = config.max_len.unwrap_or_else(|| encoded.max_len());
    let mut values = Array2::<usize>::zeros((encoded.len(), max_len));
    for (i, row) in encoded.rows.iter().enumerate() {
        let len = row.len();
        if len > max_len {
            return Err(EncodeError::SequenceTooLong { row: i, len, max_len });
        }
        let offset = match config.padding {
            Padding::Post => 0,
            Padding::Pre => max_len - len,
        };
        values
            .row_mut(i)
            .slice_mut(s![offset..offset + len])
            .assign(&ArrayView1::from(row.as_slice()));
    }

    let out = PaddedMatrix {
        values,
        padding: config.padding,
        ndim: config.ndim,
    };
    tracing::debug!(shape = ?out.shape(), padding = ?out.padding, "padded index matrix");
    Ok(out)
}
