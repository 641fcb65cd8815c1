//! Next-symbol training pairs from padded index matrices.
//!
//! A row with `k` non-padding values yields `k - 1` samples: every prefix of
//! length `1..k` as context, with the value right after it as the target.
//! Contexts keep the padding side of the source matrix.

use ndarray::{Array1, Array2, ArrayView2};

use crate::encode::indices::{PaddedMatrix, Padding};
use crate::error::{EncodeError, EncodeResult};

/// Context/target pairs for next-symbol prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSamples {
    /// Shape `(n_samples, width - 1)`, zero-padded on the source's padding side.
    pub contexts: Array2<usize>,
    /// Shape `(n_samples)`, the value following each context.
    pub targets: Array1<usize>,
}

impl WindowSamples {
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Expand a padded matrix using the padding recorded on it.
///
/// # Errors
///
/// See [`next_symbol_samples`].
pub fn next_symbol_samples_from(matrix: &PaddedMatrix) -> EncodeResult<WindowSamples> {
    next_symbol_samples(matrix.values.view(), matrix.padding)
}

/// Expand each row of a padded index matrix into next-symbol samples.
///
/// Samples are ordered by source row, then by increasing context length.
///
/// # Errors
///
/// Returns [`EncodeError::EmptyInput`] if the matrix has no rows, is narrower
/// than 2 columns, or no row holds at least 2 non-padding values.
pub fn next_symbol_samples(
    matrix: ArrayView2<'_, usize>,
    padding: Padding,
) -> EncodeResult<WindowSamples> {
    let (n_rows, d) = matrix.dim();
    if n_rows == 0 || d < 2 {
        return Err(EncodeError::EmptyInput(format!("cannot expand a {n_rows}x{d} matrix")));
    }
    let width = d - 1;

    // Non-padding values of each row, in order
    let rows: Vec<Vec<usize>> = matrix
        .rows()
        .into_iter()
        .map(|row| row.iter().copied().filter(|&v| v > 0).collect())
        .collect();

    let n_samples: usize = rows.iter().map(|r| r.len().saturating_sub(1)).sum();
    if n_samples == 0 {
        return Err(EncodeError::EmptyInput("no row has at least 2 non-padding values".to_string()));
    }

    let mut contexts = Array2::zeros((n_samples, width));
    let mut targets = Array1::zeros(n_samples);

    let mut sample_idx = 0;
    for values in &rows {
        for j in 1..values.len() {
            let offset = match padding {
                Padding::Post => 0,
                Padding::Pre => width - j,
            };
            for (p, &v) in values[..j].iter().enumerate() {
                contexts[[sample_idx, offset + p]] = v;
            }
            targets[sample_idx] = values[j];
            sample_idx += 1;
        }
    }

    tracing::debug!(rows = n_rows, samples = n_samples, ?padding, "expanded next-symbol samples");
    Ok(WindowSamples { contexts, targets })
}
