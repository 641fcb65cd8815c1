//! Fixed-size Ordinally-Forgetting Encoding (FOFE).
//!
//! Each sequence collapses into one vector of length `vocab.size()`. A symbol
//! at position `j` of a length-`l` sequence adds `alpha^(l-j-1)` to its
//! column, so the most recent symbol weighs 1 and older ones fade:
//!
//! ```text
//! z_t = alpha * z_{t-1} + e(s_t)
//! ```
//!
//! The bidirectional form appends a second block read from the other end,
//! adding `alpha^j` instead.

use std::fmt::Debug;
use std::hash::Hash;

use crate::data::vocab::Vocabulary;
use crate::error::{EncodeError, EncodeResult};
use crate::matrix::{build_rows, FeatureMatrix};

/// Options for [`fofe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FofeConfig {
    /// Forgetting factor in `(0, 1]`. 1 reduces FOFE to plain counts.
    pub alpha: f64,
    /// Append a backward pass block, doubling the output width.
    pub bidirectional: bool,
    /// Return CSR storage instead of a dense array.
    pub sparse: bool,
}

impl Default for FofeConfig {
    fn default() -> Self {
        Self {
            alpha: 0.7,
            bidirectional: false,
            sparse: false,
        }
    }
}

/// FOFE-encode sequences into a `(n, size)` or `(n, 2 * size)` matrix.
///
/// # Errors
///
/// - [`EncodeError::InvalidConfig`] if `alpha` is not a finite value in `(0, 1]`.
/// - [`EncodeError::EmptyInput`] if `sequences` is empty.
/// - [`EncodeError::UnknownSymbol`] if a symbol is missing from `vocab`.
pub fn fofe<S, Q>(
    sequences: &[Q],
    vocab: &Vocabulary<S>,
    config: &FofeConfig,
) -> EncodeResult<FeatureMatrix>
where
    S: Eq + Hash + Clone + Debug,
    Q: AsRef<[S]>,
{
    let alpha = config.alpha;
    if !(alpha.is_finite() && alpha > 0.0 && alpha <= 1.0) {
        return Err(EncodeError::InvalidConfig(format!("alpha must be in (0, 1], got {alpha}")));
    }
    if sequences.is_empty() {
        return Err(EncodeError::EmptyInput("no sequences to FOFE encode".to_string()));
    }

    let n_symbols = vocab.size();
    let width = if config.bidirectional {
        2 * n_symbols
    } else {
        n_symbols
    };

    let result = build_rows((sequences.len(), width), config.sparse, |i, row| {
        let seq = sequences[i].as_ref();
        let l = seq.len();
        for (j, s) in seq.iter().enumerate() {
            let k = vocab.lookup(s, i, j)?;
            row[k] += decay(alpha, l - j - 1);
            if config.bidirectional {
                row[n_symbols + k] += decay(alpha, j);
            }
        }
        Ok(())
    })?;

    tracing::debug!(shape = ?result.shape(), alpha, sparse = config.sparse, "FOFE matrix");
    Ok(result)
}

#[inline]
fn decay(alpha: f64, steps: usize) -> f64 {
    alpha.powf(steps as f64)
}
