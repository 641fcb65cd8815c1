//! Bag-of-words count vectors with optional IDF weighting and L1 normalization.

use std::fmt::Debug;
use std::hash::Hash;

use ndarray::Array1;

use crate::data::vocab::Vocabulary;
use crate::error::{EncodeError, EncodeResult};
use crate::matrix::{build_rows, FeatureMatrix};

/// Options for [`bag_of_words`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BowConfig {
    /// Per-cell count ceiling. `None` leaves counts unbounded.
    pub max_count: Option<u32>,
    /// Return CSR storage instead of a dense array.
    pub sparse: bool,
    /// Document frequency per symbol. When set, column `k` is scaled by
    /// `log2(n_sequences / df[k])`.
    pub df: Option<Array1<f64>>,
    /// Divide each row by its sum.
    pub normalize: bool,
}

/// Encode sequences as per-symbol occurrence counts, shape `(n, vocab.size())`.
///
/// Steps per row, in order: clamped counting, IDF weighting, normalization.
///
/// # Errors
///
/// - [`EncodeError::EmptyInput`] if `sequences` is empty.
/// - [`EncodeError::UnknownSymbol`] if a symbol is missing from `vocab`.
/// - [`EncodeError::Dimension`] if `df` does not have one entry per symbol.
/// - [`EncodeError::InvalidConfig`] if a `df` entry is not positive and finite.
/// - [`EncodeError::Normalization`] if `normalize` is set and a row sums to zero.
pub fn bag_of_words<S, Q>(
    sequences: &[Q],
    vocab: &Vocabulary<S>,
    config: &BowConfig,
) -> EncodeResult<FeatureMatrix>
where
    S: Eq + Hash + Clone + Debug,
    Q: AsRef<[S]>,
{
    if sequences.is_empty() {
        return Err(EncodeError::EmptyInput("no sequences to count".to_string()));
    }
    let n_symbols = vocab.size();
    let idf = config
        .df
        .as_ref()
        .map(|df| inverse_document_frequency(df, sequences.len(), n_symbols))
        .transpose()?;
    let ceiling = config.max_count.map_or(f64::INFINITY, f64::from);

    let result = build_rows((sequences.len(), n_symbols), config.sparse, |i, row| {
        for (j, s) in sequences[i].as_ref().iter().enumerate() {
            let k = vocab.lookup(s, i, j)?;
            row[k] = (row[k] + 1.0).min(ceiling);
        }
        if let Some(idf) = &idf {
            for (v, w) in row.iter_mut().zip(idf.iter()) {
                *v *= w;
            }
        }
        if config.normalize {
            let total: f64 = row.iter().sum();
            if total == 0.0 || !total.is_finite() {
                return Err(EncodeError::Normalization { row: i });
            }
            row.iter_mut().for_each(|v| *v /= total);
        }
        Ok(())
    })?;

    tracing::debug!(
        shape = ?result.shape(),
        idf = idf.is_some(),
        normalize = config.normalize,
        sparse = config.sparse,
        "bag-of-words matrix"
    );
    Ok(result)
}

/// Count, for each vocabulary symbol, how many sequences contain it.
///
/// The result can be passed as [`BowConfig::df`].
///
/// # Errors
///
/// - [`EncodeError::EmptyInput`] if `sequences` is empty.
/// - [`EncodeError::UnknownSymbol`] if a symbol is missing from `vocab`.
pub fn document_frequency<S, Q>(
    sequences: &[Q],
    vocab: &Vocabulary<S>,
) -> EncodeResult<Array1<f64>>
where
    S: Eq + Hash + Clone + Debug,
    Q: AsRef<[S]>,
{
    if sequences.is_empty() {
        return Err(EncodeError::EmptyInput("no sequences for document frequency".to_string()));
    }
    let mut df = Array1::zeros(vocab.size());
    let mut seen = vec![false; vocab.size()];
    for (i, seq) in sequences.iter().enumerate() {
        seen.iter_mut().for_each(|v| *v = false);
        for (j, s) in seq.as_ref().iter().enumerate() {
            let k = vocab.lookup(s, i, j)?;
            if !seen[k] {
                seen[k] = true;
                df[k] += 1.0;
            }
        }
    }
    Ok(df)
}

fn inverse_document_frequency(
    df: &Array1<f64>,
    n_docs: usize,
    n_symbols: usize,
) -> EncodeResult<Array1<f64>> {
    if df.len() != n_symbols {
        return Err(EncodeError::Dimension(format!(
            "df has {} entries, vocabulary has {}",
            df.len(),
            n_symbols
        )));
    }
    if let Some((k, &bad)) = df.iter().enumerate().find(|&(_, &v)| !(v.is_finite() && v > 0.0)) {
        return Err(EncodeError::InvalidConfig(format!("df[{k}] must be positive, got {bad}")));
    }
    let n = n_docs as f64;
    Ok(df.mapv(|d| (n / d).log2()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn setup() -> (Vec<Vec<char>>, Vocabulary<char>) {
        let seqs = vec![
            "aaab".chars().collect(),
            "bc".chars().collect(),
            "c".chars().collect(),
            "cab".chars().collect(),
        ];
        let vocab = Vocabulary::from_symbols(vec!['a', 'b', 'c']).unwrap();
        (seqs, vocab)
    }

    #[test]
    fn test_plain_counts() {
        let (seqs, vocab) = setup();
        let m = bag_of_words(&seqs, &vocab, &BowConfig::default())
            .unwrap()
            .to_dense();
        assert_eq!(
            m,
            ndarray::arr2(&[
                [3.0, 1.0, 0.0],
                [0.0, 1.0, 1.0],
                [0.0, 0.0, 1.0],
                [1.0, 1.0, 1.0]
            ])
        );
    }

    #[test]
    fn test_max_count_clamps() {
        let (seqs, vocab) = setup();
        let config = BowConfig {
            max_count: Some(2),
            ..BowConfig::default()
        };
        let m = bag_of_words(&seqs, &vocab, &config).unwrap();
        assert_eq!(m.get(0, 0), Some(2.0));
        assert_eq!(m.get(0, 1), Some(1.0));
    }

    fn two_symbol_setup() -> (Vec<Vec<char>>, Vocabulary<char>) {
        let seqs = vec![
            "aaab".chars().collect(),
            "b".chars().collect(),
            "ab".chars().collect(),
            "bb".chars().collect(),
        ];
        let vocab = Vocabulary::from_symbols(vec!['a', 'b']).unwrap();
        (seqs, vocab)
    }

    #[test]
    fn test_clamp_before_idf() {
        let (seqs, vocab) = two_symbol_setup();
        for sparse in [false, true] {
            // idf = [log2(4/1), log2(4/4)] = [2, 0]
            let config = BowConfig {
                max_count: Some(2),
                sparse,
                df: Some(ndarray::arr1(&[1.0, 4.0])),
                normalize: false,
            };
            let m = bag_of_words(&seqs, &vocab, &config).unwrap();
            assert_eq!(m.is_sparse(), sparse);
            // "aaab": a counts 3, clamped to 2, then weighted to 4
            assert_eq!(
                m.to_dense(),
                ndarray::arr2(&[[4.0, 0.0], [0.0, 0.0], [2.0, 0.0], [0.0, 0.0]])
            );
        }
    }

    #[test]
    fn test_clamp_idf_then_normalize() {
        let (seqs, vocab) = two_symbol_setup();
        for sparse in [false, true] {
            // idf = [log2(4/1), log2(4/2)] = [2, 1]
            let config = BowConfig {
                max_count: Some(2),
                sparse,
                df: Some(ndarray::arr1(&[1.0, 2.0])),
                normalize: true,
            };
            let m = bag_of_words(&seqs, &vocab, &config).unwrap().to_dense();
            // "aaab": [2, 1] -> [4, 1] -> [0.8, 0.2]
            assert_abs_diff_eq!(m[[0, 0]], 0.8, epsilon = 1e-12);
            assert_abs_diff_eq!(m[[0, 1]], 0.2, epsilon = 1e-12);
            // "ab": [1, 1] -> [2, 1] -> [2/3, 1/3]
            assert_abs_diff_eq!(m[[2, 0]], 2.0 / 3.0, epsilon = 1e-12);
            assert_abs_diff_eq!(m[[2, 1]], 1.0 / 3.0, epsilon = 1e-12);
            assert_abs_diff_eq!(m[[3, 1]], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_idf_row_fails_normalization() {
        let (seqs, vocab) = two_symbol_setup();
        for sparse in [false, true] {
            // 'b' occurs in every sequence, so its weight is log2(4/4) = 0
            let config = BowConfig {
                max_count: None,
                sparse,
                df: Some(ndarray::arr1(&[2.0, 4.0])),
                normalize: true,
            };
            assert_eq!(
                bag_of_words(&seqs, &vocab, &config),
                Err(EncodeError::Normalization { row: 1 })
            );
        }
    }

    #[test]
    fn test_document_frequency() {
        let (seqs, vocab) = setup();
        let df = document_frequency(&seqs, &vocab).unwrap();
        assert_eq!(df, ndarray::arr1(&[2.0, 3.0, 3.0]));
    }

    #[test]
    fn test_idf_weighting() {
        let (seqs, vocab) = setup();
        let config = BowConfig {
            df: Some(ndarray::arr1(&[2.0, 4.0, 1.0])),
            ..BowConfig::default()
        };
        let m = bag_of_words(&seqs, &vocab, &config).unwrap().to_dense();
        // log2(4/2) = 1, log2(4/4) = 0, log2(4/1) = 2
        assert_abs_diff_eq!(m[[0, 0]], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m[[0, 1]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m[[3, 2]], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_rows() {
        let (seqs, vocab) = setup();
        let config = BowConfig {
            normalize: true,
            sparse: true,
            ..BowConfig::default()
        };
        let m = bag_of_words(&seqs, &vocab, &config).unwrap();
        assert!(m.is_sparse());
        let dense = m.to_dense();
        for row in dense.rows() {
            assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(dense[[0, 0]], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_row_fails() {
        let (mut seqs, vocab) = setup();
        seqs.push(Vec::new());
        let config = BowConfig {
            normalize: true,
            ..BowConfig::default()
        };
        assert_eq!(
            bag_of_words(&seqs, &vocab, &config),
            Err(EncodeError::Normalization { row: 4 })
        );
    }

    #[test]
    fn test_df_validation() {
        let (seqs, vocab) = setup();
        let short = BowConfig {
            df: Some(ndarray::arr1(&[1.0, 1.0])),
            ..BowConfig::default()
        };
        assert!(matches!(
            bag_of_words(&seqs, &vocab, &short),
            Err(EncodeError::Dimension(_))
        ));
        let zero = BowConfig {
            df: Some(ndarray::arr1(&[1.0, 0.0, 1.0])),
            ..BowConfig::default()
        };
        assert!(matches!(
            bag_of_words(&seqs, &vocab, &zero),
            Err(EncodeError::InvalidConfig(_))
        ));
    }
}
