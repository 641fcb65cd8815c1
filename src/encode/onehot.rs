//! One-hot tensor encoding of raw symbol sequences.

use std::fmt::Debug;
use std::hash::Hash;

use ndarray::Array3;

use crate::data::vocab::Vocabulary;
use crate::error::{EncodeError, EncodeResult};

/// One-hot encode sequences into a boolean tensor.
///
/// Shape is `(n_sequences, max_len, vocab.size())` where `max_len` is the
/// longest raw sequence (no sentinels). Positions past the end of a shorter
/// sequence are all `false`.
///
/// # Errors
///
/// - [`EncodeError::EmptyInput`] if `sequences` is empty.
/// - [`EncodeError::UnknownSymbol`] if a symbol is missing from `vocab`.
pub fn onehot<S, Q>(sequences: &[Q], vocab: &Vocabulary<S>) -> EncodeResult<Array3<bool>>
where
    S: Eq + Hash + Clone + Debug,
    Q: AsRef<[S]>,
{
    let max_len = sequences
        .iter()
        .map(|seq| seq.as_ref().len())
        .max()
        .ok_or_else(|| EncodeError::EmptyInput("no sequences to one-hot encode".to_string()))?;

    let mut result = Array3::from_elem((sequences.len(), max_len, vocab.size()), false);
    for (i, seq) in sequences.iter().enumerate() {
        for (j, s) in seq.as_ref().iter().enumerate() {
            result[[i, j, vocab.lookup(s, i, j)?]] = true;
        }
    }

    tracing::debug!(shape = ?result.shape(), "one-hot tensor");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{s, Axis};

    #[test]
    fn test_onehot_shape_and_cells() {
        let seqs: Vec<Vec<char>> = vec!["aba".chars().collect(), "c".chars().collect()];
        let vocab = Vocabulary::from_symbols(vec!['a', 'b', 'c']).unwrap();
        let t = onehot(&seqs, &vocab).unwrap();

        assert_eq!(t.shape(), &[2, 3, 3]);
        assert!(t[[0, 0, 0]]);
        assert!(t[[0, 1, 1]]);
        assert!(t[[0, 2, 0]]);
        assert!(t[[1, 0, 2]]);
        // Padding positions of the short row hold no symbol.
        assert!(t.slice(s![1, 1.., ..]).iter().all(|&v| !v));
    }

    #[test]
    fn test_onehot_one_per_position() {
        let seqs: Vec<Vec<char>> = vec!["hello".chars().collect(), "he".chars().collect()];
        let vocab = Vocabulary::build(&seqs).unwrap();
        let t = onehot(&seqs, &vocab).unwrap();
        for (i, sample) in t.axis_iter(Axis(0)).enumerate() {
            let hot = sample.iter().filter(|&&v| v).count();
            assert_eq!(hot, seqs[i].len());
        }
    }

    #[test]
    fn test_onehot_errors() {
        let vocab = Vocabulary::from_symbols(vec!['a']).unwrap();
        let empty: Vec<Vec<char>> = Vec::new();
        assert!(matches!(
            onehot(&empty, &vocab),
            Err(EncodeError::EmptyInput(_))
        ));
        let seqs: Vec<Vec<char>> = vec!["ab".chars().collect()];
        assert!(matches!(
            onehot(&seqs, &vocab),
            Err(EncodeError::UnknownSymbol { row: 0, position: 1, .. })
        ));
    }
}
