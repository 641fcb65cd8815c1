//! Vocabulary management and training-sample preparation.
//!
//! ## Submodules
//!
//! - [`vocab`] — Symbol vocabulary shared by every encoder
//! - [`samples`] — Padded-matrix to next-symbol sample expansion

pub mod samples;
pub mod vocab;

pub use samples::{next_symbol_samples, next_symbol_samples_from, WindowSamples};
pub use vocab::Vocabulary;

/// Split strings into character sequences.
#[must_use]
pub fn char_sequences<T: AsRef<str>>(texts: &[T]) -> Vec<Vec<char>> {
    texts.iter().map(|t| t.as_ref().chars().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_sequences() {
        let seqs = char_sequences(&["ab", "", "héllo"]);
        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[0], vec!['a', 'b']);
        assert!(seqs[1].is_empty());
        assert_eq!(seqs[2].len(), 5);
    }
}
