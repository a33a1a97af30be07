//! Corrector settings.

use crate::alphabet::Alphabet;
use crate::candidates::FallbackPolicy;

/// Where the reference corpus is usually found.
pub const DEFAULT_CORPUS_PATH: &str = "texts/training_texts/norvig_corpus.txt";

/// Where the preprocessing word mapping is usually found.
pub const DEFAULT_MAPPING_PATH: &str = "texts/training_texts/word_mapping.csv";

/// `Config` tunes how a [`Corrector`](crate::Corrector) generates and ranks candidates.
///
/// # Example
///
/// ```
/// use ngram_spell::{Alphabet, Config, FallbackPolicy};
///
/// let config = Config::default()
///     .alphabet(Alphabet::latin())
///     .ngram_window(2)
///     .fallback(FallbackPolicy::DistanceTwo);
/// assert_eq!(config.ngram_window, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Letters used for substitutions and insertions
    pub alphabet: Alphabet,
    /// How many following words each corpus word is paired with
    pub ngram_window: usize,
    /// What to do when no distance-1 edit is known
    pub fallback: FallbackPolicy,
}

impl Config {
    /// Sets the alphabet.
    #[must_use]
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the n-gram window used when building a model from a path.
    #[must_use]
    pub fn ngram_window(mut self, window: usize) -> Self {
        self.ngram_window = window;
        self
    }

    /// Sets the candidate fallback.
    #[must_use]
    pub fn fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::estonian(),
            ngram_window: 1,
            fallback: FallbackPolicy::None,
        }
    }
}
