//! Unigram and bigram statistics built from a reference corpus.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;

/// `FrequencyModel` holds word counts and word-pair scores of a corpus.
///
/// The model is built once and never mutated afterwards, so a shared reference can be queried
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    vocabulary: HashMap<String, u32>,
    /// previous word -> word -> pair count / count(previous)
    bigrams: HashMap<String, HashMap<String, f64>>,
    total: u64,
    pairs: usize,
    window: usize,
    tokenizer: Tokenizer,
}

impl FrequencyModel {
    /// `from_text` builds a model from corpus text, pairing adjacent words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCorpus`] if `text` contains no words.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::FrequencyModel;
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let model = FrequencyModel::from_text("kass kass koer")?;
    ///     assert_eq!(model.count("kass"), 2);
    ///     assert_eq!(model.total(), 3);
    ///     assert!((model.probability("koer") - 1.0 / 3.0).abs() < f64::EPSILON);
    ///     Ok(())
    /// }
    /// ```
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_text_with_window(text, 1)
    }

    /// `from_text_with_window` builds a model from corpus text, pairing every word with each of
    /// the next `window` words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] if `window` is zero and [`Error::EmptyCorpus`] if `text`
    /// contains no words.
    ///
    /// # Arguments
    ///
    /// * `text` - Corpus text.
    /// * `window` - How many following words each word is paired with.
    pub fn from_text_with_window(text: &str, window: usize) -> Result<Self> {
        if window == 0 {
            return Err(Error::InvalidWindow(window));
        }

        let tokenizer = Tokenizer::new()?;
        let tokens: Vec<String> = tokenizer.words(text).collect();
        if tokens.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut vocabulary: HashMap<String, u32> = HashMap::new();
        for token in &tokens {
            *vocabulary.entry(token.clone()).or_insert(0) += 1;
        }

        let mut pair_counts: HashMap<&str, HashMap<&str, u32>> = HashMap::new();
        for (i, first) in tokens.iter().enumerate() {
            for second in tokens.iter().skip(i + 1).take(window) {
                *pair_counts
                    .entry(first.as_str())
                    .or_default()
                    .entry(second.as_str())
                    .or_insert(0) += 1;
            }
        }

        let pairs = pair_counts.values().map(HashMap::len).sum();
        let bigrams = pair_counts
            .into_iter()
            .filter_map(|(first, followers)| {
                let base = f64::from(*vocabulary.get(first)?);
                let scores = followers
                    .into_iter()
                    .map(|(second, count)| (second.to_string(), f64::from(count) / base))
                    .collect();
                Some((first.to_string(), scores))
            })
            .collect();

        let total = vocabulary.values().map(|&c| u64::from(c)).sum();

        let model = Self {
            vocabulary,
            bigrams,
            total,
            pairs,
            window,
            tokenizer,
        };
        log::debug!(
            "Built frequency model: {} words, {} tokens, {} word pairs",
            model.len(),
            model.total,
            model.pairs
        );
        Ok(model)
    }

    /// `from_reader` reads a whole corpus stream and builds a model from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the stream cannot be read as UTF-8 and [`Error::EmptyCorpus`]
    /// if it contains no words.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_reader_with_window(reader, 1)
    }

    /// Like [`FrequencyModel::from_reader`] with a custom n-gram window.
    ///
    /// # Errors
    ///
    /// See [`FrequencyModel::from_reader`] and [`FrequencyModel::from_text_with_window`].
    pub fn from_reader_with_window(mut reader: impl Read, window: usize) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text_with_window(&text, window)
    }

    /// `from_path` loads a corpus file and builds a model from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resource`] if the file cannot be read and [`Error::EmptyCorpus`] if it
    /// contains no words.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with_window(path, 1)
    }

    /// Like [`FrequencyModel::from_path`] with a custom n-gram window.
    ///
    /// # Errors
    ///
    /// See [`FrequencyModel::from_path`] and [`FrequencyModel::from_text_with_window`].
    pub fn from_path_with_window(path: impl AsRef<Path>, window: usize) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading corpus from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| Error::resource(path, e))?;
        Self::from_text_with_window(&text, window)
    }

    /// `probability` computes the unigram probability of `word`.
    ///
    /// Words that never occur in the corpus have probability zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn probability(&self, word: &str) -> f64 {
        f64::from(self.count(word)) / self.total as f64
    }

    /// `bigram_bonus` returns the score of `word` following `previous`, or zero if the pair
    /// never occurs.
    #[must_use]
    pub fn bigram_bonus(&self, previous: &str, word: &str) -> f64 {
        self.bigrams
            .get(previous)
            .and_then(|followers| followers.get(word))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether `word` occurs in the corpus.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains_key(word)
    }

    /// Number of occurrences of `word`.
    #[must_use]
    pub fn count(&self, word: &str) -> u32 {
        self.vocabulary.get(word).copied().unwrap_or(0)
    }

    /// Total number of tokens in the corpus.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether the vocabulary is empty. A successfully built model never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Number of distinct word pairs.
    #[must_use]
    pub fn bigram_count(&self) -> usize {
        self.pairs
    }

    /// The n-gram window the model was built with.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// The tokenizer the corpus was split with.
    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Iterates over the vocabulary in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.keys().map(String::as_str)
    }
}
