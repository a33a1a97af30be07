//! The result of correcting a text.

use std::collections::BTreeMap;
use std::fmt;

/// A token whose cleaned form changed during correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// The token before correction, without punctuation
    pub original: String,
    /// The token after correction, without punctuation
    pub corrected: String,
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Original: {} - Corrected: {}", self.original, self.corrected)
    }
}

/// `Correction` holds an input text, its corrected form and the candidates considered for every
/// changed word.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    original: String,
    corrected: String,
    candidates: BTreeMap<String, Vec<String>>,
}

impl Correction {
    pub(crate) fn new(
        original: String,
        corrected: String,
        candidates: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            original,
            corrected,
            candidates,
        }
    }

    /// The text as given by the caller.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The corrected text, tokens joined by single spaces.
    #[must_use]
    pub fn corrected(&self) -> &str {
        &self.corrected
    }

    /// Changed words mapped to the candidates that were considered for them.
    #[must_use]
    pub fn candidates(&self) -> &BTreeMap<String, Vec<String>> {
        &self.candidates
    }

    /// `corrected_tokens` pairs up space-separated tokens of the original and the corrected text
    /// by position and reports those whose punctuation-free, case-insensitive forms differ.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::{Corrector, FrequencyModel, Config};
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let model = FrequencyModel::from_text("ma käisin poes ma käisin poes")?;
    ///     let corrector = Corrector::new(model, Config::default());
    ///     let correction = corrector.correct_text("Ma kaisin poes!", false);
    ///     let pairs = correction.corrected_tokens();
    ///     assert_eq!(pairs.len(), 1);
    ///     assert_eq!(pairs[0].to_string(), "Original: kaisin - Corrected: käisin");
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn corrected_tokens(&self) -> Vec<TokenPair> {
        self.original
            .split(' ')
            .zip(self.corrected.split(' '))
            .map(|(o, c)| (clean_token(o), clean_token(c)))
            .filter(|(o, c)| o.to_lowercase() != c.to_lowercase())
            .map(|(original, corrected)| TokenPair {
                original,
                corrected,
            })
            .collect()
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.corrected)
    }
}

fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .trim()
        .to_string()
}
