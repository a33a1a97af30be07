//! Vocabulary-filtered candidate lists.

use std::collections::BTreeSet;

use crate::edits::EditGenerator;
use crate::model::FrequencyModel;

/// What to do when no distance-1 edit of a word is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Offer only the word itself.
    #[default]
    None,
    /// Try known distance-2 edits before giving up.
    DistanceTwo,
}

/// `CandidateSelector` proposes vocabulary words near a queried word.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSelector<'a> {
    model: &'a FrequencyModel,
    edits: &'a EditGenerator,
    fallback: FallbackPolicy,
}

impl<'a> CandidateSelector<'a> {
    /// `new` creates a selector over `model` using `edits` to generate variants.
    #[must_use]
    pub fn new(model: &'a FrequencyModel, edits: &'a EditGenerator) -> Self {
        Self {
            model,
            edits,
            fallback: FallbackPolicy::None,
        }
    }

    /// Sets the fallback used when no distance-1 edit is known.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// `known` computes the subset of `words` that appear in the vocabulary, sorted and
    /// deduplicated.
    #[must_use]
    pub fn known(&self, words: impl IntoIterator<Item = String>) -> Vec<String> {
        words
            .into_iter()
            .filter(|word| self.model.contains(word))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Known edits of `word`, without the word itself appended.
    #[must_use]
    pub fn known_candidates(&self, word: &str) -> Vec<String> {
        let k1 = self.known(self.edits.edits_at_distance_1(word));
        if !k1.is_empty() || self.fallback == FallbackPolicy::None {
            return k1;
        }

        self.known(self.edits.edits_at_distance_2(word))
    }

    /// `candidates` generates possible spelling corrections for `word`.
    ///
    /// The list holds the known edits in lexicographic order followed by `word` itself, so it is
    /// never empty. `word` may appear twice when it is also a known edit of itself.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::{Alphabet, CandidateSelector, EditGenerator, FrequencyModel};
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let model = FrequencyModel::from_text("kass kass koer")?;
    ///     let edits = EditGenerator::new(Alphabet::estonian());
    ///     let selector = CandidateSelector::new(&model, &edits);
    ///     assert_eq!(selector.candidates("kas"), ["kass", "kas"]);
    ///     assert_eq!(selector.candidates("xyz"), ["xyz"]);
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn candidates(&self, word: &str) -> Vec<String> {
        let mut candidates = self.known_candidates(word);
        candidates.push(word.to_string());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    fn model() -> FrequencyModel {
        FrequencyModel::from_text("kass koer kassi kaas kõik").unwrap()
    }

    #[test]
    fn always_contains_the_word() {
        let model = model();
        let edits = EditGenerator::new(Alphabet::estonian());
        let selector = CandidateSelector::new(&model, &edits);
        for word in ["", "kas", "koer", "qqqqqq", "ööö"] {
            let candidates = selector.candidates(word);
            assert!(!candidates.is_empty());
            assert_eq!(candidates.last().map(String::as_str), Some(word));
        }
    }

    #[test]
    fn known_edits_are_sorted() {
        let model = model();
        let edits = EditGenerator::new(Alphabet::estonian());
        let selector = CandidateSelector::new(&model, &edits);
        assert_eq!(selector.candidates("kass"), ["kaas", "kass", "kassi", "kass"]);
    }

    #[test]
    fn distance_two_fallback() {
        let model = model();
        let edits = EditGenerator::new(Alphabet::estonian());
        let plain = CandidateSelector::new(&model, &edits);
        assert_eq!(plain.candidates("kõikkk"), ["kõikkk"]);

        let fallback = plain.with_fallback(FallbackPolicy::DistanceTwo);
        assert_eq!(fallback.candidates("kõikkk"), ["kõik", "kõikkk"]);
        // distance-1 hits win over the fallback
        assert_eq!(fallback.candidates("koe"), ["koer", "koe"]);
    }
}
