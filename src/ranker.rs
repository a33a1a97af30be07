//! Probability-based selection of the best candidate.

use std::collections::HashSet;

use crate::model::FrequencyModel;

/// `Ranker` picks the most probable candidate, optionally taking the previous word into
/// account.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    model: &'a FrequencyModel,
}

impl<'a> Ranker<'a> {
    /// `new` creates a ranker scoring against `model`.
    #[must_use]
    pub fn new(model: &'a FrequencyModel) -> Self {
        Self { model }
    }

    /// Score of `candidate` after `previous`: unigram probability plus bigram bonus.
    #[must_use]
    pub fn score(&self, candidate: &str, previous: &str) -> f64 {
        self.model.probability(candidate) + self.model.bigram_bonus(previous, candidate)
    }

    /// `best` returns the candidate with the highest unigram probability.
    ///
    /// Ties go to the candidate listed first. Returns `None` only for an empty slice.
    #[must_use]
    pub fn best<'c>(&self, candidates: &'c [String]) -> Option<&'c str> {
        let mut best: Option<(&str, f64)> = None;
        for candidate in candidates {
            let p = self.model.probability(candidate);
            if best.map_or(true, |(_, top)| p > top) {
                best = Some((candidate, p));
            }
        }
        best.map(|(word, _)| word)
    }

    /// `best_with_context` returns the candidate with the highest contextual score.
    ///
    /// Repeated candidates count once, at their first position. The remaining candidates are
    /// stably sorted by ascending score and the last one wins, so among equal scores the one
    /// listed later is chosen. Returns `None` only for an empty slice.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::{FrequencyModel, Ranker};
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let model = FrequencyModel::from_text("must kass must kass suur koer suur koer")?;
    ///     let ranker = Ranker::new(&model);
    ///     let candidates = vec!["kass".to_string(), "koer".to_string()];
    ///     assert_eq!(ranker.best_with_context(&candidates, "suur"), Some("koer"));
    ///     assert_eq!(ranker.best_with_context(&candidates, "must"), Some("kass"));
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn best_with_context<'c>(
        &self,
        candidates: &'c [String],
        previous: &str,
    ) -> Option<&'c str> {
        let mut seen = HashSet::with_capacity(candidates.len());
        let mut scored: Vec<(&str, f64)> = candidates
            .iter()
            .filter(|&c| seen.insert(c.as_str()))
            .map(|c| (c.as_str(), self.score(c, previous)))
            .collect();
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));

        let (word, score) = scored.last().copied()?;
        log::trace!("Best candidate after {previous:?} is {word:?} ({score})");
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn picks_most_frequent() {
        let model = FrequencyModel::from_text("kass kass koer").unwrap();
        let ranker = Ranker::new(&model);
        assert_eq!(ranker.best(&owned(&["koer", "kass", "kas"])), Some("kass"));
        assert_eq!(ranker.best(&[]), None);
    }

    #[test]
    fn first_wins_without_context() {
        let model = FrequencyModel::from_text("kass koer").unwrap();
        let ranker = Ranker::new(&model);
        assert_eq!(ranker.best(&owned(&["kass", "koer"])), Some("kass"));
        assert_eq!(ranker.best(&owned(&["koer", "kass"])), Some("koer"));
    }

    #[test]
    fn last_wins_with_context() {
        // equal unigram counts and no pairs after "hiir"
        let model = FrequencyModel::from_text("kass koer hiir").unwrap();
        let ranker = Ranker::new(&model);
        assert_eq!(
            ranker.best_with_context(&owned(&["kass", "koer"]), "hiir"),
            Some("koer")
        );
        assert_eq!(
            ranker.best_with_context(&owned(&["koer", "kass"]), "hiir"),
            Some("kass")
        );
        assert_eq!(ranker.best_with_context(&[], "hiir"), None);
    }

    #[test]
    fn repeated_candidate_keeps_first_position() {
        // "kass" and "kast" both score 1/3 after "x"
        let model = FrequencyModel::from_text("kass kast x").unwrap();
        let ranker = Ranker::new(&model);
        assert_eq!(
            ranker.best_with_context(&owned(&["kass", "kast", "kass"]), "x"),
            Some("kast")
        );
        assert_eq!(
            ranker.best_with_context(&owned(&["kast", "kass", "kast"]), "x"),
            Some("kass")
        );
    }

    #[test]
    fn context_outweighs_frequency() {
        let model = FrequencyModel::from_text("kass kass kass kass suur koer").unwrap();
        let ranker = Ranker::new(&model);
        let candidates = owned(&["kass", "koer"]);
        assert_eq!(ranker.best(&candidates), Some("kass"));
        assert_eq!(ranker.best_with_context(&candidates, "suur"), Some("koer"));
        assert!((ranker.score("koer", "suur") - (1.0 / 6.0 + 1.0)).abs() < 1e-12);
    }
}
