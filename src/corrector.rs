//! Word and text correction on top of a [`FrequencyModel`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::candidates::{CandidateSelector, FallbackPolicy};
use crate::config::Config;
use crate::correction::Correction;
use crate::edits::EditGenerator;
use crate::error::Result;
use crate::mapping::WordMapping;
use crate::model::FrequencyModel;
use crate::ranker::Ranker;
use crate::validator::{AcceptNone, WordValidator};

/// `Corrector` proposes the most probable spelling of words and whole texts.
///
/// It owns its model and never mutates it, so one instance can serve many threads.
pub struct Corrector {
    model: FrequencyModel,
    edits: EditGenerator,
    fallback: FallbackPolicy,
    mapping: WordMapping,
    validator: Box<dyn WordValidator>,
}

impl Corrector {
    /// `new` creates a corrector over `model` with no preprocessing mapping and no external
    /// validator.
    ///
    /// The model keeps the n-gram window it was built with; a different `config.ngram_window`
    /// is reported with a warning and otherwise ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::{Config, Corrector, FrequencyModel};
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let model = FrequencyModel::from_text("kass kass koer")?;
    ///     let corrector = Corrector::new(model, Config::default());
    ///     assert_eq!(corrector.correction("kas"), "kass");
    ///     assert_eq!(corrector.correction("koer"), "koer");
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn new(model: FrequencyModel, config: Config) -> Self {
        if config.ngram_window != model.window() {
            log::warn!(
                "Ignoring n-gram window {}, model was built with window {}",
                config.ngram_window,
                model.window()
            );
        }

        Self {
            model,
            edits: EditGenerator::new(config.alphabet),
            fallback: config.fallback,
            mapping: WordMapping::default(),
            validator: Box::new(AcceptNone),
        }
    }

    /// `from_paths` loads the corpus and the word mapping from disk.
    ///
    /// # Errors
    ///
    /// Returns error if either resource cannot be loaded; see [`FrequencyModel::from_path`] and
    /// [`WordMapping::from_path`].
    ///
    /// # Arguments
    ///
    /// * `corpus` - A path to corpus text.
    /// * `mapping` - A path to a `.csv` word mapping.
    /// * `config` - Corrector settings; `config.ngram_window` is used to build the model.
    pub fn from_paths(
        corpus: impl AsRef<Path>,
        mapping: impl AsRef<Path>,
        config: Config,
    ) -> Result<Self> {
        let model = FrequencyModel::from_path_with_window(corpus, config.ngram_window)?;
        let mapping = WordMapping::from_path(mapping)?;
        Ok(Self::new(model, config).with_mapping(mapping))
    }

    /// Replaces the preprocessing mapping.
    #[must_use]
    pub fn with_mapping(mut self, mapping: WordMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Replaces the validator that decides which tokens are already correct.
    #[must_use]
    pub fn with_validator(mut self, validator: impl WordValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// The underlying model.
    #[must_use]
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// The preprocessing mapping.
    #[must_use]
    pub fn mapping(&self) -> &WordMapping {
        &self.mapping
    }

    fn selector(&self) -> CandidateSelector<'_> {
        CandidateSelector::new(&self.model, &self.edits).with_fallback(self.fallback)
    }

    fn ranker(&self) -> Ranker<'_> {
        Ranker::new(&self.model)
    }

    /// Possible corrections for `word`; never empty, `word` itself comes last.
    #[must_use]
    pub fn candidates(&self, word: &str) -> Vec<String> {
        self.selector().candidates(word)
    }

    /// `correction` computes the most probable spelling correction for `word`.
    #[must_use]
    pub fn correction(&self, word: &str) -> String {
        let candidates = self.candidates(word);
        self.ranker()
            .best(&candidates)
            .unwrap_or(word)
            .to_string()
    }

    /// `correction_with_ngrams` computes the most probable correction for `word` following
    /// `previous`.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::{Config, Corrector, FrequencyModel};
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let model = FrequencyModel::from_text("pall pall pall pall punane pilt")?;
    ///     let corrector = Corrector::new(model, Config::default());
    ///     assert_eq!(corrector.correction("palt"), "pall");
    ///     assert_eq!(corrector.correction_with_ngrams("palt", "punane"), "pilt");
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn correction_with_ngrams(&self, word: &str, previous: &str) -> String {
        let candidates = self.candidates(word);
        self.ranker()
            .best_with_context(&candidates, previous)
            .unwrap_or(word)
            .to_string()
    }

    /// Applies the word mapping to `text`.
    #[must_use]
    pub fn preprocess(&self, text: &str) -> String {
        log::debug!("Applying {} word mapping pairs", self.mapping.len());
        self.mapping.apply(text)
    }

    /// `correct_text` corrects every word of `text` but the first, using the corrected previous
    /// word as context.
    ///
    /// Words are lowercased and joined by single spaces in the result. Tokens accepted by the
    /// validator are kept as they are.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to correct.
    /// * `use_preprocessing` - Whether to apply the word mapping first.
    #[must_use]
    pub fn correct_text(&self, text: &str, use_preprocessing: bool) -> Correction {
        let processed = if use_preprocessing {
            self.preprocess(text)
        } else {
            text.to_string()
        };

        let tokens: Vec<String> = self.model.tokenizer().words(&processed).collect();
        log::debug!("Correcting {} tokens", tokens.len());

        let ranker = self.ranker();
        let mut fixed: Vec<String> = Vec::with_capacity(tokens.len());
        let mut candidates = BTreeMap::new();
        for (index, word) in tokens.iter().enumerate() {
            if index == 0 || self.validator.is_valid(&tokens, index) {
                fixed.push(word.clone());
                continue;
            }

            let options = self.candidates(word);
            let corrected = ranker
                .best_with_context(&options, &fixed[index - 1])
                .unwrap_or(word)
                .to_string();
            if corrected != *word {
                log::trace!("Corrected {word:?} to {corrected:?}");
                // the last option is the word itself
                if options.len() > 1 {
                    candidates.insert(word.clone(), options);
                }
            }
            fixed.push(corrected);
        }

        Correction::new(text.to_string(), fixed.join(" "), candidates)
    }
}

impl fmt::Debug for Corrector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Corrector")
            .field("model", &self.model)
            .field("edits", &self.edits)
            .field("fallback", &self.fallback)
            .field("mapping", &self.mapping)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::KnownWords;

    const CORPUS: &str = "ma käisin poes. ma käisin koolis. poes oli palju inimesi. \
                          ma ostsin poest leiba ja piima.";

    fn corrector() -> Corrector {
        Corrector::new(FrequencyModel::from_text(CORPUS).unwrap(), Config::default())
    }

    #[test]
    fn correction_is_deterministic_and_idempotent() {
        let corrector = corrector();
        let first = corrector.correction("kaisin");
        assert_eq!(first, "käisin");
        for _ in 0..5 {
            assert_eq!(corrector.correction("kaisin"), first);
        }
        assert_eq!(corrector.correction("käisin"), "käisin");
    }

    #[test]
    fn known_word_does_not_win_ties_by_repetition() {
        let corrector = Corrector::new(
            FrequencyModel::from_text("kass kast x").unwrap(),
            Config::default(),
        );
        assert_eq!(corrector.candidates("kass"), ["kass", "kast", "kass"]);
        assert_eq!(corrector.correction_with_ngrams("kass", "x"), "kast");
        assert_eq!(corrector.correction("kass"), "kass");
    }

    #[test]
    fn model_window_wins_over_config() {
        let model = FrequencyModel::from_text_with_window(CORPUS, 2).unwrap();
        let corrector = Corrector::new(model, Config::default().ngram_window(3));
        assert_eq!(corrector.model().window(), 2);
    }

    #[test]
    fn unknown_words_fall_back_to_themselves() {
        let corrector = corrector();
        assert_eq!(corrector.correction("zzzzzz"), "zzzzzz");
        assert_eq!(corrector.correction_with_ngrams("zzzzzz", "ma"), "zzzzzz");
    }

    #[test]
    fn corrects_text_with_cascading_context() {
        let corrector = corrector();
        let correction = corrector.correct_text("Ma kaisin poes!", false);
        assert_eq!(correction.original(), "Ma kaisin poes!");
        assert_eq!(correction.corrected(), "ma käisin poes");
        assert_eq!(
            correction.candidates().get("kaisin"),
            Some(&vec!["käisin".to_string(), "kaisin".to_string()])
        );
        assert_eq!(correction.candidates().len(), 1);
    }

    #[test]
    fn first_token_is_never_corrected() {
        let corrector = corrector();
        let correction = corrector.correct_text("kaisin kaisin", false);
        assert_eq!(correction.corrected(), "kaisin käisin");
    }

    #[test]
    fn empty_text() {
        let correction = corrector().correct_text("  !? ", true);
        assert_eq!(correction.corrected(), "");
        assert!(correction.candidates().is_empty());
    }

    #[test]
    fn validator_short_circuits() {
        let corrector = corrector().with_validator(KnownWords::new(["kaisin"]));
        let correction = corrector.correct_text("ma kaisin poes", false);
        assert_eq!(correction.corrected(), "ma kaisin poes");
        assert!(correction.candidates().is_empty());
    }

    #[test]
    fn preprocessing_runs_before_tokenizing() {
        let corrector = corrector().with_mapping(WordMapping::new([("mä käsin", "ma käisin")]));
        assert_eq!(corrector.preprocess("mä käsin poes"), "ma käisin poes");
        let correction = corrector.correct_text("mä käsin poes", true);
        assert_eq!(correction.corrected(), "ma käisin poes");
        assert_eq!(correction.original(), "mä käsin poes");
        assert!(correction.candidates().is_empty());

        let untouched = corrector.correct_text("mä käsin poes", false);
        assert_eq!(untouched.corrected(), "mä käisin poes");
    }

    #[test]
    fn shared_across_threads() {
        let corrector = corrector();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| corrector.correct_text("ma kaisin poes", false)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().corrected(), "ma käisin poes");
            }
        });
    }
}
