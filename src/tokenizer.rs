//! Word extraction.

use regex::Regex;

use crate::error::Result;

const WORD_PATTERN: &str = r"\w+";

/// `Tokenizer` splits text into lowercase word tokens.
///
/// A token is a maximal run of Unicode word characters, so letters such as `õ` or `ä` stay
/// inside words.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    /// `new` compiles the word pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(WORD_PATTERN)?,
        })
    }

    /// `words` lazily yields the lowercased tokens of `text`.
    ///
    /// Calling it again on the same text restarts the sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::Tokenizer;
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let tokenizer = Tokenizer::new()?;
    ///     let words: Vec<String> = tokenizer.words("Ma käisin poes!").collect();
    ///     assert_eq!(words, ["ma", "käisin", "poes"]);
    ///     Ok(())
    /// }
    /// ```
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
    }

    /// The pattern a token must match.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_diacritics_inside_words() {
        let tokenizer = Tokenizer::new().unwrap();
        let words: Vec<_> = tokenizer.words("Õun, ÄRA söö!").collect();
        assert_eq!(words, ["õun", "ära", "söö"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokenizer.words("").count(), 0);
        assert_eq!(tokenizer.words(" ,.! ").count(), 0);
    }

    #[test]
    fn restartable() {
        let tokenizer = Tokenizer::new().unwrap();
        let text = "kass koer";
        let first: Vec<_> = tokenizer.words(text).collect();
        let second: Vec<_> = tokenizer.words(text).collect();
        assert_eq!(first, second);
        assert_eq!(tokenizer.pattern(), r"\w+");
    }
}
