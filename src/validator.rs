//! External judgments of whether a token is already spelled correctly.

use std::collections::HashSet;

/// `WordValidator` marks tokens that must be left alone during text correction.
///
/// `tokens` is the whole tokenized text so that implementations can look at context.
pub trait WordValidator: Send + Sync {
    /// Whether `tokens[index]` is already correct.
    fn is_valid(&self, tokens: &[String], index: usize) -> bool;
}

/// Accepts no token, so every token goes through the ranker.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptNone;

impl WordValidator for AcceptNone {
    fn is_valid(&self, _tokens: &[String], _index: usize) -> bool {
        false
    }
}

/// Accepts tokens from a fixed word list.
#[derive(Debug, Clone, Default)]
pub struct KnownWords {
    words: HashSet<String>,
}

impl KnownWords {
    /// Creates a validator accepting `words`, compared in lowercase.
    #[must_use]
    pub fn new<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl WordValidator for KnownWords {
    fn is_valid(&self, tokens: &[String], index: usize) -> bool {
        tokens
            .get(index)
            .is_some_and(|token| self.words.contains(token))
    }
}

impl<F> WordValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, tokens: &[String], index: usize) -> bool {
        tokens.get(index).is_some_and(|token| self(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validators() {
        let tokens = vec!["ma".to_string(), "kaisin".to_string()];
        assert!(!AcceptNone.is_valid(&tokens, 0));

        let known = KnownWords::new(["Kaisin"]);
        assert!(known.is_valid(&tokens, 1));
        assert!(!known.is_valid(&tokens, 0));
        assert!(!known.is_valid(&tokens, 5));

        let short = |w: &str| w.len() < 3;
        assert!(short.is_valid(&tokens, 0));
        assert!(!short.is_valid(&tokens, 1));
    }
}
