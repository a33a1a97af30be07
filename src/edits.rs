//! Candidate strings reachable by primitive character edits.

use std::collections::HashSet;

use crate::alphabet::Alphabet;

/// `EditGenerator` produces the strings one or two edits away from a word.
#[derive(Debug, Clone, Default)]
pub struct EditGenerator {
    alphabet: Alphabet,
}

impl EditGenerator {
    /// `new` creates an edit generator over `alphabet`.
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet used for substitutions and insertions.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// `edits_at_distance_1` computes all edits that are one edit away from `word`.
    ///
    /// An edit is a deletion, a transposition of two adjacent characters, a substitution or an
    /// insertion of one alphabet letter. Positions are characters, not bytes.
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::{Alphabet, EditGenerator};
    ///
    /// let edits = EditGenerator::new(Alphabet::estonian()).edits_at_distance_1("kas");
    /// assert!(edits.contains("kass"));
    /// assert!(edits.contains("as"));
    /// assert!(edits.contains("käs"));
    /// ```
    #[must_use]
    pub fn edits_at_distance_1(&self, word: &str) -> HashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let letters = self.alphabet.letters();
        let splits = (0..=chars.len()).map(|i| (&chars[..i], &chars[i..]));

        let mut edits = HashSet::with_capacity((2 * letters.len() + 2) * (chars.len() + 1));
        for (l, r) in splits {
            if !r.is_empty() {
                edits.insert(join(&[l, &r[1..]]));
            }

            if r.len() > 1 {
                edits.insert(join(&[l, &[r[1], r[0]], &r[2..]]));
            }

            for &c in letters {
                if !r.is_empty() {
                    edits.insert(join(&[l, &[c], &r[1..]]));
                }
                edits.insert(join(&[l, &[c], r]));
            }
        }
        edits
    }

    /// `edits_at_distance_2` lazily computes all edits that are two edits away from `word`.
    ///
    /// The sequence may repeat strings; callers deduplicate.
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    pub fn edits_at_distance_2<'a>(&'a self, word: &str) -> impl Iterator<Item = String> + 'a {
        self.edits_at_distance_1(word)
            .into_iter()
            .flat_map(move |e1| self.edits_at_distance_1(&e1))
    }
}

fn join(parts: &[&[char]]) -> String {
    parts.iter().flat_map(|part| part.iter()).collect()
}
