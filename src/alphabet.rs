//! Letter sets used for edit generation.

const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";
const ESTONIAN_EXTRA: &str = "õüäö";

/// An ordered set of lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// `new` builds an alphabet from `letters`, lowercased and without duplicates.
    ///
    /// # Arguments
    ///
    /// * `letters` - The letters of the alphabet, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::Alphabet;
    ///
    /// let alphabet = Alphabet::new("abBA");
    /// assert_eq!(alphabet.letters(), &['a', 'b']);
    /// ```
    #[must_use]
    pub fn new(letters: &str) -> Self {
        let mut out: Vec<char> = Vec::with_capacity(letters.len());
        for c in letters.chars().flat_map(char::to_lowercase) {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        Self { letters: out }
    }

    /// The 26 ASCII letters.
    #[must_use]
    pub fn latin() -> Self {
        Self::new(LATIN)
    }

    /// The Latin letters plus `õ`, `ü`, `ä` and `ö`.
    #[must_use]
    pub fn estonian() -> Self {
        Self::new(&format!("{LATIN}{ESTONIAN_EXTRA}"))
    }

    /// The letters in order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the alphabet has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether `c` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::estonian()
    }
}
