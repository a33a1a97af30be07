//! Literal mistake-to-correction replacements applied before correction.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// `WordMapping` is an ordered list of `(mistake, correct)` replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMapping {
    pairs: Vec<(String, String)>,
}

impl WordMapping {
    /// `new` creates a mapping from `pairs`, kept in the given order.
    #[must_use]
    pub fn new<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(a, b)| (a.into(), b.into()))
                .collect(),
        }
    }

    /// `from_path` loads a mapping from a `.csv` file with one `mistake,correct` pair per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resource`] if the file is missing, unreadable or not a `.csv` file, and
    /// the errors of [`WordMapping::from_reader`] for its content.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            return Err(Error::resource(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "expected a .csv file"),
            ));
        }

        log::debug!("Loading word mapping from {}", path.display());
        let file = std::fs::File::open(path).map_err(|e| Error::resource(path, e))?;
        let mapping = Self::from_reader(file).map_err(|e| match e {
            Error::Io(source) => Error::resource(path, source),
            other => other,
        })?;
        log::debug!("Loaded {} word mapping pairs", mapping.len());
        Ok(mapping)
    }

    /// `from_reader` parses `mistake,correct` lines. Blank lines are skipped and both fields are
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, [`Error::MalformedMapping`] for a line that is
    /// not exactly two comma-separated fields, and [`Error::EmptyMapping`] if there are no pairs.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut pairs = Vec::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split(',');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(mistake), Some(correct), None) => {
                    pairs.push((mistake.trim().to_string(), correct.trim().to_string()));
                }
                _ => {
                    return Err(Error::MalformedMapping {
                        line: i + 1,
                        content: line.clone(),
                    })
                }
            }
        }

        if pairs.is_empty() {
            return Err(Error::EmptyMapping);
        }
        Ok(Self { pairs })
    }

    /// `apply` replaces every occurrence of each mistake with its correction, pair by pair in
    /// order, over the whole text.
    ///
    /// # Example
    ///
    /// ```
    /// use ngram_spell::WordMapping;
    ///
    /// let mapping = WordMapping::new([("teh", "the")]);
    /// assert_eq!(mapping.apply("I did teh thing"), "I did the thing");
    /// ```
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut processed = text.to_string();
        for (mistake, correct) in &self.pairs {
            if mistake.is_empty() {
                continue;
            }
            processed = processed.replace(mistake.as_str(), correct);
        }
        processed
    }

    /// The replacement pairs in order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
