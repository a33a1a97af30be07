//! Corpus-driven spelling corrector with bigram context.
//!
//! The word model follows [Peter Norvig's essay](http://norvig.com/spell-correct.html): candidate
//! corrections are the known words one edit away, ranked by their corpus frequency. When the
//! previous word is known, the score of each candidate is raised by how often it follows that
//! word in the corpus.
//!
//! # Example
//!
//! ```
//! use ngram_spell::{Config, Corrector, FrequencyModel, WordMapping};
//!
//! fn main() -> Result<(), anyhow::Error> {
//!     let model = FrequencyModel::from_text("ma käisin poes. ma käisin koolis.")?;
//!     let corrector = Corrector::new(model, Config::default())
//!         .with_mapping(WordMapping::new([("kolis", "koolis")]));
//!
//!     let correction = corrector.correct_text("Ma kaisin kolis", true);
//!     assert_eq!(correction.corrected(), "ma käisin koolis");
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, clippy::pedantic, missing_docs)]

mod alphabet;
mod candidates;
mod config;
mod correction;
mod corrector;
mod edits;
mod error;
mod mapping;
mod model;
mod ranker;
mod tokenizer;
mod validator;

pub use alphabet::Alphabet;
pub use candidates::{CandidateSelector, FallbackPolicy};
pub use config::{Config, DEFAULT_CORPUS_PATH, DEFAULT_MAPPING_PATH};
pub use correction::{Correction, TokenPair};
pub use corrector::Corrector;
pub use edits::EditGenerator;
pub use error::{Error, Result};
pub use mapping::WordMapping;
pub use model::FrequencyModel;
pub use ranker::Ranker;
pub use tokenizer::Tokenizer;
pub use validator::{AcceptNone, KnownWords, WordValidator};
